// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera-space frustum rays and parameters for full-screen SDF raymarching.
//!
//! A raymarching post-process draws one screen quad and reconstructs a view
//! ray per pixel from the four corners of the camera frustum. This crate
//! computes those corners, drives the camera that produces them, and packs
//! every effect parameter into a GPU-ready uniform block.
//!
//! # Key entry points
//!
//! - [`camera::camera_space_frustum`] - the per-frame corner matrix
//! - [`camera::FlyCameraController`] - first-person look/move controller
//! - [`renderer::RaymarchUniform::prepare`] - per-frame uniform block
//! - [`options::Options`] - effect configuration with TOML presets
//!
//! Everything here is a pure function or a plain value type; the host calls
//! it explicitly once per frame on its render thread.

pub mod camera;
pub mod error;
pub mod options;
pub mod renderer;

pub use error::RigError;
