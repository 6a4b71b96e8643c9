//! Camera system for full-screen raymarching.
//!
//! Provides the camera transform pair, the camera-space frustum corner
//! computation, and a first-person fly controller.

/// First-person fly controller driven by per-frame input snapshots.
pub mod controller;
/// Core camera and transform types.
pub mod core;
/// Camera-space frustum corners packed for ray reconstruction.
pub mod frustum;

pub use controller::{FlyCameraController, FlyUpdate, FrameInput};
pub use self::core::{Camera, Transform};
pub use frustum::{camera_space_frustum, Corner, FrustumCorners};
