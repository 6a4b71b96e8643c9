//! GPU-facing data for the full-screen raymarch pass.
//!
//! Contains the screen quad that carries frustum row indices and the
//! per-frame uniform block. Pipeline creation and binding stay with the host.

pub mod screen_quad;
pub mod uniform;

pub use screen_quad::{
    corner_for_uv, interpolate_ray, world_ray_direction, ScreenVertex,
    SCREEN_QUAD, SCREEN_QUAD_INDICES,
};
pub use uniform::RaymarchUniform;
