use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::gradient::Gradient;

/// Upper bound on `sphere_count`; also the length of the sphere color array.
pub const MAX_SPHERES: u32 = 64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Signed-distance scene description: a ring of spheres over a plane.
pub struct SdfOptions {
    /// Base color of the blended mesh.
    #[schemars(skip)]
    pub mesh_color: [f32; 4],
    /// Sphere center (xyz) and radius (w).
    #[schemars(skip)]
    pub sphere: [f32; 4],
    /// Number of spheres.
    #[schemars(title = "Sphere Count", range(min = 1, max = 64))]
    pub sphere_count: u32,
    /// Distance of each sphere from the ring center.
    #[schemars(title = "Sphere Distance", range(min = 0.0, max = 10.0), extend("step" = 0.05))]
    pub sphere_distance: f32,
    /// Smooth-minimum radius between spheres.
    #[schemars(title = "Sphere Smooth", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub sphere_smooth: f32,
    /// Ring rotation speed.
    #[schemars(title = "Rotate Scale", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub sphere_rotate_scale: f32,
    /// Smooth-minimum radius between spheres and the ground plane.
    #[schemars(title = "Plane Smooth", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub plane_smooth: f32,
    /// Ground plane color.
    #[schemars(skip)]
    pub plane_color: [f32; 4],
    /// Gradient sampled once per sphere for its color.
    #[schemars(skip)]
    pub sphere_gradient: Gradient,
}

impl Default for SdfOptions {
    fn default() -> Self {
        Self {
            mesh_color: [1.0; 4],
            sphere: [0.0, 0.0, 0.0, 0.5],
            sphere_count: 1,
            sphere_distance: 0.0,
            sphere_smooth: 1.0,
            sphere_rotate_scale: 1.0,
            plane_smooth: 1.0,
            plane_color: [1.0; 4],
            sphere_gradient: Gradient::default(),
        }
    }
}

impl SdfOptions {
    /// One gradient color per sphere.
    #[must_use]
    pub fn sphere_colors(&self) -> Vec<[f32; 4]> {
        self.sphere_gradient
            .sample_evenly(self.sphere_count.min(MAX_SPHERES) as usize)
    }
}
