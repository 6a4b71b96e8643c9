use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Render", inline)]
#[serde(default)]
/// Raymarch loop limits.
pub struct RenderOptions {
    /// Maximum march steps per ray.
    #[schemars(title = "Max Iteration", range(min = 1, max = 1024))]
    pub max_iteration: u32,
    /// Distance below which a ray counts as a surface hit.
    #[schemars(title = "Hit Threshold", range(min = 0.00001, max = 0.1), extend("step" = 0.0001))]
    pub hit_threshold: f32,
    /// Rays travelling further than this return the background.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub max_render_distance: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_iteration: 200,
            hit_threshold: 0.001,
            max_render_distance: 100.0,
        }
    }
}
