use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Shadow", inline)]
#[serde(default)]
/// Soft shadow parameters.
pub struct ShadowOptions {
    /// Near and far distance of the shadow ray.
    #[schemars(skip)]
    pub min_max_distance: [f32; 2],
    /// Shadow darkness.
    #[schemars(title = "Intensity", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub intensity: f32,
    /// Penumbra sharpness; larger is harder.
    #[schemars(title = "Penumbra", range(min = 1.0, max = 128.0), extend("step" = 1.0))]
    pub penumbra: f32,
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self {
            min_max_distance: [0.8, 100.0],
            intensity: 1.0,
            penumbra: 20.0,
        }
    }
}
