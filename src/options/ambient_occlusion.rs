use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ambient Occlusion", inline)]
#[serde(default)]
/// Distance-field ambient occlusion parameters.
pub struct AmbientOcclusionOptions {
    /// Number of samples along the normal.
    #[schemars(title = "AO Iteration", range(min = 0, max = 16))]
    pub iteration: u32,
    /// Step length between samples.
    #[schemars(title = "AO Distance", range(min = 0.01, max = 4.0), extend("step" = 0.01))]
    pub distance: f32,
    /// Occlusion strength.
    #[schemars(title = "AO Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub intensity: f32,
}

impl Default for AmbientOcclusionOptions {
    fn default() -> Self {
        Self {
            iteration: 3,
            distance: 1.0,
            intensity: 0.8,
        }
    }
}
