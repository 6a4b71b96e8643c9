use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reflection", inline)]
#[serde(default)]
/// Surface and environment reflection parameters.
pub struct ReflectionOptions {
    /// Number of reflection bounces (0 disables).
    #[schemars(title = "Bounces", range(min = 0, max = 8))]
    pub count: u32,
    /// Strength of surface-to-surface reflections.
    #[schemars(title = "Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub intensity: f32,
    /// Strength of the cubemap reflection.
    #[schemars(title = "Environment", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub env_intensity: f32,
    /// How far the cubemap lookup is blurred.
    #[schemars(title = "Environment Blur", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub env_blur_intensity: f32,
}

impl Default for ReflectionOptions {
    fn default() -> Self {
        Self {
            count: 0,
            intensity: 1.0,
            env_intensity: 0.5,
            env_blur_intensity: 0.05,
        }
    }
}

impl ReflectionOptions {
    pub(crate) fn clamp_ranges(&mut self) {
        self.intensity = self.intensity.clamp(0.0, 1.0);
        self.env_intensity = self.env_intensity.clamp(0.0, 1.0);
        self.env_blur_intensity = self.env_blur_intensity.clamp(0.0, 1.0);
    }
}
