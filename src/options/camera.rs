use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub fovy: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self { fovy: 60.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fly Camera", inline)]
#[serde(default)]
/// First-person fly controller sensitivity.
pub struct FlyCameraOptions {
    /// Degrees of rotation per pixel of mouse drag.
    #[schemars(title = "Rotate Multiplier", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub rotate_multiplier: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Translate Speed", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub translate_speed: f32,
}

impl Default for FlyCameraOptions {
    fn default() -> Self {
        Self {
            rotate_multiplier: 0.2,
            translate_speed: 5.0,
        }
    }
}
