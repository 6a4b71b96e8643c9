//! Raymarch effect options with TOML preset support.
//!
//! Every tweakable parameter of the effect (loop limits, shadows, ambient
//! occlusion, reflections, the SDF scene, camera and fly controller) is
//! consolidated here. Options serialize to/from TOML so presets can be
//! stored as plain files.

mod ambient_occlusion;
mod camera;
pub mod gradient;
mod reflection;
mod render;
mod sdf;
mod shadow;

use std::path::Path;

pub use ambient_occlusion::AmbientOcclusionOptions;
pub use camera::{CameraOptions, FlyCameraOptions};
pub use gradient::{Gradient, GradientKey};
pub use reflection::ReflectionOptions;
pub use render::RenderOptions;
use schemars::JsonSchema;
pub use sdf::{SdfOptions, MAX_SPHERES};
use serde::{Deserialize, Serialize};
pub use shadow::ShadowOptions;

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[shadow]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Raymarch loop limits.
    pub render: RenderOptions,
    /// Soft shadow parameters.
    pub shadow: ShadowOptions,
    /// Ambient occlusion parameters.
    pub ambient_occlusion: AmbientOcclusionOptions,
    /// Reflection parameters.
    pub reflection: ReflectionOptions,
    /// Signed-distance scene description.
    pub sdf: SdfOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Fly controller sensitivity.
    pub fly_camera: FlyCameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Copy with range-restricted fields pulled back into range.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut opts = self.clone();
        opts.sdf.sphere_count = opts.sdf.sphere_count.clamp(1, MAX_SPHERES);
        opts.reflection.clamp_ranges();
        opts
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let opts: Self = toml::from_str(&content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        log::debug!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }

    /// Load a named preset (`<dir>/<name>.toml`).
    pub fn load_preset(dir: &Path, name: &str) -> Result<Self, RigError> {
        let path = dir.join(format!("{name}.toml"));
        match Self::load(&path) {
            Ok(opts) => {
                log::info!("Loaded preset '{name}'");
                Ok(opts)
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                Err(e)
            }
        }
    }

    /// Save as a named preset (`<dir>/<name>.toml`).
    pub fn save_preset(&self, dir: &Path, name: &str) -> Result<(), RigError> {
        let path = dir.join(format!("{name}.toml"));
        self.save(&path)?;
        log::info!("Saved preset '{name}'");
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    ///
    /// A missing or unreadable directory yields an empty list; use
    /// [`Options::try_list_presets`] to observe the error.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        Self::try_list_presets(dir).unwrap_or_default()
    }

    /// List available preset names, failing if `dir` cannot be read.
    pub fn try_list_presets(dir: &Path) -> Result<Vec<String>, RigError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)?.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "toml") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
