//! Render settings, loadable from a JSON file.
//!
//! Only the frame and output are configurable here; which objects make up
//! the scene is decided by the caller.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use glint_math::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bound on reflection/refraction bounces.
pub const MAX_RECURSION_DEPTH: u32 = 3;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Output frame and render parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Where the rendered bitmap is written
    pub output: PathBuf,

    /// Optional equirectangular bitmap sampled by rays that miss everything
    pub envmap: Option<PathBuf>,

    /// Background color (0-255 RGB) used when there is no environment map
    pub background: [u8; 3],

    /// Maximum reflection/refraction bounce depth
    pub max_depth: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            output: PathBuf::from("r.bmp"),
            envmap: None,
            background: [0, 0, 0],
            max_depth: MAX_RECURSION_DEPTH,
        }
    }
}

impl RenderSettings {
    /// Parse settings from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: Self = serde_json::from_reader(BufReader::new(file))?;
        settings.validate()?;

        log::debug!("Loaded render settings from {}", path.display());
        Ok(settings)
    }

    /// Check that the settings describe a renderable frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Background as a [`Color`].
    pub fn background_color(&self) -> Color {
        Color::from(self.background)
    }
}
