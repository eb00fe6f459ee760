//! Command line option parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_core::RenderSettings;

#[derive(Clone, Debug, Parser)]
#[command(name = "glint", version, about = "Render a built-in scene with a recursive ray tracer")]
pub(crate) struct GlintArgs {
    /// JSON settings file; command line flags override its values.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(long)]
    pub(crate) width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    pub(crate) height: Option<u32>,

    /// Output bitmap path.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Equirectangular 24-bit bitmap sampled by rays that miss everything.
    #[arg(long, value_name = "PATH")]
    pub(crate) envmap: Option<PathBuf>,

    /// Maximum reflection/refraction bounce depth.
    #[arg(long = "max-depth", value_name = "N")]
    pub(crate) max_depth: Option<u32>,

    /// Which built-in scene to render.
    #[arg(long, value_enum, default_value_t = SceneChoice::Spheres)]
    pub(crate) scene: SceneChoice,

    /// Additional logging to stderr.
    #[arg(long = "verbose", short = 'v')]
    pub(crate) verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SceneChoice {
    /// Ivory, glass, rubber and mirror spheres
    Spheres,
    /// Floor, cube, pyramid, triangle and a glass sphere
    Shapes,
}

impl GlintArgs {
    /// Apply the flags that were given on top of `settings`.
    pub(crate) fn apply_to(&self, settings: &mut RenderSettings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if let Some(envmap) = &self.envmap {
            settings.envmap = Some(envmap.clone());
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
    }
}
