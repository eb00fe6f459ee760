//! Glint Core - the pieces of a render that live outside the tracer.
//!
//! This crate provides:
//!
//! - **Bitmap I/O**: 24-bit uncompressed BMP encoding and decoding
//! - **Environment maps**: equirectangular background lookup by ray direction
//! - **Settings**: frame size, output path and bounce depth, loadable from JSON
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{EnvironmentMap, RenderSettings};
//!
//! let settings = RenderSettings::load("render.json")?;
//! let sky = settings.envmap.as_ref().map(EnvironmentMap::load).transpose()?;
//! ```

pub mod bitmap;
pub mod envmap;
pub mod settings;

// Re-export commonly used types
pub use bitmap::{read_bitmap, write_bitmap, Bitmap, BitmapError};
pub use envmap::EnvironmentMap;
pub use settings::{ConfigError, RenderSettings, MAX_RECURSION_DEPTH};
