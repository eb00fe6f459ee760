use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{EnvironmentMap, RenderSettings};
use glint_renderer::{demo, render, Camera, RenderConfig, Scene};

mod options;

use options::{GlintArgs, SceneChoice};

/// Resolve settings: defaults, then the config file, then command line flags.
fn load_settings(args: &GlintArgs) -> Result<RenderSettings> {
    let mut settings = match &args.config {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };
    args.apply_to(&mut settings);
    settings.validate().context("Invalid render settings")?;
    Ok(settings)
}

fn build_scene(choice: SceneChoice, settings: &RenderSettings) -> Result<Scene> {
    let scene = match choice {
        SceneChoice::Spheres => demo::spheres(),
        SceneChoice::Shapes => demo::shapes().context("Failed to build the shapes scene")?,
    };
    let mut scene = scene.with_background(settings.background_color());

    if let Some(path) = &settings.envmap {
        let envmap = EnvironmentMap::load(path)
            .with_context(|| format!("Failed to load environment map {}", path.display()))?;
        scene = scene.with_envmap(envmap);
    }

    Ok(scene)
}

fn main() -> Result<()> {
    let args = GlintArgs::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    log::info!("Starting Glint");

    let settings = load_settings(&args)?;
    let scene = build_scene(args.scene, &settings)?;

    let camera = Camera::new(settings.width, settings.height);
    let image = render(&camera, &scene, &RenderConfig::from(&settings));

    image
        .save(&settings.output)
        .with_context(|| format!("Failed to write {}", settings.output.display()))?;
    log::info!("Wrote {}", settings.output.display());

    Ok(())
}
