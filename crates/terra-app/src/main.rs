//! Terra: generate a cube-sphere planet from `config.ron` and CLI flags.
//!
//! Builds the six face meshes once, logs what was produced and optionally
//! writes them to a Wavefront OBJ file. With `--watch` it keeps running and
//! regenerates only what each config edit requires.
//!
//! Run with: `cargo run -p terra-app -- --resolution 64 --export planet.obj`

mod error;
mod obj_export;
mod planet;
mod watch;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use terra_config::{CliArgs, Config};
use tracing::{error, info};

use crate::error::AppError;
use crate::obj_export::ObjSink;
use crate::planet::create_planet;
use crate::watch::{ConfigWatcher, POLL_INTERVAL};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(terra_config::default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let file_config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Warning: failed to load config: {e}, using defaults");
        Config::default()
    });
    let mut config = file_config.clone();
    config.apply_cli_overrides(&args);

    terra_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    info!("Terra v{}", env!("CARGO_PKG_VERSION"));
    info!("Config directory: {}", config_dir.display());

    let result = run(&config_dir, file_config, config, args, ObjSink::new());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    config_dir: &Path,
    file_config: Config,
    config: Config,
    args: CliArgs,
    sink: ObjSink,
) -> Result<(), AppError> {
    config.validate()?;
    info!(
        "Planet: resolution={}, mask={}, radius={}, {} noise layers, {:?}",
        config.planet.resolution,
        config.planet.face_render_mask,
        config.shape.planet_radius,
        config.shape.noise_layers.len(),
        config.planet.build_mode
    );

    let (mut controller, report) = create_planet(&config, sink)?;
    info!(
        "Built {} faces: {} vertices, {} triangles",
        report.faces_built, report.vertices_processed, report.triangles
    );

    if args.watch {
        ConfigWatcher::new(config_dir, file_config, args).run(&mut controller, POLL_INTERVAL)?;
    }
    Ok(())
}
