//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use terra_planet::{BuildMode, FaceRenderMask};

use crate::Config;

/// Terra command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "terra", about = "Procedural cube-sphere planet generator")]
pub struct CliArgs {
    /// Vertices per face edge (2-256).
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Faces to build: all, top, bottom, left, right, front, back, or ±x/±y/±z.
    #[arg(long)]
    pub mask: Option<FaceRenderMask>,

    /// Base planet radius.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Disable automatic rebuilds on shape/colour changes.
    #[arg(long)]
    pub no_auto_update: bool,

    /// Build faces on this many threads (0 = one per CPU).
    #[arg(long)]
    pub parallel: Option<usize>,

    /// Write visible faces to a Wavefront OBJ file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep running and regenerate when `config.ron` changes.
    #[arg(long)]
    pub watch: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(resolution) = args.resolution {
            self.planet.resolution = resolution;
        }
        if let Some(mask) = args.mask {
            self.planet.face_render_mask = mask;
        }
        if let Some(radius) = args.radius {
            self.shape.planet_radius = radius;
        }
        if args.no_auto_update {
            self.planet.auto_update = false;
        }
        if let Some(workers) = args.parallel {
            self.planet.build_mode = BuildMode::Parallel { workers };
        }
        if let Some(ref path) = args.export {
            self.output.obj_path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_cubesphere::Direction;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            resolution: Some(64),
            mask: Some(FaceRenderMask::Only(Direction::PosY)),
            parallel: Some(0),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.planet.resolution, 64);
        assert_eq!(
            config.planet.face_render_mask,
            FaceRenderMask::Only(Direction::PosY)
        );
        assert_eq!(config.planet.build_mode, BuildMode::Parallel { workers: 0 });
        // Non-overridden fields retain defaults
        assert!(config.planet.auto_update);
        assert_eq!(config.shape.planet_radius, 1.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "terra",
            "--resolution",
            "32",
            "--mask",
            "top",
            "--radius",
            "2.5",
            "--no-auto-update",
            "--export",
            "planet.obj",
        ]);
        assert_eq!(args.resolution, Some(32));
        assert_eq!(args.mask, Some(FaceRenderMask::Only(Direction::PosY)));
        assert_eq!(args.radius, Some(2.5));
        assert!(args.no_auto_update);
        assert!(!args.watch);

        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert!(!config.planet.auto_update);
        assert_eq!(config.output.obj_path, Some(PathBuf::from("planet.obj")));
    }

    #[test]
    fn test_cli_rejects_unknown_mask() {
        let result = CliArgs::try_parse_from(["terra", "--mask", "sideways"]);
        assert!(result.is_err());
    }
}
