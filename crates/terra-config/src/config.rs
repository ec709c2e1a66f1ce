//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use terra_mesh::{Colour, MAX_RESOLUTION, MIN_RESOLUTION};
use terra_planet::{BuildMode, ColourSettings, DEFAULT_RESOLUTION, FaceRenderMask};
use terra_shape::ShapeSettings;

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet-level settings: resolution, mask, update policy.
    pub planet: PlanetConfig,
    /// Shape of the planet surface.
    pub shape: ShapeSettings,
    /// Material colour.
    pub colour: ColourSettings,
    /// Where generated meshes are written.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Planet-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Vertices per face edge, in `[2, 256]`.
    pub resolution: u32,
    /// Rebuild automatically when shape or colour settings change.
    pub auto_update: bool,
    /// Which faces are shown and built.
    pub face_render_mask: FaceRenderMask,
    /// Sequential or parallel face builds.
    pub build_mode: BuildMode,
}

/// Mesh export settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Write visible faces to this Wavefront OBJ file after each build.
    pub obj_path: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            auto_update: true,
            face_render_mask: FaceRenderMask::All,
            build_mode: BuildMode::Sequential,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Which parts of the planet a configuration change affects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigChanges {
    /// Resolution, mask, auto-update or build mode changed.
    pub planet: bool,
    /// Shape settings changed.
    pub shape: bool,
    /// Colour settings changed.
    pub colour: bool,
    /// Output settings changed.
    pub output: bool,
}

impl ConfigChanges {
    /// `true` if nothing relevant changed.
    pub fn is_empty(&self) -> bool {
        !(self.planet || self.shape || self.colour || self.output)
    }
}

// --- Validation / diffing ---

impl Config {
    /// The default configuration with the given planet colour.
    pub fn with_colour(colour: Colour) -> Self {
        Self {
            colour: ColourSettings::new(colour),
            ..Default::default()
        }
    }

    /// Check the values the planet core expects callers to enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolution = self.planet.resolution;
        if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution) {
            return Err(ConfigError::InvalidResolution(resolution));
        }
        self.shape.validate()?;
        Ok(())
    }

    /// Compare against a newer configuration.
    pub fn diff(&self, newer: &Config) -> ConfigChanges {
        ConfigChanges {
            planet: self.planet != newer.planet,
            shape: self.shape != newer.shape,
            colour: self.colour != newer.colour,
            output: self.output != newer.output,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(5)
            .separate_tuple_members(false)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_cubesphere::Direction;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(5))
                .unwrap();
        assert!(ron_str.contains("resolution: 10"));
        assert!(ron_str.contains("face_render_mask: All"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::with_colour(Colour::new(0.1, 0.2, 0.3));
        config.shape = ShapeSettings::continents(2.0, 17);
        config.planet.face_render_mask = FaceRenderMask::Only(Direction::NegZ);
        config.planet.build_mode = BuildMode::Parallel { workers: 4 };
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(planet: (resolution: 32))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.planet.resolution, 32);
        assert!(config.planet.auto_update);
        assert_eq!(config.shape, ShapeSettings::default());
        assert_eq!(config.colour, ColourSettings::default());
    }

    #[test]
    fn test_mask_parses_from_ron() {
        let ron_str = "(planet: (face_render_mask: Only(PosY)))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(
            config.planet.face_render_mask,
            FaceRenderMask::Only(Direction::PosY)
        );
    }

    #[test]
    fn test_validate_resolution_bounds() {
        let mut config = Config::default();
        for ok in [2, 10, 256] {
            config.planet.resolution = ok;
            assert!(config.validate().is_ok(), "resolution {ok} rejected");
        }
        for bad in [0, 1, 257] {
            config.planet.resolution = bad;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidResolution(r)) if r == bad
            ));
        }
    }

    #[test]
    fn test_validate_rejects_bad_shape() {
        let mut config = Config::default();
        config.shape.planet_radius = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidShape(_))));
    }

    #[test]
    fn test_diff_classifies_changes() {
        let base = Config::default();
        assert!(base.diff(&base.clone()).is_empty());

        let mut colour_only = base.clone();
        colour_only.colour = ColourSettings::new(Colour::new(1.0, 0.0, 0.0));
        let changes = base.diff(&colour_only);
        assert!(changes.colour && !changes.shape && !changes.planet);

        let mut shape_and_planet = base.clone();
        shape_and_planet.shape.planet_radius = 3.0;
        shape_and_planet.planet.resolution = 64;
        let changes = base.diff(&shape_and_planet);
        assert!(changes.shape && changes.planet && !changes.colour);
    }

    #[test]
    fn test_debug_changes_are_not_planet_changes() {
        let base = Config::default();
        let mut louder = base.clone();
        louder.debug.log_level = "trace".into();
        assert!(base.diff(&louder).is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.planet.resolution = 48;
        config.shape = ShapeSettings::continents(1.5, 2);

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.planet.resolution = 128;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.planet.resolution), Some(128));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_ron_comments_preserved() {
        let ron_str = "// This is a comment\n(\n  // Another comment\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
