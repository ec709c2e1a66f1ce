//! Wiring between the loaded [`Config`] and the [`PlanetController`].

use terra_config::{Config, ConfigChanges};
use terra_mesh::{MeshSink, RecordingSink};
use terra_planet::{GenerationReport, PlanetController};
use tracing::{info, warn};

use crate::error::AppError;
use crate::obj_export::ObjSink;

/// A sink that also knows how to report a finished build.
pub trait PlanetOutput: MeshSink {
    /// Called after every pass that changed what the sink holds.
    fn finish(&mut self, config: &Config) -> Result<(), AppError>;
}

impl PlanetOutput for ObjSink {
    fn finish(&mut self, config: &Config) -> Result<(), AppError> {
        let Some(path) = config.output.obj_path.as_deref() else {
            let stats = self.stats();
            info!(
                "{} visible faces: {} vertices, {} triangles",
                stats.faces, stats.vertices, stats.triangles
            );
            return Ok(());
        };
        let stats = self.save(path).map_err(AppError::Export)?;
        info!(
            "Exported {} faces ({} vertices, {} triangles) to {}",
            stats.faces,
            stats.vertices,
            stats.triangles,
            path.display()
        );
        Ok(())
    }
}

impl PlanetOutput for RecordingSink {
    fn finish(&mut self, config: &Config) -> Result<(), AppError> {
        if let Some(path) = &config.output.obj_path {
            warn!("Recording sink cannot export; {} not written", path.display());
        }
        info!(
            "Visible faces: {:?}; {} vertices, {} triangles published",
            self.visible_faces(),
            self.total_vertices(),
            self.total_triangles()
        );
        Ok(())
    }
}

/// Push every setting from `config` into the controller without building.
///
/// Auto-update is held off while shape and colour are installed so neither
/// change handler fires; the caller follows with `generate_planet`.
fn stage<S: MeshSink>(controller: &mut PlanetController<S>, config: &Config) -> Result<(), AppError> {
    controller.set_resolution(config.planet.resolution);
    controller.set_face_render_mask(config.planet.face_render_mask);
    controller.set_build_mode(config.planet.build_mode);
    controller.set_auto_update(false);
    controller.set_shape_settings(&config.shape)?;
    controller.set_colour_settings(config.colour)?;
    controller.set_auto_update(config.planet.auto_update);
    Ok(())
}

/// Build a controller from a validated config and generate the whole planet.
pub fn create_planet<S: PlanetOutput>(
    config: &Config,
    sink: S,
) -> Result<(PlanetController<S>, GenerationReport), AppError> {
    let mut controller = PlanetController::new(sink);
    stage(&mut controller, config)?;
    let report = controller.generate_planet()?;
    controller.sink_mut().finish(config)?;
    Ok((controller, report))
}

/// What [`apply_changes`] ended up doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Geometry rebuilt, with the pass statistics.
    pub rebuilt: Option<GenerationReport>,
    /// Colour reapplied.
    pub recoloured: bool,
}

/// Route a validated config change to the narrowest controller entry point.
///
/// Planet-level changes (resolution, mask, update policy, build mode) need a
/// full `generate_planet`. Otherwise shape and colour changes go through
/// their own handlers, which respect auto-update.
pub fn apply_changes<S: PlanetOutput>(
    controller: &mut PlanetController<S>,
    config: &Config,
    changes: ConfigChanges,
) -> Result<UpdateOutcome, AppError> {
    let mut outcome = UpdateOutcome::default();

    if changes.planet {
        stage(controller, config)?;
        outcome.rebuilt = Some(controller.generate_planet()?);
        outcome.recoloured = true;
    } else {
        if changes.shape {
            outcome.rebuilt = controller.set_shape_settings(&config.shape)?;
        }
        if changes.colour {
            outcome.recoloured = controller.set_colour_settings(config.colour)?;
        }
    }

    if outcome.rebuilt.is_some() || outcome.recoloured || changes.output {
        controller.sink_mut().finish(config)?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_cubesphere::Direction;
    use terra_mesh::Colour;
    use terra_planet::{ColourSettings, FaceRenderMask};

    fn small_config() -> Config {
        let mut config = Config::default();
        config.planet.resolution = 3;
        config
    }

    #[test]
    fn test_create_planet_builds_once() {
        let (controller, report) = create_planet(&small_config(), RecordingSink::new()).unwrap();

        assert_eq!(report.faces_built, 6);
        assert_eq!(report.vertices_processed, 6 * 9);
        assert_eq!(report.triangles, 6 * 8);
        // Staging must not trigger the change handlers.
        for direction in Direction::ALL {
            assert_eq!(controller.sink().face(direction).publish_count, 1);
        }
        assert_eq!(controller.applied_colour(), Some(Colour::WHITE));
    }

    #[test]
    fn test_colour_change_skips_geometry() {
        let config = small_config();
        let (mut controller, _) = create_planet(&config, RecordingSink::new()).unwrap();

        let mut newer = config.clone();
        newer.colour = ColourSettings::new(Colour::new(0.2, 0.4, 0.6));
        let outcome = apply_changes(&mut controller, &newer, config.diff(&newer)).unwrap();

        assert_eq!(outcome.rebuilt, None);
        assert!(outcome.recoloured);
        assert_eq!(controller.sink().published.len(), 6);
        assert_eq!(
            controller.sink().face(Direction::NegY).colour,
            Some(Colour::new(0.2, 0.4, 0.6))
        );
    }

    #[test]
    fn test_shape_change_rebuilds_visible_faces() {
        let mut config = small_config();
        config.planet.face_render_mask = FaceRenderMask::Only(Direction::PosX);
        let (mut controller, _) = create_planet(&config, RecordingSink::new()).unwrap();

        let mut newer = config.clone();
        newer.shape.planet_radius = 4.0;
        let outcome = apply_changes(&mut controller, &newer, config.diff(&newer)).unwrap();

        let report = outcome.rebuilt.unwrap();
        assert_eq!(report.faces_built, 1);
        assert!(!outcome.recoloured);
        assert_eq!(controller.sink().face(Direction::PosX).publish_count, 2);
        assert_eq!(controller.sink().face(Direction::NegX).publish_count, 0);
    }

    #[test]
    fn test_shape_change_ignored_without_auto_update() {
        let mut config = small_config();
        config.planet.auto_update = false;
        let (mut controller, _) = create_planet(&config, RecordingSink::new()).unwrap();

        let mut newer = config.clone();
        newer.shape.planet_radius = 2.0;
        let outcome = apply_changes(&mut controller, &newer, config.diff(&newer)).unwrap();

        assert_eq!(outcome, UpdateOutcome::default());
        assert_eq!(controller.sink().published.len(), 6);
    }

    #[test]
    fn test_resolution_change_regenerates_everything() {
        let config = small_config();
        let (mut controller, _) = create_planet(&config, RecordingSink::new()).unwrap();

        let mut newer = config.clone();
        newer.planet.resolution = 5;
        let outcome = apply_changes(&mut controller, &newer, config.diff(&newer)).unwrap();

        let report = outcome.rebuilt.unwrap();
        assert_eq!(report.vertices_processed, 6 * 25);
        assert!(outcome.recoloured);
        assert_eq!(controller.resolution(), 5);
        assert_eq!(controller.sink().face(Direction::PosZ).vertex_count, 25);
    }

    #[test]
    fn test_obj_output_written_on_create() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config();
        config.output.obj_path = Some(dir.path().join("planet.obj"));

        create_planet(&config, ObjSink::new()).unwrap();
        let text = std::fs::read_to_string(dir.path().join("planet.obj")).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("o ")).count(), 6);
    }
}
