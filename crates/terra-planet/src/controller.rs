//! Planet regeneration control.
//!
//! [`PlanetController`] owns the six [`FaceMesh`]es and decides, per change
//! event, how much of the planet to rebuild:
//!
//! | Entry point                    | Initialise | Mesh (visible faces) | Colour |
//! |--------------------------------|:----------:|:--------------------:|:------:|
//! | `generate_planet`              | yes        | yes                  | yes    |
//! | `on_shape_settings_changed`    | yes        | yes                  | no     |
//! | `on_colour_settings_changed`   | no         | no                   | yes    |
//! | `generate_colours`             | no         | no                   | yes    |
//!
//! The two change handlers do nothing while auto-update is off.

use std::sync::Arc;

use terra_cubesphere::Direction;
use terra_mesh::{Colour, FaceMesh, MAX_RESOLUTION, MIN_RESOLUTION, MeshSink};
use terra_shape::{ShapeEvaluator, ShapeGenerator, ShapeSettings};
use tracing::{debug, info, trace};

use crate::build::{BuildMode, FaceJob, build_parallel};
use crate::colour_settings::ColourSettings;
use crate::error::PlanetError;
use crate::mask::FaceRenderMask;

/// Resolution a new controller starts with.
pub const DEFAULT_RESOLUTION: u32 = 10;

/// What a mesh pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Faces whose geometry was rebuilt and published.
    pub faces_built: usize,
    /// Shape evaluations performed, one per rebuilt vertex.
    pub vertices_processed: usize,
    /// Triangles across the rebuilt faces.
    pub triangles: usize,
}

/// Owns the six faces of a planet and regenerates them on configuration changes.
pub struct PlanetController<S: MeshSink> {
    resolution: u32,
    face_render_mask: FaceRenderMask,
    auto_update: bool,
    build_mode: BuildMode,
    shape: Option<Arc<dyn ShapeEvaluator>>,
    colour_settings: Option<ColourSettings>,
    faces: [FaceMesh; 6],
    sink: S,
    initialized: bool,
    applied_colour: Option<Colour>,
    last_report: GenerationReport,
}

impl<S: MeshSink> PlanetController<S> {
    /// A controller with default settings and no shape or colour yet.
    ///
    /// Resolution is [`DEFAULT_RESOLUTION`], every face is shown, auto-update
    /// is on and faces build sequentially.
    pub fn new(sink: S) -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            face_render_mask: FaceRenderMask::All,
            auto_update: true,
            build_mode: BuildMode::Sequential,
            shape: None,
            colour_settings: None,
            faces: Direction::ALL.map(FaceMesh::new),
            sink,
            initialized: false,
            applied_colour: None,
            last_report: GenerationReport::default(),
        }
    }

    // --- Configuration ---

    /// Set the grid resolution used by the next build.
    ///
    /// Does not rebuild anything by itself; follow with
    /// [`generate_planet`](Self::generate_planet).
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is outside `[2, 256]`. Callers validate first.
    pub fn set_resolution(&mut self, resolution: u32) {
        assert!(
            (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution),
            "resolution must be in [{MIN_RESOLUTION}, {MAX_RESOLUTION}], got {resolution}"
        );
        self.resolution = resolution;
    }

    /// Set which faces are visible from the next initialise on.
    pub fn set_face_render_mask(&mut self, mask: FaceRenderMask) {
        self.face_render_mask = mask;
    }

    /// Enable or disable the change handlers.
    pub fn set_auto_update(&mut self, auto_update: bool) {
        self.auto_update = auto_update;
    }

    /// Choose sequential or parallel face builds.
    pub fn set_build_mode(&mut self, build_mode: BuildMode) {
        self.build_mode = build_mode;
    }

    /// Replace the shape with a [`ShapeGenerator`] built from `settings`, then
    /// run [`on_shape_settings_changed`](Self::on_shape_settings_changed).
    pub fn set_shape_settings(
        &mut self,
        settings: &ShapeSettings,
    ) -> Result<Option<GenerationReport>, PlanetError> {
        self.set_shape_evaluator(Arc::new(ShapeGenerator::new(settings)))
    }

    /// Replace the shape with an arbitrary evaluator, then run
    /// [`on_shape_settings_changed`](Self::on_shape_settings_changed).
    pub fn set_shape_evaluator(
        &mut self,
        shape: Arc<dyn ShapeEvaluator>,
    ) -> Result<Option<GenerationReport>, PlanetError> {
        self.shape = Some(shape);
        self.on_shape_settings_changed()
    }

    /// Replace the colour settings, then run
    /// [`on_colour_settings_changed`](Self::on_colour_settings_changed).
    pub fn set_colour_settings(&mut self, settings: ColourSettings) -> Result<bool, PlanetError> {
        self.colour_settings = Some(settings);
        self.on_colour_settings_changed()
    }

    // --- Entry points ---

    /// Initialise, rebuild every visible face, and apply colour.
    ///
    /// Runs end to end regardless of prior state or auto-update. Both shape
    /// and colour must be configured; nothing is touched otherwise.
    pub fn generate_planet(&mut self) -> Result<GenerationReport, PlanetError> {
        let shape = self.current_shape()?;
        let colour = self.current_colour()?;

        self.initialise();
        let report = self.generate_mesh(&shape);
        self.apply_colour(colour);

        info!(
            "Planet generated: resolution={}, mask={}, {} faces, {} vertices, {} triangles",
            self.resolution,
            self.face_render_mask,
            report.faces_built,
            report.vertices_processed,
            report.triangles
        );
        Ok(report)
    }

    /// React to a shape change: initialise and rebuild visible faces.
    ///
    /// Colour is left alone. Returns `Ok(None)` without doing anything when
    /// auto-update is off.
    pub fn on_shape_settings_changed(&mut self) -> Result<Option<GenerationReport>, PlanetError> {
        if !self.auto_update {
            debug!("Shape settings changed; auto-update off, skipping rebuild");
            return Ok(None);
        }
        let shape = self.current_shape()?;

        self.initialise();
        let report = self.generate_mesh(&shape);
        debug!(
            "Shape rebuild: {} faces, {} vertices",
            report.faces_built, report.vertices_processed
        );
        Ok(Some(report))
    }

    /// React to a colour change: reapply colour to all faces.
    ///
    /// Geometry is never touched. Returns `Ok(false)` without doing anything
    /// when auto-update is off.
    pub fn on_colour_settings_changed(&mut self) -> Result<bool, PlanetError> {
        if !self.auto_update {
            debug!("Colour settings changed; auto-update off, skipping");
            return Ok(false);
        }
        self.generate_colours()?;
        Ok(true)
    }

    /// Colour-only refresh: set the configured colour on all six faces.
    pub fn generate_colours(&mut self) -> Result<(), PlanetError> {
        let colour = self.current_colour()?;
        self.apply_colour(colour);
        Ok(())
    }

    // --- Accessors ---

    /// Current resolution.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Current face render mask.
    pub fn face_render_mask(&self) -> FaceRenderMask {
        self.face_render_mask
    }

    /// Whether change handlers run.
    pub fn auto_update(&self) -> bool {
        self.auto_update
    }

    /// Current build mode.
    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    /// `true` after the first initialise.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The face pointing in `direction`.
    pub fn face(&self, direction: Direction) -> &FaceMesh {
        &self.faces[direction.index()]
    }

    /// All six faces in [`Direction::ALL`] order.
    pub fn faces(&self) -> &[FaceMesh; 6] {
        &self.faces
    }

    /// Number of faces currently marked visible.
    pub fn visible_face_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_visible()).count()
    }

    /// Colour last applied to the faces, if any.
    pub fn applied_colour(&self) -> Option<Colour> {
        self.applied_colour
    }

    /// Report of the most recent mesh pass.
    pub fn last_report(&self) -> GenerationReport {
        self.last_report
    }

    /// The mesh sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The mesh sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the controller, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // --- Internals ---

    fn current_shape(&self) -> Result<Arc<dyn ShapeEvaluator>, PlanetError> {
        self.shape.clone().ok_or(PlanetError::MissingShapeSettings)
    }

    fn current_colour(&self) -> Result<Colour, PlanetError> {
        self.colour_settings
            .map(|c| c.planet_colour)
            .ok_or(PlanetError::MissingColourSettings)
    }

    /// Point every face at the current resolution and apply the mask.
    ///
    /// Idempotent. Index buffers are regenerated lazily, by the next rebuild
    /// of a face whose resolution changed, so hidden faces keep their last
    /// complete buffers.
    fn initialise(&mut self) {
        let mask = self.face_render_mask;
        for face in &mut self.faces {
            let direction = face.direction();
            if face.set_resolution(self.resolution) {
                trace!("{direction} will rebuild at resolution {}", self.resolution);
            }
            let visible = mask.shows(direction);
            face.set_visible(visible);
            self.sink.set_visible(direction, visible);
        }
        self.initialized = true;
    }

    /// Rebuild and publish every visible face. Hidden faces are skipped.
    fn generate_mesh(&mut self, shape: &Arc<dyn ShapeEvaluator>) -> GenerationReport {
        let visible = self.visible_face_count();
        let workers = self.build_mode.worker_count(visible);
        let mut report = GenerationReport::default();

        if workers > 1 {
            let jobs = self
                .faces
                .iter()
                .enumerate()
                .filter(|(_, face)| face.is_visible())
                .map(|(slot, face)| FaceJob {
                    slot,
                    direction: face.direction(),
                    resolution: face.target_resolution(),
                    indices: face.target_indices(),
                })
                .collect();
            for built in build_parallel(jobs, shape.as_ref(), workers) {
                report.vertices_processed += built.geometry.vertices.len();
                self.faces[built.slot].apply_geometry(built.geometry, built.indices);
            }
        } else {
            for face in self.faces.iter_mut().filter(|f| f.is_visible()) {
                report.vertices_processed += face.construct_mesh(shape.as_ref());
            }
        }

        for face in self.faces.iter().filter(|f| f.is_visible()) {
            report.faces_built += 1;
            report.triangles += face.triangle_count();
            self.sink.publish(face.payload());
        }

        self.last_report = report;
        report
    }

    fn apply_colour(&mut self, colour: Colour) {
        for direction in Direction::ALL {
            self.sink.set_colour(direction, colour);
        }
        self.applied_colour = Some(colour);
    }
}
