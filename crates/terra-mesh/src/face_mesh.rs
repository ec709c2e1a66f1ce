//! One cube face of the planet: its index buffer, displaced vertices and normals.

use std::borrow::Cow;

use glam::Vec3;
use terra_cubesphere::Direction;
use terra_shape::ShapeEvaluator;

use crate::grid::{
    MIN_RESOLUTION, fill_face_vertices, grid_triangle_indices, triangle_count, vertex_count,
};
use crate::normals::fill_vertex_normals;
use crate::sink::FaceMeshPayload;

/// Vertex positions and normals of one face, built away from its [`FaceMesh`].
///
/// Lets worker threads build geometry from shared, read-only inputs and hand
/// the result back for [`FaceMesh::apply_geometry`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceGeometry {
    /// `resolution²` surface points, row-major.
    pub vertices: Vec<Vec3>,
    /// Unit normals, parallel to `vertices`.
    pub normals: Vec<Vec3>,
}

impl FaceGeometry {
    /// Build the displaced grid and its normals for one face.
    ///
    /// `indices` must be the index buffer for `resolution`.
    pub fn build(
        direction: Direction,
        resolution: u32,
        indices: &[u32],
        shape: &dyn ShapeEvaluator,
    ) -> Self {
        let mut geometry = Self::default();
        geometry.rebuild(direction, resolution, indices, shape);
        geometry
    }

    fn rebuild(
        &mut self,
        direction: Direction,
        resolution: u32,
        indices: &[u32],
        shape: &dyn ShapeEvaluator,
    ) {
        fill_face_vertices(direction, resolution, shape, &mut self.vertices);
        fill_vertex_normals(&self.vertices, indices, &mut self.normals);
    }
}

/// Mesh state for a single cube face.
///
/// [`set_resolution`](Self::set_resolution) only records the target. The
/// index buffer is regenerated for it on the next rebuild, so a face that is
/// never rebuilt (a hidden one) keeps its last indices, vertices and normals
/// together. Vertex and normal buffers follow the shape and are rebuilt in
/// place on every [`construct_mesh`](Self::construct_mesh).
#[derive(Clone, Debug)]
pub struct FaceMesh {
    direction: Direction,
    resolution: u32,
    target_resolution: u32,
    indices: Vec<u32>,
    geometry: FaceGeometry,
    visible: bool,
}

impl FaceMesh {
    /// An empty face with no buffers, hidden.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            resolution: 0,
            target_resolution: 0,
            indices: Vec::new(),
            geometry: FaceGeometry::default(),
            visible: false,
        }
    }

    /// Which face this is.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Resolution of the current buffers, `0` before the first build.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Resolution the next rebuild will use.
    pub fn target_resolution(&self) -> u32 {
        self.target_resolution
    }

    /// Triangle list, three indices per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Displaced vertex positions.
    pub fn vertices(&self) -> &[Vec3] {
        &self.geometry.vertices
    }

    /// Vertex normals, parallel to [`vertices`](Self::vertices).
    pub fn normals(&self) -> &[Vec3] {
        &self.geometry.normals
    }

    /// Number of triangles in the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the face is shown (and rebuilt).
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the face. Buffers are kept either way.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// `true` once geometry has been built, at whatever resolution.
    pub fn has_geometry(&self) -> bool {
        self.resolution >= MIN_RESOLUTION
            && self.geometry.vertices.len() == vertex_count(self.resolution)
    }

    /// `true` if the buffers are at the target resolution.
    pub fn is_current(&self) -> bool {
        self.has_geometry() && self.resolution == self.target_resolution
    }

    /// Set the resolution for the next rebuild.
    ///
    /// Returns `true` if the target changed. Existing buffers are untouched.
    pub fn set_resolution(&mut self, resolution: u32) -> bool {
        debug_assert!(resolution >= MIN_RESOLUTION, "resolution {resolution} too small");
        if self.target_resolution == resolution {
            return false;
        }
        self.target_resolution = resolution;
        true
    }

    /// Index buffer for the target resolution: the current one if it
    /// matches, otherwise a freshly generated one.
    pub fn target_indices(&self) -> Cow<'_, [u32]> {
        if self.resolution == self.target_resolution {
            Cow::Borrowed(&self.indices)
        } else {
            Cow::Owned(grid_triangle_indices(self.target_resolution))
        }
    }

    /// Rebuild vertices and normals in place against `shape`, regenerating
    /// the index buffer first if the target resolution changed.
    ///
    /// Returns the number of vertices evaluated.
    pub fn construct_mesh(&mut self, shape: &dyn ShapeEvaluator) -> usize {
        debug_assert!(
            self.target_resolution >= MIN_RESOLUTION,
            "construct_mesh before set_resolution"
        );
        if self.resolution != self.target_resolution {
            self.indices = grid_triangle_indices(self.target_resolution);
            self.resolution = self.target_resolution;
        }
        self.geometry
            .rebuild(self.direction, self.resolution, &self.indices, shape);
        self.geometry.vertices.len()
    }

    /// Install geometry built elsewhere by [`FaceGeometry::build`] at the
    /// target resolution.
    ///
    /// `indices` is the owned buffer from [`target_indices`](Self::target_indices),
    /// if one was generated; it is regenerated here otherwise when needed.
    pub fn apply_geometry(&mut self, geometry: FaceGeometry, indices: Option<Vec<u32>>) {
        debug_assert_eq!(geometry.vertices.len(), vertex_count(self.target_resolution));
        debug_assert_eq!(geometry.normals.len(), geometry.vertices.len());
        if let Some(indices) = indices {
            debug_assert_eq!(indices.len(), triangle_count(self.target_resolution) * 3);
            self.indices = indices;
        } else if self.resolution != self.target_resolution {
            self.indices = grid_triangle_indices(self.target_resolution);
        }
        self.resolution = self.target_resolution;
        self.geometry = geometry;
    }

    /// Borrow the current buffers for a [`MeshSink`](crate::MeshSink).
    pub fn payload(&self) -> FaceMeshPayload<'_> {
        FaceMeshPayload {
            direction: self.direction,
            vertices: &self.geometry.vertices,
            normals: &self.geometry.normals,
            indices: &self.indices,
        }
    }
}
