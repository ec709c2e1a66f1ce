//! Outbound interface to the host renderer.
//!
//! The mesh core never touches presentation state. It hands finished face
//! buffers, visibility flags and the material colour to a [`MeshSink`] and
//! lets the host decide what uploading or drawing means.

use glam::Vec3;
use terra_cubesphere::Direction;

use crate::colour::Colour;

/// Finished buffers of one face, borrowed from its [`FaceMesh`](crate::FaceMesh).
#[derive(Clone, Copy, Debug)]
pub struct FaceMeshPayload<'a> {
    /// Which face these buffers belong to.
    pub direction: Direction,
    /// `resolution²` surface points, row-major.
    pub vertices: &'a [Vec3],
    /// Unit normals, parallel to `vertices`.
    pub normals: &'a [Vec3],
    /// Triangle list, three indices per triangle.
    pub indices: &'a [u32],
}

impl FaceMeshPayload<'_> {
    /// Number of triangles in the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex positions as a byte slice for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Vertex normals as a byte slice for GPU upload.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.normals)
    }

    /// Indices as a byte slice for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.indices)
    }
}

/// Receives mesh buffers and material state for the six faces.
pub trait MeshSink {
    /// A face finished rebuilding; its buffers are complete and consistent.
    fn publish(&mut self, payload: FaceMeshPayload<'_>);

    /// Show or hide a face. Hidden faces keep whatever was last published.
    fn set_visible(&mut self, direction: Direction, visible: bool);

    /// Set the material colour of a face.
    fn set_colour(&mut self, direction: Direction, colour: Colour);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl MeshSink for NullSink {
    fn publish(&mut self, _payload: FaceMeshPayload<'_>) {}
    fn set_visible(&mut self, _direction: Direction, _visible: bool) {}
    fn set_colour(&mut self, _direction: Direction, _colour: Colour) {}
}

/// Per-face state last seen by a [`RecordingSink`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedFace {
    /// How many times this face was published.
    pub publish_count: usize,
    /// Vertex count of the last publish.
    pub vertex_count: usize,
    /// Triangle count of the last publish.
    pub triangle_count: usize,
    /// Last visibility flag received.
    pub visible: bool,
    /// Last colour received.
    pub colour: Option<Colour>,
}

/// Keeps a summary of every call, indexed by [`Direction::index`].
///
/// Useful for tests and for logging what a generation pass produced.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Per-face summaries.
    pub faces: [RecordedFace; 6],
    /// Publish order across all faces.
    pub published: Vec<Direction>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary for one face.
    pub fn face(&self, direction: Direction) -> &RecordedFace {
        &self.faces[direction.index()]
    }

    /// Faces whose last visibility flag was `true`.
    pub fn visible_faces(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.faces[d.index()].visible)
            .collect()
    }

    /// Total vertices across the last publish of every face.
    pub fn total_vertices(&self) -> usize {
        self.faces.iter().map(|f| f.vertex_count).sum()
    }

    /// Total triangles across the last publish of every face.
    pub fn total_triangles(&self) -> usize {
        self.faces.iter().map(|f| f.triangle_count).sum()
    }
}

impl MeshSink for RecordingSink {
    fn publish(&mut self, payload: FaceMeshPayload<'_>) {
        let face = &mut self.faces[payload.direction.index()];
        face.publish_count += 1;
        face.vertex_count = payload.vertices.len();
        face.triangle_count = payload.triangle_count();
        self.published.push(payload.direction);
    }

    fn set_visible(&mut self, direction: Direction, visible: bool) {
        self.faces[direction.index()].visible = visible;
    }

    fn set_colour(&mut self, direction: Direction, colour: Colour) {
        self.faces[direction.index()].colour = Some(colour);
    }
}
