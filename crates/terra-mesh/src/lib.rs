//! Face meshing for cube-sphere planets: grid construction, triangulation,
//! vertex normals, and the outbound mesh sink interface.

pub mod colour;
pub mod face_mesh;
pub mod grid;
pub mod normals;
pub mod sink;

pub use colour::Colour;
pub use face_mesh::{FaceGeometry, FaceMesh};
pub use grid::{
    MAX_RESOLUTION, MIN_RESOLUTION, fill_face_vertices, grid_triangle_indices, triangle_count,
    vertex_count,
};
pub use normals::fill_vertex_normals;
pub use sink::{FaceMeshPayload, MeshSink, NullSink, RecordedFace, RecordingSink};
