//! Smooth vertex normals recomputed from final, displaced geometry.

use glam::Vec3;
use terra_cubesphere::triangle_normal;

/// Fill `out` with one unit normal per vertex, reusing its allocation.
///
/// Each triangle adds its unnormalised normal to its three corners, so larger
/// triangles weigh more. The sums are then normalised. A vertex whose sum
/// vanishes (unreferenced, or only touching degenerate triangles) falls back
/// to its radial direction.
pub fn fill_vertex_normals(vertices: &[Vec3], indices: &[u32], out: &mut Vec<Vec3>) {
    out.clear();
    out.resize(vertices.len(), Vec3::ZERO);

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let n = triangle_normal(vertices[a], vertices[b], vertices[c]);
        out[a] += n;
        out[b] += n;
        out[c] += n;
    }

    for (normal, vertex) in out.iter_mut().zip(vertices) {
        *normal = normal
            .try_normalize()
            .or_else(|| vertex.try_normalize())
            .unwrap_or(Vec3::Y);
    }
}
