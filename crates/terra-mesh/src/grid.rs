//! Face grid construction: displaced vertex positions and the triangle index buffer.
//!
//! A face with resolution `N` is an `N × N` lattice stored row-major, so grid
//! sample `(x, y)` lives at `y * N + x`. Both the vertex builder and the index
//! builder rely on that ordering.

use glam::Vec3;
use terra_cubesphere::{Direction, FaceCoord, face_coord_to_sphere};
use terra_shape::ShapeEvaluator;

/// Smallest supported resolution: one quad per face.
pub const MIN_RESOLUTION: u32 = 2;
/// Largest supported resolution.
pub const MAX_RESOLUTION: u32 = 256;

/// Vertices on one face at `resolution`.
#[inline]
#[must_use]
pub fn vertex_count(resolution: u32) -> usize {
    (resolution as usize) * (resolution as usize)
}

/// Triangles on one face at `resolution`.
#[inline]
#[must_use]
pub fn triangle_count(resolution: u32) -> usize {
    let cells = resolution.saturating_sub(1) as usize;
    cells * cells * 2
}

/// Generate the index buffer for a face grid.
///
/// Each cell `(x, y)` with `i = y * N + x` emits `{i, i+N+1, i+N}` and
/// `{i, i+1, i+N+1}`, which wind counter-clockwise seen from outside the
/// planet. The result depends on nothing but `resolution`.
#[must_use]
pub fn grid_triangle_indices(resolution: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(triangle_count(resolution) * 3);

    for y in 0..resolution.saturating_sub(1) {
        for x in 0..resolution - 1 {
            let i = y * resolution + x;

            indices.extend_from_slice(&[i, i + resolution + 1, i + resolution]);
            indices.extend_from_slice(&[i, i + 1, i + resolution + 1]);
        }
    }

    indices
}

/// Fill `out` with the displaced vertices of one face, reusing its allocation.
///
/// For every grid sample the coordinate pipeline is:
///
/// 1. Grid `(x, y)` to face coordinate `(x, y) / (N - 1)`
/// 2. Face coordinate to unit cube point via the face's tangent axes
/// 3. Cube point to unit sphere via normalisation
/// 4. Unit sphere point to surface point via the [`ShapeEvaluator`]
pub fn fill_face_vertices(
    direction: Direction,
    resolution: u32,
    shape: &dyn ShapeEvaluator,
    out: &mut Vec<Vec3>,
) {
    out.clear();
    out.reserve(vertex_count(resolution));

    for y in 0..resolution {
        for x in 0..resolution {
            let fc = FaceCoord::from_grid(direction, x, y, resolution);
            let on_unit_sphere = face_coord_to_sphere(&fc);
            out.push(shape.point_on_shape(on_unit_sphere));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_cubesphere::triangle_winds_outward;
    use terra_shape::ConstantRadius;

    #[test]
    fn test_minimal_grid_is_one_quad() {
        assert_eq!(grid_triangle_indices(2), vec![0, 3, 2, 0, 1, 3]);
        assert_eq!(triangle_count(2), 2);
        assert_eq!(vertex_count(2), 4);
    }

    #[test]
    fn test_index_counts_and_bounds_across_resolutions() {
        for res in [2, 3, 4, 7, 10, 33, 100, 255, MAX_RESOLUTION] {
            let indices = grid_triangle_indices(res);
            assert_eq!(indices.len(), (res as usize - 1).pow(2) * 6, "res {res}");
            assert_eq!(indices.len(), triangle_count(res) * 3);
            let limit = vertex_count(res) as u32;
            assert!(indices.iter().all(|&i| i < limit), "index out of range at res {res}");
        }
    }

    #[test]
    fn test_every_vertex_is_referenced() {
        let res = 6;
        let indices = grid_triangle_indices(res);
        let mut seen = vec![false; vertex_count(res)];
        for &i in &indices {
            seen[i as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_vertices_are_row_major() {
        let res = 4;
        let mut verts = Vec::new();
        fill_face_vertices(Direction::PosY, res, &ConstantRadius(1.0), &mut verts);
        assert_eq!(verts.len(), 16);

        // Walking x moves along axis_a, walking y moves along axis_b.
        let a = Direction::PosY.axis_a();
        let b = Direction::PosY.axis_b();
        for y in 0..res as usize {
            for x in 0..res as usize - 1 {
                let i = y * res as usize + x;
                assert!((verts[i + 1] - verts[i]).dot(a) > 0.0);
            }
        }
        for x in 0..res as usize {
            let top = verts[x];
            let next_row = verts[res as usize + x];
            assert!((next_row - top).dot(b) > 0.0);
        }
    }

    #[test]
    fn test_grid_triangles_wind_outward_on_every_face() {
        let res = 5;
        let indices = grid_triangle_indices(res);
        let mut verts = Vec::new();
        for dir in Direction::ALL {
            fill_face_vertices(dir, res, &ConstantRadius(1.0), &mut verts);
            for tri in indices.chunks_exact(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| verts[i as usize]);
                assert!(triangle_winds_outward(a, b, c), "inward triangle on {dir:?}");
            }
        }
    }

    #[test]
    fn test_fill_reuses_buffer() {
        let mut verts = Vec::new();
        fill_face_vertices(Direction::NegX, 8, &ConstantRadius(1.0), &mut verts);
        let capacity = verts.capacity();
        fill_face_vertices(Direction::NegX, 8, &ConstantRadius(2.0), &mut verts);
        assert_eq!(verts.len(), 64);
        assert_eq!(verts.capacity(), capacity);
    }
}
