//! Winding order checks for cubesphere triangles.
//!
//! Triangles are front-facing when their vertices run counter-clockwise seen
//! from outside the planet (right-handed cross product points outward).

use glam::Vec3;

/// Unnormalised triangle normal `(v1 - v0) × (v2 - v0)`.
///
/// Its length is twice the triangle's area, which makes it directly usable as
/// an area weight when accumulating vertex normals.
#[inline]
#[must_use]
pub fn triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0)
}

/// Check if a triangle has outward-facing winding order.
///
/// Returns `true` if the triangle's normal has a positive dot product with the
/// direction from the planet centre to the triangle's centroid. Vertices are
/// planet-relative positions.
#[must_use]
pub fn triangle_winds_outward(v0: Vec3, v1: Vec3, v2: Vec3) -> bool {
    let centroid = (v0 + v1 + v2) / 3.0;
    triangle_normal(v0, v1, v2).dot(centroid) > 0.0
}
