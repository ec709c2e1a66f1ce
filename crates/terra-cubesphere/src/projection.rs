//! Cube-to-sphere projection by normalisation.
//!
//! A face coordinate is first placed on the surface of the `[-1, 1]` cube and
//! then pushed out (or in) to the unit sphere along its own direction.

use glam::Vec3;

use crate::FaceCoord;

/// Convert a [`FaceCoord`] to a point on the surface of the `[-1, 1]` cube.
///
/// The face center `(u=0.5, v=0.5)` maps to the face normal vector.
#[inline]
#[must_use]
pub fn face_coord_to_cube_point(fc: &FaceCoord) -> Vec3 {
    // Remap u, v from [0, 1] to [-1, 1]
    let s = 2.0 * fc.u - 1.0;
    let t = 2.0 * fc.v - 1.0;

    fc.direction.normal() + s * fc.direction.axis_a() + t * fc.direction.axis_b()
}

/// Project a [`FaceCoord`] onto the unit sphere.
///
/// Cube points are never zero (one component is always `±1`), so the
/// normalisation is total.
#[inline]
#[must_use]
pub fn face_coord_to_sphere(fc: &FaceCoord) -> Vec3 {
    face_coord_to_cube_point(fc).normalize()
}
