//! 2D local coordinates on a cube face.

use crate::Direction;

/// A 2D coordinate on a cube face. `u` and `v` are in the range \[0, 1\].
///
/// `u` runs along [`Direction::axis_a`] and `v` along [`Direction::axis_b`].
/// `(0.5, 0.5)` is the face centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCoord {
    /// Which cube face this coordinate lies on.
    pub direction: Direction,
    /// Parameter along `axis_a` in \[0, 1\].
    pub u: f32,
    /// Parameter along `axis_b` in \[0, 1\].
    pub v: f32,
}

impl FaceCoord {
    /// Construct a `FaceCoord`, clamping `u` and `v` to \[0, 1\].
    #[must_use]
    pub fn new(direction: Direction, u: f32, v: f32) -> Self {
        Self {
            direction,
            u: u.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// The coordinate of grid sample `(x, y)` on a face with `resolution`
    /// samples per edge: `(x, y) / (resolution - 1)`.
    ///
    /// `resolution` must be at least 2 and `x`, `y` below `resolution`.
    #[inline]
    #[must_use]
    pub fn from_grid(direction: Direction, x: u32, y: u32, resolution: u32) -> Self {
        debug_assert!(resolution >= 2, "resolution must be >= 2, got {resolution}");
        debug_assert!(x < resolution && y < resolution, "({x}, {y}) outside grid");
        let step = (resolution - 1) as f32;
        Self {
            direction,
            u: x as f32 / step,
            v: y as f32 / step,
        }
    }
}
