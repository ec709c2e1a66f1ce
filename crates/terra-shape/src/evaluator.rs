//! The shape evaluator seam: unit direction in, displaced surface point out.

use glam::Vec3;

/// Maps a unit-length direction to a point on the planet's surface.
///
/// Implementations must be pure: the same direction always yields the same
/// point, with no observable side effects. Faces sample their shared edges
/// independently, so any impurity shows up as cracks between faces. The
/// `Send + Sync` bound lets faces (and vertices within a face) be evaluated
/// on worker threads.
pub trait ShapeEvaluator: Send + Sync {
    /// Displace `unit_direction` onto the surface. The caller normalises the
    /// input; the result is `unit_direction * radius(unit_direction)`.
    fn point_on_shape(&self, unit_direction: Vec3) -> Vec3;
}

/// A perfect sphere: every direction is scaled by the same radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantRadius(pub f32);

impl ShapeEvaluator for ConstantRadius {
    #[inline]
    fn point_on_shape(&self, unit_direction: Vec3) -> Vec3 {
        unit_direction * self.0
    }
}

/// Adapts a plain closure into a [`ShapeEvaluator`].
pub struct FnShape<F>(pub F);

impl<F> ShapeEvaluator for FnShape<F>
where
    F: Fn(Vec3) -> Vec3 + Send + Sync,
{
    #[inline]
    fn point_on_shape(&self, unit_direction: Vec3) -> Vec3 {
        (self.0)(unit_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_radius_scales_direction() {
        let shape = ConstantRadius(3.5);
        let p = shape.point_on_shape(Vec3::Y);
        assert_eq!(p, Vec3::new(0.0, 3.5, 0.0));
    }

    #[test]
    fn test_fn_shape_delegates_to_closure() {
        let shape = FnShape(|d: Vec3| d * (2.0 + d.x));
        let p = shape.point_on_shape(Vec3::X);
        assert!((p - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_evaluators_are_usable_as_trait_objects() {
        let shapes: Vec<Box<dyn ShapeEvaluator>> =
            vec![Box::new(ConstantRadius(1.0)), Box::new(FnShape(|d: Vec3| d * 2.0))];
        let lengths: Vec<f32> = shapes
            .iter()
            .map(|s| s.point_on_shape(Vec3::Z).length())
            .collect();
        assert_eq!(lengths, vec![1.0, 2.0]);
    }
}
