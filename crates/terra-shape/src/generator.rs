//! Layered-noise planet shape.
//!
//! Stacks the configured [`NoiseFilter`]s into one elevation value per
//! direction and scales the base radius by it.

use glam::Vec3;

use crate::evaluator::ShapeEvaluator;
use crate::noise_filter::NoiseFilter;
use crate::settings::ShapeSettings;

struct Layer {
    enabled: bool,
    use_first_layer_as_mask: bool,
    filter: NoiseFilter,
}

/// A [`ShapeEvaluator`] built from [`ShapeSettings`].
///
/// Construction seeds every noise filter once; evaluation only reads them, so
/// one generator can be shared by all faces and threads of a generation pass.
pub struct ShapeGenerator {
    planet_radius: f32,
    layers: Vec<Layer>,
}

impl ShapeGenerator {
    /// Build the filters described by `settings`.
    pub fn new(settings: &ShapeSettings) -> Self {
        let layers = settings
            .noise_layers
            .iter()
            .map(|layer| Layer {
                enabled: layer.enabled,
                use_first_layer_as_mask: layer.use_first_layer_as_mask,
                filter: NoiseFilter::new(layer.noise.clone()),
            })
            .collect();
        Self {
            planet_radius: settings.planet_radius,
            layers,
        }
    }

    /// Base radius of the undisplaced sphere.
    pub fn planet_radius(&self) -> f32 {
        self.planet_radius
    }

    /// Relative elevation at a unit-sphere point, `0.0` at the base radius.
    ///
    /// The first layer, when enabled, also serves as the mask for every later
    /// layer that sets `use_first_layer_as_mask`.
    pub fn elevation(&self, unit_direction: Vec3) -> f32 {
        let Some((first, rest)) = self.layers.split_first() else {
            return 0.0;
        };

        let first_value = if first.enabled {
            first.filter.evaluate(unit_direction)
        } else {
            0.0
        };

        let mut elevation = first_value;
        for layer in rest.iter().filter(|l| l.enabled) {
            let mask = if layer.use_first_layer_as_mask {
                first_value
            } else {
                1.0
            };
            elevation += layer.filter.evaluate(unit_direction) * mask;
        }
        elevation
    }
}

impl ShapeEvaluator for ShapeGenerator {
    fn point_on_shape(&self, unit_direction: Vec3) -> Vec3 {
        unit_direction * self.planet_radius * (1.0 + self.elevation(unit_direction))
    }
}
