//! Serializable shape configuration: base radius plus stacked noise layers.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Which noise filter a layer runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Rolling fBm: octaves of `(n + 1) / 2` summed together.
    #[default]
    Simple,
    /// Sharp ridges: octaves of `(1 - |n|)²`, each weighted by the previous one.
    Ridged,
}

/// Parameters of one noise filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Filter variant.
    pub filter: FilterKind,
    /// Seed for the underlying simplex noise.
    pub seed: u32,
    /// Final multiplier on the filtered value.
    pub strength: f32,
    /// Number of octaves summed.
    pub layer_count: u32,
    /// Frequency of the first octave.
    pub base_roughness: f32,
    /// Frequency multiplier between octaves.
    pub roughness: f32,
    /// Amplitude multiplier between octaves.
    pub persistence: f32,
    /// Offset added to the sample point, to move features around the sphere.
    pub centre: Vec3,
    /// Values below this floor become zero (sea level for the layer).
    pub min_value: f32,
    /// Ridged only: how strongly each octave's value weights the next.
    pub weight_multiplier: f32,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            filter: FilterKind::Simple,
            seed: 0,
            strength: 1.0,
            layer_count: 1,
            base_roughness: 1.0,
            roughness: 2.0,
            persistence: 0.5,
            centre: Vec3::ZERO,
            min_value: 0.0,
            weight_multiplier: 0.8,
        }
    }
}

/// One entry in the layer stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseLayer {
    /// Disabled layers contribute nothing.
    pub enabled: bool,
    /// Multiply this layer by the first layer's value, so detail only grows on
    /// land raised by the first layer.
    pub use_first_layer_as_mask: bool,
    /// Filter parameters.
    pub noise: NoiseSettings,
}

impl Default for NoiseLayer {
    fn default() -> Self {
        Self {
            enabled: true,
            use_first_layer_as_mask: false,
            noise: NoiseSettings::default(),
        }
    }
}

/// Everything needed to build a [`ShapeGenerator`](crate::ShapeGenerator).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    /// Radius of the undisplaced sphere.
    pub planet_radius: f32,
    /// Elevation layers, evaluated in order. The first one may mask the rest.
    pub noise_layers: Vec<NoiseLayer>,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            planet_radius: 1.0,
            noise_layers: Vec::new(),
        }
    }
}

impl ShapeSettings {
    /// A bare sphere of the given radius.
    pub fn sphere(planet_radius: f32) -> Self {
        Self {
            planet_radius,
            noise_layers: Vec::new(),
        }
    }

    /// Continents from a simple layer, with ridged mountains masked to land.
    pub fn continents(planet_radius: f32, seed: u32) -> Self {
        Self {
            planet_radius,
            noise_layers: vec![
                NoiseLayer {
                    enabled: true,
                    use_first_layer_as_mask: false,
                    noise: NoiseSettings {
                        seed,
                        strength: 0.12,
                        layer_count: 5,
                        base_roughness: 1.1,
                        roughness: 2.2,
                        persistence: 0.5,
                        min_value: 0.95,
                        ..Default::default()
                    },
                },
                NoiseLayer {
                    enabled: true,
                    use_first_layer_as_mask: true,
                    noise: NoiseSettings {
                        filter: FilterKind::Ridged,
                        seed: seed.wrapping_add(1),
                        strength: 1.5,
                        layer_count: 5,
                        base_roughness: 1.6,
                        roughness: 2.4,
                        persistence: 0.5,
                        min_value: 0.4,
                        weight_multiplier: 0.8,
                        ..Default::default()
                    },
                },
            ],
        }
    }

    /// Reject settings that would not describe a closed surface.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !(self.planet_radius > 0.0 && self.planet_radius.is_finite()) {
            return Err(ShapeError::InvalidRadius(self.planet_radius));
        }
        for (index, layer) in self.noise_layers.iter().enumerate() {
            let n = &layer.noise;
            let finite = [
                n.strength,
                n.base_roughness,
                n.roughness,
                n.persistence,
                n.min_value,
                n.weight_multiplier,
            ]
            .iter()
            .all(|v| v.is_finite())
                && n.centre.is_finite();
            if !finite {
                return Err(ShapeError::NonFiniteLayer { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_has_no_layers() {
        let s = ShapeSettings::sphere(4.0);
        assert_eq!(s.planet_radius, 4.0);
        assert!(s.noise_layers.is_empty());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_continents_masks_second_layer() {
        let s = ShapeSettings::continents(1.0, 7);
        assert_eq!(s.noise_layers.len(), 2);
        assert!(!s.noise_layers[0].use_first_layer_as_mask);
        assert!(s.noise_layers[1].use_first_layer_as_mask);
        assert_eq!(s.noise_layers[1].noise.filter, FilterKind::Ridged);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        assert!(matches!(
            ShapeSettings::sphere(0.0).validate(),
            Err(ShapeError::InvalidRadius(_))
        ));
        assert!(ShapeSettings::sphere(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_non_finite_layer_reports_index() {
        let mut s = ShapeSettings::continents(1.0, 0);
        s.noise_layers[1].noise.roughness = f32::INFINITY;
        assert!(matches!(
            s.validate(),
            Err(ShapeError::NonFiniteLayer { index: 1 })
        ));
    }
}
