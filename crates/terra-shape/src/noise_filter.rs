//! Multi-octave noise filters sampled on the unit sphere.
//!
//! Both filters composite octaves of 3D simplex noise, where each successive
//! octave multiplies frequency by `roughness` and amplitude by `persistence`.
//! Sampling in 3D over sphere points keeps the field continuous across cube
//! face edges.

use glam::Vec3;
use noise::{NoiseFn, Simplex};

use crate::settings::{FilterKind, NoiseSettings};

/// A ready-to-sample noise filter built from [`NoiseSettings`].
pub struct NoiseFilter {
    noise: Simplex,
    settings: NoiseSettings,
}

impl NoiseFilter {
    /// Create a filter with the given settings.
    pub fn new(settings: NoiseSettings) -> Self {
        let noise = Simplex::new(settings.seed);
        Self { noise, settings }
    }

    /// Sample the filter at a point on the unit sphere.
    ///
    /// The result is never negative: values below `min_value` are cut to zero
    /// before `strength` is applied.
    pub fn evaluate(&self, point: Vec3) -> f32 {
        let raw = match self.settings.filter {
            FilterKind::Simple => self.simple(point),
            FilterKind::Ridged => self.ridged(point),
        };
        (raw - self.settings.min_value).max(0.0) * self.settings.strength
    }

    /// Upper bound of the value before `min_value` and `strength` are applied.
    ///
    /// Both filters produce per-octave values in `[0, 1]`, so the bound is the
    /// geometric sum of octave amplitudes.
    pub fn max_raw_value(&self) -> f32 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.settings.layer_count {
            sum += amp;
            amp *= self.settings.persistence;
        }
        sum
    }

    /// Return a reference to the current parameters.
    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    fn sample(&self, point: Vec3, frequency: f32) -> f32 {
        let p = point * frequency + self.settings.centre;
        self.noise.get([p.x as f64, p.y as f64, p.z as f64]) as f32
    }

    fn simple(&self, point: Vec3) -> f32 {
        let mut total = 0.0;
        let mut frequency = self.settings.base_roughness;
        let mut amplitude = 1.0;

        for _ in 0..self.settings.layer_count {
            let v = self.sample(point, frequency);
            total += (v + 1.0) * 0.5 * amplitude;

            frequency *= self.settings.roughness;
            amplitude *= self.settings.persistence;
        }

        total
    }

    fn ridged(&self, point: Vec3) -> f32 {
        let mut total = 0.0;
        let mut frequency = self.settings.base_roughness;
        let mut amplitude = 1.0;
        let mut weight = 1.0;

        for _ in 0..self.settings.layer_count {
            let ridge = 1.0 - self.sample(point, frequency).abs();
            let v = ridge * ridge * weight;
            weight = (v * self.settings.weight_multiplier).clamp(0.0, 1.0);
            total += v * amplitude;

            frequency *= self.settings.roughness;
            amplitude *= self.settings.persistence;
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_samples() -> impl Iterator<Item = Vec3> {
        (0..200).map(|i| {
            let t = i as f32 * 0.173;
            Vec3::new(t.sin() * (t * 0.7).cos(), t.cos(), (t * 1.3).sin()).normalize()
        })
    }

    #[test]
    fn test_determinism_same_seed_same_point() {
        let settings = NoiseSettings {
            seed: 42,
            layer_count: 4,
            ..Default::default()
        };
        let a = NoiseFilter::new(settings.clone());
        let b = NoiseFilter::new(settings);
        for p in sphere_samples() {
            assert_eq!(a.evaluate(p), b.evaluate(p));
        }
    }

    #[test]
    fn test_different_seeds_produce_different_values() {
        let a = NoiseFilter::new(NoiseSettings {
            seed: 1,
            ..Default::default()
        });
        let b = NoiseFilter::new(NoiseSettings {
            seed: 999,
            ..Default::default()
        });
        let differing = sphere_samples()
            .filter(|p| (a.evaluate(*p) - b.evaluate(*p)).abs() > 1e-6)
            .count();
        assert!(differing > 0, "Different seeds should change the field");
    }

    #[test]
    fn test_values_within_bounds() {
        for filter in [FilterKind::Simple, FilterKind::Ridged] {
            let f = NoiseFilter::new(NoiseSettings {
                filter,
                seed: 3,
                layer_count: 6,
                strength: 2.0,
                ..Default::default()
            });
            let bound = f.max_raw_value() * 2.0;
            for p in sphere_samples() {
                let v = f.evaluate(p);
                assert!(v >= 0.0, "{filter:?} produced negative value {v}");
                assert!(v <= bound + 1e-4, "{filter:?} value {v} exceeds {bound}");
            }
        }
    }

    #[test]
    fn test_min_value_above_range_flattens_field() {
        let f = NoiseFilter::new(NoiseSettings {
            layer_count: 3,
            min_value: 10.0,
            ..Default::default()
        });
        assert!(sphere_samples().all(|p| f.evaluate(p) == 0.0));
    }

    #[test]
    fn test_zero_layers_is_flat() {
        let f = NoiseFilter::new(NoiseSettings {
            layer_count: 0,
            ..Default::default()
        });
        assert_eq!(f.max_raw_value(), 0.0);
        assert!(sphere_samples().all(|p| f.evaluate(p) == 0.0));
    }
}
