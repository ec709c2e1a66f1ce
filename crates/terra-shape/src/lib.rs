//! Planet shape evaluation: the [`ShapeEvaluator`] seam plus a layered-noise
//! elevation model configured by [`ShapeSettings`].

mod error;
mod evaluator;
mod generator;
mod noise_filter;
mod settings;

pub use error::ShapeError;
pub use evaluator::{ConstantRadius, FnShape, ShapeEvaluator};
pub use generator::ShapeGenerator;
pub use noise_filter::NoiseFilter;
pub use settings::{FilterKind, NoiseLayer, NoiseSettings, ShapeSettings};
