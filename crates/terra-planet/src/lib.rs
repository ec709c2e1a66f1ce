//! Planet-level orchestration: six cube-face meshes, the face render mask,
//! colour application, and minimal regeneration on configuration changes.

mod build;
mod colour_settings;
mod controller;
mod error;
mod mask;

pub use build::BuildMode;
pub use colour_settings::ColourSettings;
pub use controller::{DEFAULT_RESOLUTION, GenerationReport, PlanetController};
pub use error::PlanetError;
pub use mask::FaceRenderMask;
