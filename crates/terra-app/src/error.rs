use terra_config::ConfigError;
use terra_planet::PlanetError;

/// Anything that stops the binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("planet generation failed: {0}")]
    Planet(#[from] PlanetError),

    #[error("failed to export mesh: {0}")]
    Export(#[source] std::io::Error),
}
