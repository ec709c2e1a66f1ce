//! Configuration error types.

use terra_shape::ShapeError;

/// Errors that can occur when loading, saving, parsing or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// Resolution outside `[2, 256]`.
    #[error("resolution must be between 2 and 256, got {0}")]
    InvalidResolution(u32),

    /// Shape settings do not describe a usable surface.
    #[error("invalid shape settings: {0}")]
    InvalidShape(#[from] ShapeError),
}
