//! Planet controller error types.

/// Preconditions a generation request found unmet.
///
/// Nothing is built when one of these is returned; supply the missing
/// configuration and call again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlanetError {
    /// No shape settings or evaluator has been supplied.
    #[error("shape settings are missing")]
    MissingShapeSettings,

    /// No colour settings have been supplied.
    #[error("colour settings are missing")]
    MissingColourSettings,
}
