//! Shape settings error types.

/// Errors found when validating [`ShapeSettings`](crate::ShapeSettings).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// The base radius is zero, negative, or not finite.
    #[error("planet radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    /// A noise layer carries a NaN or infinite parameter.
    #[error("noise layer {index} has a non-finite parameter")]
    NonFiniteLayer {
        /// Position of the offending layer in the stack.
        index: usize,
    },
}
