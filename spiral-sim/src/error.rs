//! Error types for the spiral simulation.

use thiserror::Error;

/// Errors raised while building an activation engine.
///
/// Stepping a well-formed engine never fails; everything here is caught at
/// construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpiralError {
    /// Ring count of zero or a probability outside [0, 1]
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A caller-supplied state does not fit the ring topology
    #[error("Shape mismatch in ring {ring}: expected {expected} cells, got {actual}")]
    ShapeMismatch {
        ring: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type for spiral simulation operations
pub type SpiralResult<T> = Result<T, SpiralError>;

impl SpiralError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
