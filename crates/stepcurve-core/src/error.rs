//! Error types for enumerator construction.

use thiserror::Error;

/// A specialized Result type for enumerator operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building enumerators over external buffers.
///
/// Reading past the end of an enumerator is not represented here: that is a
/// contract violation and panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Two buffers that must run in lock-step have different lengths.
    #[error("Length mismatch: {left} items paired with {right} items")]
    LengthMismatch {
        /// Length of the first buffer.
        left: usize,
        /// Length of the second buffer.
        right: usize,
    },
}

impl CoreError {
    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }
}
