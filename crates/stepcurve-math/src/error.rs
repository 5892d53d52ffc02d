//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root finder exhausted its iteration budget.
    #[error("No convergence after {iterations} iterations (x: {x}, residual: {residual:.2e})")]
    NonConvergence {
        /// Number of iterations attempted.
        iterations: u32,
        /// Last iterate.
        x: f64,
        /// Function value at the last iterate.
        residual: f64,
    },

    /// The two points defining a secant are too close to divide by,
    /// or the secant through them is flat.
    #[error("Degenerate secant slope between x0 = {x0} and x1 = {x1}")]
    DegenerateSlope {
        /// First point.
        x0: f64,
        /// Second point.
        x1: f64,
    },

    /// The objective returned NaN or an infinity.
    #[error("Objective is not finite at x = {x}")]
    NonFinite {
        /// Where the objective was evaluated.
        x: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(iterations: u32, x: f64, residual: f64) -> Self {
        Self::NonConvergence {
            iterations,
            x,
            residual,
        }
    }

    /// Creates a degenerate slope error.
    #[must_use]
    pub fn degenerate_slope(x0: f64, x1: f64) -> Self {
        Self::DegenerateSlope { x0, x1 }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
