//! Root-finding algorithms.
//!
//! The workhorse is [`Secant`], a derivative-free solver holding two running
//! points. It damps the classic secant iteration in two ways:
//!
//! - When the two most recent abscissae are [nearly equal](nearly_equal) the
//!   previous slope is kept instead of dividing by a vanishing difference.
//! - When the previous pair of function values bracketed a root, a flatter
//!   new slope is rejected in favour of the steeper previous one, so the next
//!   step cannot shoot far outside the bracket.
//!
//! # Convergence
//!
//! A solve stops when the last two abscissae are nearly equal *and* the last
//! function value is nearly zero, both under the same relative/absolute test:
//!
//! ```text
//! |a - b| <= max(absolute, relative * max(1, |a| + |b|))
//! ```
//!
//! Every solve is capped at [`SolverConfig::max_iterations`].
//!
//! # Example
//!
//! ```rust
//! use stepcurve_math::solvers::{secant, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let result = secant(&f, 1.0, 2.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-12);
//! ```

mod secant;

use serde::{Deserialize, Serialize};

pub use secant::{secant, Secant};

/// Default relative tolerance: eight machine epsilons.
pub const DEFAULT_RELATIVE: f64 = 8.0 * f64::EPSILON;

/// Default absolute tolerance: the smallest positive normal `f64`.
pub const DEFAULT_ABSOLUTE: f64 = f64::MIN_POSITIVE;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Returns `true` if `a` and `b` agree to within the given tolerances.
///
/// The test is `|a - b| <= max(absolute, relative * max(1, |a| + |b|))`, so
/// `relative` acts as an absolute tolerance for numbers smaller than one.
#[must_use]
pub fn nearly_equal(a: f64, b: f64, relative: f64, absolute: f64) -> bool {
    if a == b {
        return true;
    }

    let norm = (a.abs() + b.abs()).max(1.0);

    (a - b).abs() <= absolute.max(relative * norm)
}

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Relative tolerance.
    pub relative: f64,
    /// Absolute tolerance.
    pub absolute: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            relative: DEFAULT_RELATIVE,
            absolute: DEFAULT_ABSOLUTE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(relative: f64, absolute: f64, max_iterations: u32) -> Self {
        Self {
            relative,
            absolute,
            max_iterations,
        }
    }

    /// Sets the relative tolerance.
    #[must_use]
    pub fn with_relative(mut self, relative: f64) -> Self {
        self.relative = relative;
        self
    }

    /// Sets the absolute tolerance.
    #[must_use]
    pub fn with_absolute(mut self, absolute: f64) -> Self {
        self.absolute = absolute;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// [`nearly_equal`] under this configuration's tolerances.
    #[must_use]
    pub fn nearly_equal(&self, a: f64, b: f64) -> bool {
        nearly_equal(a, b, self.relative, self.absolute)
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
