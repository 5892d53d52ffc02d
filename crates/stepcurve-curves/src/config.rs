//! Bootstrap configuration.

use serde::{Deserialize, Serialize};
use stepcurve_math::solvers::SolverConfig;

/// Default starting forward when the curve has no knots yet.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.01;

/// Default offset between the two secant starting points.
pub const DEFAULT_PERTURBATION: f64 = 1e-4;

/// Default absolute residual tolerance of the bootstrap solve, in price units.
pub const DEFAULT_SOLVER_ABSOLUTE: f64 = 1e-14;

/// Default repricing tolerance, per unit of price once the price exceeds one.
pub const DEFAULT_REPRICING_TOLERANCE: f64 = 1e-10;

/// Configuration for the bootstrap.
///
/// Every field has a default, so a partial JSON object deserializes:
///
/// ```rust
/// use stepcurve_curves::BootstrapConfig;
///
/// let config: BootstrapConfig = serde_json::from_str(r#"{"initial_guess": 0.03}"#).unwrap();
/// assert_eq!(config.initial_guess, 0.03);
/// assert_eq!(config.solver.max_iterations, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Root finder tolerances and iteration cap.
    pub solver: SolverConfig,
    /// First secant point when there is no previous forward to start from.
    pub initial_guess: f64,
    /// Distance from the first secant point to the second.
    pub perturbation: f64,
    /// Largest repricing error reported as passing, scaled by `max(1, |price|)`.
    pub repricing_tolerance: f64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default().with_absolute(DEFAULT_SOLVER_ABSOLUTE),
            initial_guess: DEFAULT_INITIAL_GUESS,
            perturbation: DEFAULT_PERTURBATION,
            repricing_tolerance: DEFAULT_REPRICING_TOLERANCE,
        }
    }
}

impl BootstrapConfig {
    /// Sets the root finder configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the starting forward for an empty curve.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the secant perturbation.
    #[must_use]
    pub fn with_perturbation(mut self, perturbation: f64) -> Self {
        self.perturbation = perturbation;
        self
    }

    /// Sets the repricing tolerance.
    #[must_use]
    pub fn with_repricing_tolerance(mut self, tolerance: f64) -> Self {
        self.repricing_tolerance = tolerance;
        self
    }
}
