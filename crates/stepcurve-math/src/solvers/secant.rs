//! Damped secant root-finding algorithm.

use log::{debug, trace, warn};
use stepcurve_core::combinators::Counted;
use stepcurve_core::Enumerator;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Stateful secant solver over a borrowed objective.
///
/// Holds the two most recent points `(x0, y0)`, `(x1, y1)`, the current secant
/// slope and the slope before it. As an [`Enumerator`] it yields `(x1, y1)`
/// after every step and exhausts once converged or once a step fails; the
/// failure is then available from [`Secant::error`].
///
/// The objective is borrowed for the solver's lifetime and called once per
/// step.
///
/// # Example
///
/// ```rust
/// use stepcurve_core::Enumerator;
/// use stepcurve_math::solvers::{Secant, SolverConfig};
///
/// let f = |x: f64| x.cos();
/// let mut s = Secant::new(&f, 1.5, 2.0, &SolverConfig::default()).unwrap();
///
/// let result = s.solve().unwrap();
/// assert!((result.root - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!(!s.has_current());
/// ```
pub struct Secant<'f, F> {
    f: &'f F,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    slope: f64,
    previous_slope: f64,
    config: SolverConfig,
    error: Option<MathError>,
}

impl<'f, F> Secant<'f, F>
where
    F: Fn(f64) -> f64,
{
    /// Starts a solve from the initial guesses `x0` and `x1`.
    ///
    /// Evaluates the objective at both guesses.
    ///
    /// # Errors
    ///
    /// - [`MathError::DegenerateSlope`] if the guesses are nearly equal
    /// - [`MathError::NonFinite`] if the objective is not finite at either guess
    pub fn new(f: &'f F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<Self> {
        if !x0.is_finite() || !x1.is_finite() {
            return Err(MathError::invalid_input(format!(
                "initial guesses must be finite: {} and {}",
                x0, x1
            )));
        }
        if config.nearly_equal(x0, x1) {
            return Err(MathError::degenerate_slope(x0, x1));
        }

        let y0 = f(x0);
        if !y0.is_finite() {
            return Err(MathError::NonFinite { x: x0 });
        }
        let y1 = f(x1);
        if !y1.is_finite() {
            return Err(MathError::NonFinite { x: x1 });
        }

        Ok(Self {
            f,
            x0,
            y0,
            x1,
            y1,
            slope: (y1 - y0) / (x1 - x0),
            previous_slope: 0.0,
            config: *config,
            error: None,
        })
    }

    /// Returns the most recent point `(x1, y1)`.
    pub fn point(&self) -> (f64, f64) {
        (self.x1, self.y1)
    }

    /// Returns the current secant slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the failure that stopped iteration, if any.
    pub fn error(&self) -> Option<&MathError> {
        self.error.as_ref()
    }

    /// Returns `true` once the last two abscissae are nearly equal and the
    /// last function value is nearly zero.
    pub fn is_converged(&self) -> bool {
        self.config.nearly_equal(self.x0, self.x1) && self.config.nearly_equal(self.y1, 0.0)
    }

    /// Performs one damped secant step and returns the new point.
    ///
    /// # Errors
    ///
    /// - [`MathError::DegenerateSlope`] if the slope is zero or not finite
    /// - [`MathError::NonFinite`] if the objective is not finite at the new point
    pub fn step(&mut self) -> MathResult<(f64, f64)> {
        let bracketed = self.y0 * self.y1 < 0.0;

        let x = if self.y1 == 0.0 {
            self.x1
        } else {
            if self.slope == 0.0 || !self.slope.is_finite() {
                return Err(MathError::degenerate_slope(self.x0, self.x1));
            }
            self.x1 - self.y1 / self.slope
        };
        let y = (self.f)(x);
        if !y.is_finite() {
            return Err(MathError::NonFinite { x });
        }

        self.x0 = self.x1;
        self.y0 = self.y1;
        self.x1 = x;
        self.y1 = y;
        self.previous_slope = self.slope;

        if !self.config.nearly_equal(self.x0, self.x1) {
            self.slope = (self.y1 - self.y0) / (self.x1 - self.x0);
        }

        // don't zoom off
        if bracketed && self.slope.abs() < self.previous_slope.abs() {
            self.slope = self.previous_slope;
        }

        trace!("secant step: x = {:e}, y = {:e}, slope = {:e}", x, y, self.slope);

        Ok((x, y))
    }

    /// Iterates until convergence or until the iteration cap is reached.
    ///
    /// # Errors
    ///
    /// - [`MathError::NonConvergence`] if `max_iterations` steps do not converge
    /// - any error raised by [`Secant::step`]
    pub fn solve(&mut self) -> MathResult<SolverResult> {
        let max_iterations = self.config.max_iterations as usize;

        let mut steps = Counted::new(&mut *self);
        while steps.has_current() && steps.count() < max_iterations {
            steps.advance();
        }
        let iterations = steps.count() as u32;

        if let Some(err) = &self.error {
            warn!("secant solve stopped after {} iterations: {}", iterations, err);
            return Err(err.clone());
        }
        if !self.is_converged() {
            warn!(
                "secant solve did not converge in {} iterations (x = {}, residual = {:e})",
                iterations, self.x1, self.y1
            );
            return Err(MathError::non_convergence(iterations, self.x1, self.y1));
        }

        debug!(
            "secant converged in {} iterations: root = {}, residual = {:e}",
            iterations, self.x1, self.y1
        );

        Ok(SolverResult {
            root: self.x1,
            iterations,
            residual: self.y1,
        })
    }
}

impl<F> Enumerator for Secant<'_, F>
where
    F: Fn(f64) -> f64,
{
    type Item = (f64, f64);

    fn has_current(&self) -> bool {
        self.error.is_none() && !self.is_converged()
    }

    fn current(&self) -> (f64, f64) {
        self.point()
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            if let Err(err) = self.step() {
                self.error = Some(err);
            }
        }
        self
    }
}

impl<F> Clone for Secant<'_, F> {
    fn clone(&self) -> Self {
        Self {
            f: self.f,
            x0: self.x0,
            y0: self.y0,
            x1: self.x1,
            y1: self.y1,
            slope: self.slope,
            previous_slope: self.previous_slope,
            config: self.config,
            error: self.error.clone(),
        }
    }
}

/// Callables compare by address; values of a zero-sized callable type carry
/// no state, so sharing an address means sharing behaviour.
impl<F> PartialEq for Secant<'_, F> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.f, other.f)
            && self.x0 == other.x0
            && self.y0 == other.y0
            && self.x1 == other.x1
            && self.y1 == other.y1
            && self.slope == other.slope
            && self.previous_slope == other.previous_slope
            && self.config == other.config
    }
}

impl<F> std::fmt::Debug for Secant<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secant")
            .field("x0", &self.x0)
            .field("y0", &self.y0)
            .field("x1", &self.x1)
            .field("y1", &self.y1)
            .field("slope", &self.slope)
            .field("previous_slope", &self.previous_slope)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Finds a root of `f` starting from the guesses `x0` and `x1`.
///
/// Convenience wrapper around [`Secant::new`] followed by [`Secant::solve`].
///
/// # Example
///
/// ```rust
/// use stepcurve_math::solvers::{secant, SolverConfig};
///
/// // Find root of x^3 - 27
/// let f = |x: f64| x * x * x - 27.0;
///
/// let result = secant(&f, 2.0, 4.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 3.0).abs() < 1e-12);
/// ```
pub fn secant<F>(f: &F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    Secant::new(f, x0, x1, config)?.solve()
}
