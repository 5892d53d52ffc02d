//! Error types for curve operations.
//!
//! Querying a curve past its last knot without an extrapolation value is not
//! an error here: such queries return NaN, and callers check for it.

use stepcurve_core::CoreError;
use stepcurve_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Knot times are not strictly increasing.
    #[error("Invalid knot ordering at index {index}: {prev:.6} >= {current:.6}")]
    InvalidKnotOrdering {
        /// Index of the offending knot.
        index: usize,
        /// Previous knot time.
        prev: f64,
        /// Offending knot time.
        current: f64,
    },

    /// A knot time or value is NaN or infinite.
    #[error("Invalid knot at index {index}: time {time}, value {value}")]
    InvalidKnot {
        /// Index of the offending knot.
        index: usize,
        /// Knot time.
        time: f64,
        /// Knot value.
        value: f64,
    },

    /// Curve queried past its last knot where a value is required.
    #[error("Extrapolation required at t={time:.6} but no extrapolation value is set")]
    Extrapolation {
        /// The query time.
        time: f64,
    },

    /// Every cash flow of the instrument falls on the existing curve.
    #[error("Instrument {instrument} has no cash flows after t={horizon:.6}")]
    NoUnknownCashFlows {
        /// Instrument label.
        instrument: String,
        /// Last knot time of the existing curve.
        horizon: f64,
    },

    /// The root finder failed while bootstrapping an instrument.
    #[error("Bootstrap failed for {instrument} maturing at t={horizon:.6}: {source}")]
    BootstrapFailed {
        /// Instrument label.
        instrument: String,
        /// Maturity of the failing segment.
        horizon: f64,
        /// Underlying solver failure.
        source: MathError,
    },

    /// Invalid calibration instrument.
    #[error("Invalid instrument: {reason}")]
    InvalidInstrument {
        /// Description of what's wrong with the instrument.
        reason: String,
    },

    /// Root finder failure outside of an instrument context.
    #[error(transparent)]
    Solver(#[from] MathError),

    /// Enumerator construction failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates an invalid knot ordering error.
    #[must_use]
    pub fn invalid_knot_ordering(index: usize, prev: f64, current: f64) -> Self {
        Self::InvalidKnotOrdering {
            index,
            prev,
            current,
        }
    }

    /// Creates a no-unknown-cash-flows error.
    #[must_use]
    pub fn no_unknown_cash_flows(instrument: impl Into<String>, horizon: f64) -> Self {
        Self::NoUnknownCashFlows {
            instrument: instrument.into(),
            horizon,
        }
    }

    /// Creates a bootstrap failure error.
    #[must_use]
    pub fn bootstrap_failed(instrument: impl Into<String>, horizon: f64, source: MathError) -> Self {
        Self::BootstrapFailed {
            instrument: instrument.into(),
            horizon,
            source,
        }
    }

    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }

    /// Attaches the instrument being bootstrapped to a failure.
    ///
    /// Solver failures become [`CurveError::BootstrapFailed`] at `horizon`;
    /// other errors keep their kind.
    #[must_use]
    pub fn for_instrument(self, instrument: &str, horizon: f64) -> Self {
        match self {
            Self::Solver(source) => Self::bootstrap_failed(instrument, horizon, source),
            Self::NoUnknownCashFlows { horizon, .. } => Self::no_unknown_cash_flows(instrument, horizon),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_knot_ordering() {
        let err = CurveError::invalid_knot_ordering(3, 2.0, 1.5);
        let msg = format!("{}", err);
        assert!(msg.contains("index 3"));
        assert!(msg.contains("ordering"));
    }

    #[test]
    fn test_bootstrap_failed_names_instrument() {
        let err = CurveError::bootstrap_failed("5Y bond", 5.0, MathError::non_convergence(100, 0.1, 1e-3));
        let msg = err.to_string();
        assert!(msg.contains("5Y bond"));
        assert!(msg.contains("5.000000"));
        assert!(msg.contains("100 iterations"));
    }

    #[test]
    fn test_from_math_error() {
        let err: CurveError = MathError::degenerate_slope(1.0, 1.0).into();
        assert!(matches!(err, CurveError::Solver(MathError::DegenerateSlope { .. })));
    }

    #[test]
    fn test_for_instrument() {
        let err = CurveError::from(MathError::non_convergence(100, 0.1, 1e-3)).for_instrument("10Y", 10.0);
        assert_eq!(
            err,
            CurveError::bootstrap_failed("10Y", 10.0, MathError::non_convergence(100, 0.1, 1e-3))
        );

        let err = CurveError::no_unknown_cash_flows("", 3.0).for_instrument("2Y", 2.0);
        assert_eq!(err, CurveError::no_unknown_cash_flows("2Y", 3.0));

        let err = CurveError::invalid_instrument("empty").for_instrument("1Y", 1.0);
        assert!(matches!(err, CurveError::InvalidInstrument { .. }));
    }

    #[test]
    fn test_from_core_error() {
        let err: CurveError = CoreError::length_mismatch(2, 3).into();
        assert!(err.to_string().contains("Length mismatch"));
    }
}
