//! Repricing validation for the bootstrap.
//!
//! After a bootstrap every input instrument is priced again against the final
//! curve. A curve that cannot reprice its inputs within tolerance is wrong,
//! so the report travels with the knots in
//! [`BootstrapOutcome`](crate::bootstrap::BootstrapOutcome).

use std::fmt;

use stepcurve_core::Enumerator;

use crate::bootstrap::Instrument;
use crate::curve::PwFlat;
use crate::error::CurveResult;

/// Result of repricing a single instrument against the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricingCheck {
    /// Instrument label.
    pub instrument_id: String,

    /// The market price the curve was fitted to.
    pub target_pv: f64,

    /// Present value implied by the curve.
    pub model_pv: f64,

    /// Absolute error |model_pv - target_pv|
    pub error: f64,

    /// Largest error counted as a pass.
    pub tolerance: f64,

    /// Whether this instrument passed validation.
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a new repricing check result.
    #[must_use]
    pub fn new(instrument_id: impl Into<String>, target_pv: f64, model_pv: f64, tolerance: f64) -> Self {
        let error = (model_pv - target_pv).abs();
        // NaN errors never pass
        let passed = error <= tolerance;

        Self {
            instrument_id: instrument_id.into(),
            target_pv,
            model_pv,
            error,
            tolerance,
            passed,
        }
    }

    /// Prices `instrument` on `curve` and compares with its market price.
    ///
    /// `tolerance` is per unit of price: the check passes within
    /// `tolerance * max(1, |price|)`, the same scaling the bootstrap solve
    /// applies to its residual.
    pub fn from_instrument<K>(instrument: &Instrument<'_>, curve: &PwFlat<K>, tolerance: f64) -> CurveResult<Self>
    where
        K: Enumerator<Item = (f64, f64)> + Clone,
    {
        let (model_pv, _) = curve.present_value(&instrument.cash_flows()?, 0.0);

        let price = instrument.price();
        let tolerance = tolerance * price.abs().max(1.0);

        Ok(Self::new(instrument.label(), price, model_pv, tolerance))
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "✓" } else { "✗" };
        write!(
            f,
            "{} {} | PV: {:.6} | Error: {:.2e} (tol: {:.2e})",
            status, self.instrument_id, self.model_pv, self.error, self.tolerance
        )
    }
}

/// Repricing report for every instrument of a bootstrap.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
    max_error: f64,
    rms_error: f64,
    passed_count: usize,
}

impl RepricingReport {
    /// Creates a new repricing report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        let max_error = checks.iter().map(|c| c.error).fold(0.0_f64, f64::max);

        let rms_error = if checks.is_empty() {
            0.0
        } else {
            let sum_sq: f64 = checks.iter().map(|c| c.error * c.error).sum();
            (sum_sq / checks.len() as f64).sqrt()
        };

        let passed_count = checks.iter().filter(|c| c.passed).count();

        Self {
            checks,
            max_error,
            rms_error,
            passed_count,
        }
    }

    /// Reprices every instrument on `curve`.
    pub fn build<K>(instruments: &[Instrument<'_>], curve: &PwFlat<K>, tolerance: f64) -> CurveResult<Self>
    where
        K: Enumerator<Item = (f64, f64)> + Clone,
    {
        let checks = instruments
            .iter()
            .map(|instrument| RepricingCheck::from_instrument(instrument, curve, tolerance))
            .collect::<CurveResult<Vec<_>>>()?;

        Ok(Self::new(checks))
    }

    /// Returns whether all instruments passed repricing validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.passed_count == self.checks.len()
    }

    /// Returns the individual repricing checks.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Returns the maximum absolute error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Returns the RMS error.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        self.rms_error
    }

    /// Returns the number of instruments that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.passed_count
    }

    /// Returns the number of instruments that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.len() - self.passed_count
    }

    /// Returns the labels of the instruments that failed.
    #[must_use]
    pub fn failed_instruments(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.instrument_id.as_str())
            .collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repricing Report")?;
        writeln!(f, "================")?;
        writeln!(f, "Status: {}", if self.is_valid() { "PASSED" } else { "FAILED" })?;
        writeln!(f, "Instruments: {}/{} passed", self.passed_count, self.checks.len())?;
        writeln!(f, "Max Error: {:.2e}", self.max_error)?;
        writeln!(f, "RMS Error: {:.2e}", self.rms_error)?;

        if !self.checks.is_empty() {
            writeln!(f)?;
            writeln!(f, "Details:")?;
            for check in &self.checks {
                writeln!(f, "  {check}")?;
            }
        }

        Ok(())
    }
}
