//! Sequential bootstrap over a list of instruments.
//!
//! Instruments are sorted by maturity and each one adds a single flat
//! segment ending at its last cash flow, using every segment solved before it.

use std::time::{Duration, Instant};

use stepcurve_core::view::{paired, View};
use tracing::{info, warn};

use crate::bootstrap::step::next_segment;
use crate::config::BootstrapConfig;
use crate::curve::{Knots, PwFlat};
use crate::error::{CurveError, CurveResult};
use crate::repricing::RepricingReport;

/// A calibration instrument: cash flows borrowed from caller buffers and the
/// market price they must reprice to.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument<'a> {
    label: String,
    times: &'a [f64],
    amounts: &'a [f64],
    price: f64,
}

impl<'a> Instrument<'a> {
    /// Creates an instrument paying `amounts[i]` at `times[i]`.
    pub fn new(label: impl Into<String>, times: &'a [f64], amounts: &'a [f64], price: f64) -> Self {
        Self {
            label: label.into(),
            times,
            amounts,
            price,
        }
    }

    /// Returns the instrument label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the market price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the payment times.
    pub fn times(&self) -> &'a [f64] {
        self.times
    }

    /// Returns the payment amounts.
    pub fn amounts(&self) -> &'a [f64] {
        self.amounts
    }

    /// Returns the last payment time, `None` without cash flows.
    pub fn maturity(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Returns the `(time, amount)` cash flow enumerator.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Core`] if times and amounts differ in length.
    pub fn cash_flows(&self) -> CurveResult<Knots<'a>> {
        Ok(paired(self.times, self.amounts)?)
    }

    /// Checks that the instrument can be bootstrapped.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidInstrument`] for an empty or mismatched
    /// schedule, decreasing or non-finite times, non-finite amounts or a
    /// non-finite price.
    pub fn validate(&self) -> CurveResult<()> {
        if self.times.is_empty() {
            return Err(CurveError::invalid_instrument(format!("{} has no cash flows", self.label)));
        }
        if self.times.len() != self.amounts.len() {
            return Err(CurveError::invalid_instrument(format!(
                "{} has {} payment times but {} amounts",
                self.label,
                self.times.len(),
                self.amounts.len()
            )));
        }
        if !self.price.is_finite() {
            return Err(CurveError::invalid_instrument(format!(
                "{} has non-finite price {}",
                self.label, self.price
            )));
        }
        if self.times.iter().chain(self.amounts).any(|v| !v.is_finite()) {
            return Err(CurveError::invalid_instrument(format!(
                "{} has non-finite cash flows",
                self.label
            )));
        }
        if self.times.windows(2).any(|w| w[1] < w[0]) {
            return Err(CurveError::invalid_instrument(format!(
                "{} payment times are not sorted",
                self.label
            )));
        }

        Ok(())
    }
}

/// Knots produced by a bootstrap with their repricing audit.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapOutcome {
    /// Knot times, one per instrument, increasing.
    pub times: Vec<f64>,

    /// Flat forwards, one per knot.
    pub values: Vec<f64>,

    /// Repricing of every input instrument on the final curve.
    pub report: RepricingReport,

    /// Time taken to build the curve.
    pub build_duration: Duration,
}

impl BootstrapOutcome {
    /// Returns the bootstrapped curve, borrowing the knot vectors.
    pub fn curve(&self) -> PwFlat<Knots<'_>> {
        PwFlat::new(View::new(&self.times), View::new(&self.values))
    }

    /// Returns whether every instrument repriced within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

/// Sequential bootstrapper for piecewise-flat forward curves.
///
/// # Example
///
/// ```rust
/// use stepcurve_curves::{Bootstrapper, Instrument};
///
/// let t1 = [1.0];
/// let t2 = [1.0, 2.0];
/// let c1 = [1.0];
/// let c2 = [0.05, 1.05];
///
/// let outcome = Bootstrapper::new()
///     .add_instrument(Instrument::new("1Y zero", &t1, &c1, 0.96))
///     .add_instrument(Instrument::new("2Y bond", &t2, &c2, 0.99))
///     .bootstrap()
///     .unwrap();
///
/// assert_eq!(outcome.times, vec![1.0, 2.0]);
/// assert!(outcome.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bootstrapper<'a> {
    instruments: Vec<Instrument<'a>>,
    config: BootstrapConfig,
}

impl<'a> Bootstrapper<'a> {
    /// Creates an empty bootstrapper with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bootstrap configuration.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds an instrument to the bootstrap set.
    #[must_use]
    pub fn add_instrument(mut self, instrument: Instrument<'a>) -> Self {
        self.instruments.push(instrument);
        self
    }

    /// Adds multiple instruments to the bootstrap set.
    #[must_use]
    pub fn add_instruments(mut self, instruments: impl IntoIterator<Item = Instrument<'a>>) -> Self {
        self.instruments.extend(instruments);
        self
    }

    /// Returns the instruments in insertion order.
    pub fn instruments(&self) -> &[Instrument<'a>] {
        &self.instruments
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Bootstraps one segment per instrument, shortest maturity first.
    ///
    /// Stops at the first instrument that cannot be solved.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidInstrument`] if there are no instruments or one
    ///   fails [`Instrument::validate`]
    /// - [`CurveError::NoUnknownCashFlows`] if an instrument matures on or
    ///   before an earlier one
    /// - [`CurveError::BootstrapFailed`] if the solver fails, naming the
    ///   instrument and its maturity
    pub fn bootstrap(&self) -> CurveResult<BootstrapOutcome> {
        let start = Instant::now();

        if self.instruments.is_empty() {
            return Err(CurveError::invalid_instrument("No instruments provided for bootstrap"));
        }
        for instrument in &self.instruments {
            instrument.validate()?;
        }

        let mut ordered: Vec<&Instrument<'a>> = self.instruments.iter().collect();
        ordered.sort_by(|a, b| {
            let a = a.maturity().unwrap_or(f64::INFINITY);
            let b = b.maturity().unwrap_or(f64::INFINITY);
            a.total_cmp(&b)
        });

        let mut times: Vec<f64> = Vec::with_capacity(ordered.len());
        let mut values: Vec<f64> = Vec::with_capacity(ordered.len());

        for (index, instrument) in ordered.into_iter().enumerate() {
            let horizon = instrument.maturity().unwrap_or(f64::NAN);
            let curve = PwFlat::new(View::new(&times), View::new(&values));

            let segment = match next_segment(&curve, instrument.cash_flows()?, instrument.price(), &self.config) {
                Ok(segment) => segment,
                Err(e) => {
                    let e = e.for_instrument(instrument.label(), horizon);
                    warn!(
                        instrument = instrument.label(),
                        horizon,
                        segment = index,
                        error = %e,
                        "Bootstrap aborted"
                    );
                    return Err(e);
                }
            };

            info!(
                instrument = instrument.label(),
                horizon,
                segment = index,
                value = segment.value,
                iterations = segment.iterations,
                "Bootstrapped segment"
            );

            times.push(segment.time);
            values.push(segment.value);
        }

        let report = {
            let curve = PwFlat::new(View::new(&times), View::new(&values));
            RepricingReport::build(&self.instruments, &curve, self.config.repricing_tolerance)?
        };
        if !report.is_valid() {
            warn!(
                failed = report.failed_count(),
                max_error = report.max_error(),
                "Bootstrapped curve does not reprice its inputs"
            );
        }

        Ok(BootstrapOutcome {
            times,
            values,
            report,
            build_duration: start.elapsed(),
        })
    }
}
