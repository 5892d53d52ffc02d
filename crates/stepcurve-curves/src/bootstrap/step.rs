//! Single-instrument bootstrap step.

use stepcurve_core::enumerator::back;
use stepcurve_core::Enumerator;
use stepcurve_math::solvers::secant;
use tracing::debug;

use crate::config::BootstrapConfig;
use crate::curve::PwFlat;
use crate::error::{CurveError, CurveResult};

/// A solved flat segment: the new knot `(time, value)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Knot time, the last cash flow of the instrument.
    pub time: f64,
    /// Flat forward on `(previous knot, time]`.
    pub value: f64,
    /// Secant iterations used.
    pub iterations: u32,
    /// Pricing error at `value`.
    pub residual: f64,
}

/// Solves for the flat forward that extends `curve` so that `flows` price to
/// `price`.
///
/// Flows at or before the curve's last knot are valued on the curve as
/// `(pv0, D0)`. The remaining flows are valued on a constant trial forward `x`
/// starting from the last knot, and the secant solver finds the root of
///
/// ```text
/// F(x) = pv0 + D0 * pv(x) - price
/// ```
///
/// starting from the last knot's value (or `config.initial_guess` on an empty
/// curve) and that value plus `config.perturbation`. The absolute residual
/// tolerance is scaled by `max(1, |price|)`.
///
/// Failures carry no instrument label; see [`CurveError::for_instrument`].
///
/// # Errors
///
/// - [`CurveError::InvalidInstrument`] if `price` is not finite
/// - [`CurveError::NoUnknownCashFlows`] if no flow falls after the last knot
/// - [`CurveError::Solver`] if the secant solve fails
///
/// # Example
///
/// ```rust
/// use stepcurve_curves::bootstrap::next_segment;
/// use stepcurve_curves::prelude::*;
///
/// let t = [1.0];
/// let c = [1.0];
/// let zero = paired(&t, &c).unwrap();
///
/// let segment = next_segment(&PwFlat::constant(f64::NAN), zero, (-0.05f64).exp(), &BootstrapConfig::default()).unwrap();
/// assert!((segment.value - 0.05).abs() < 1e-14);
/// assert_eq!(segment.time, 1.0);
/// ```
pub fn next_segment<K, C>(curve: &PwFlat<K>, flows: C, price: f64, config: &BootstrapConfig) -> CurveResult<Segment>
where
    K: Enumerator<Item = (f64, f64)> + Clone,
    C: Enumerator<Item = (f64, f64)> + Clone,
{
    if !price.is_finite() {
        return Err(CurveError::invalid_instrument(format!(
            "price must be finite, got {}",
            price
        )));
    }

    let last = back(curve.clone());
    let (start, guess) = if last.has_current() {
        last.current()
    } else {
        (0.0, config.initial_guess)
    };

    let is_unknown = |&(u, _): &(f64, f64)| u > start;
    let mut known = flows.until(&is_unknown);
    let (pv0, _) = curve.clone().present_valuate(&mut known, 0.0);
    let remaining = known.into_inner();

    if !remaining.has_current() {
        return Err(CurveError::no_unknown_cash_flows(String::new(), start));
    }
    let horizon = back(remaining.clone()).current().0;

    let d0 = curve.discount(start, 0.0);
    let objective = |x: f64| {
        let (pv, _) = PwFlat::constant(x).present_value(&remaining, start);
        pv0 + d0 * pv - price
    };

    let solver = config
        .solver
        .with_absolute(config.solver.absolute * price.abs().max(1.0));
    let result = secant(&objective, guess, guess + config.perturbation, &solver)?;

    debug!(
        start,
        horizon,
        value = result.root,
        iterations = result.iterations,
        "solved segment"
    );

    Ok(Segment {
        time: horizon,
        value: result.root,
        iterations: result.iterations,
        residual: result.residual,
    })
}
