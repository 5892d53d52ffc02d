//! Piecewise-flat forward curves.
//!
//! A curve is a stream of `(time, value)` knots read as a right-continuous
//! step function:
//!
//! ```text
//! f(t) = x[i]   for t[i-1] < t <= t[i]
//! ```
//!
//! so a knot's value applies backward from its time, and the boundary
//! `t == t[i]` belongs to knot `i`. Past the last knot the curve takes its
//! extrapolation value, which is NaN unless set.
//!
//! Every query comes in two forms:
//!
//! - **advancing** (`valuate`, `integrate`, `present_valuate`): consumes the
//!   knots it walks past, so successive calls over increasing times stream
//!   the curve once
//! - **probing** (`value`, `integral`, `present_value`, `discount`, `spot`):
//!   runs the advancing form on a clone of the cursor and leaves the curve
//!   unchanged
//!
//! The free functions work on any knot enumerator; [`PwFlat`] bundles a knot
//! enumerator with its extrapolation value.

use stepcurve_core::combinators::Pair;
use stepcurve_core::view::{paired, View};
use stepcurve_core::Enumerator;

use crate::error::{CurveError, CurveResult};
use crate::validation::validate_knots;

/// Knots borrowed from a pair of time and value buffers.
pub type Knots<'a> = Pair<View<'a, f64>, View<'a, f64>>;

/// Advances `knots` to the first knot at or after `t` and returns it.
///
/// Returns `(NaN, extrapolation)` if every knot lies before `t`. Not
/// idempotent: knots before `t` are gone after the call.
pub fn valuate<K>(knots: &mut K, t: f64, extrapolation: f64) -> (f64, f64)
where
    K: Enumerator<Item = (f64, f64)>,
{
    while knots.has_current() {
        let (ti, xi) = knots.current();
        if ti >= t {
            return (ti, xi);
        }
        knots.advance();
    }

    (f64::NAN, extrapolation)
}

/// Probing form of [`valuate`].
pub fn value<K>(knots: &K, t: f64, extrapolation: f64) -> (f64, f64)
where
    K: Enumerator<Item = (f64, f64)> + Clone,
{
    valuate(&mut knots.clone(), t, extrapolation)
}

/// Integrates the step function from `t0` to `t`, consuming every knot at or
/// before `t`.
///
/// The first knot past `t` contributes its value up to `t` and stays under the
/// cursor, so a following call starting at `t` picks up where this one
/// stopped. Returns 0 without moving the cursor when `t <= t0`.
///
/// Beyond the last knot the integrand is `extrapolation`; with the NaN
/// default the result is NaN.
pub fn integrate<K>(knots: &mut K, t: f64, t0: f64, extrapolation: f64) -> f64
where
    K: Enumerator<Item = (f64, f64)>,
{
    if t <= t0 {
        return 0.0;
    }

    let mut t0 = t0;
    let mut sum = 0.0;

    while knots.has_current() {
        let (ti, xi) = knots.current();
        if ti > t {
            return sum + xi * (t - t0);
        }
        if t0 < ti {
            sum += xi * (ti - t0);
            t0 = ti;
        }
        knots.advance();
    }

    if t0 < t {
        sum += extrapolation * (t - t0);
    }

    sum
}

/// Probing form of [`integrate`].
pub fn integral<K>(knots: &K, t: f64, t0: f64, extrapolation: f64) -> f64
where
    K: Enumerator<Item = (f64, f64)> + Clone,
{
    integrate(&mut knots.clone(), t, t0, extrapolation)
}

/// Present value of the `(time, amount)` cash flows in `flows`, discounted
/// from `t0`.
///
/// Consumes both the knots and the flows. Flows before `t0` are skipped. The
/// discount factor is carried from one payment to the next, and the one to the
/// last processed payment is returned alongside the value as `(pv, D)`.
pub fn present_valuate<K, C>(knots: &mut K, flows: &mut C, t0: f64, extrapolation: f64) -> (f64, f64)
where
    K: Enumerator<Item = (f64, f64)>,
    C: Enumerator<Item = (f64, f64)>,
{
    let mut t0 = t0;
    let mut pv = 0.0;
    let mut discount = 1.0;

    while flows.has_current() {
        let (u, c) = flows.current();
        if u >= t0 {
            discount *= (-integrate(knots, u, t0, extrapolation)).exp();
            pv += c * discount;
            t0 = u;
        }
        flows.advance();
    }

    (pv, discount)
}

/// Probing form of [`present_valuate`]: neither `knots` nor `flows` move.
pub fn present_value<K, C>(knots: &K, flows: &C, t0: f64, extrapolation: f64) -> (f64, f64)
where
    K: Enumerator<Item = (f64, f64)> + Clone,
    C: Enumerator<Item = (f64, f64)> + Clone,
{
    present_valuate(&mut knots.clone(), &mut flows.clone(), t0, extrapolation)
}

/// A piecewise-flat forward curve over the knot enumerator `K`.
///
/// Copying a `PwFlat` copies its cursor, never the underlying buffers. Two
/// curves are equal when their cursors are equal and their extrapolation
/// values agree, with NaN equal to NaN.
///
/// # Example
///
/// ```rust
/// use stepcurve_curves::PwFlat;
///
/// let t = [1.0, 2.0, 3.0];
/// let x = [0.1, 0.2, 0.3];
/// let mut curve = PwFlat::from_slices(&t, &x).unwrap();
///
/// // probing leaves the cursor alone
/// assert_eq!(curve.value(2.5), (3.0, 0.3));
/// assert_eq!(curve.value(0.5), (1.0, 0.1));
///
/// // advancing does not
/// assert_eq!(curve.valuate(2.5), (3.0, 0.3));
/// assert_eq!(curve.valuate(0.5), (3.0, 0.3));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PwFlat<K> {
    knots: K,
    extrapolation: f64,
}

impl<'a> PwFlat<Knots<'a>> {
    /// Creates a curve over borrowed time and value buffers.
    ///
    /// # Errors
    ///
    /// - [`CurveError::Core`] if the buffers differ in length
    /// - [`CurveError::InvalidKnotOrdering`] if times are not strictly increasing
    /// - [`CurveError::InvalidKnot`] if any knot is not finite
    pub fn from_slices(times: &'a [f64], values: &'a [f64]) -> CurveResult<Self> {
        Self::checked(paired(times, values)?)
    }
}

impl PwFlat<Knots<'static>> {
    /// A curve with no knots that is `x` everywhere.
    pub fn constant(x: f64) -> Self {
        Self {
            knots: Pair::new(View::default(), View::default()),
            extrapolation: x,
        }
    }
}

impl<T, X> PwFlat<Pair<T, X>>
where
    T: Enumerator<Item = f64>,
    X: Enumerator<Item = f64>,
{
    /// Creates a curve from separate time and value enumerators.
    ///
    /// Knot ordering is not checked; see [`PwFlat::checked`].
    pub fn new(times: T, values: X) -> Self {
        Self::from_knots(Pair::new(times, values))
    }
}

impl<K> PwFlat<K>
where
    K: Enumerator<Item = (f64, f64)>,
{
    /// Creates a curve from a knot enumerator without validating it.
    pub fn from_knots(knots: K) -> Self {
        Self {
            knots,
            extrapolation: f64::NAN,
        }
    }

    /// Creates a curve after validating a copy of `knots`.
    ///
    /// `knots` must be finite.
    pub fn checked(knots: K) -> CurveResult<Self>
    where
        K: Clone,
    {
        validate_knots(knots.clone())?;
        Ok(Self::from_knots(knots))
    }

    /// Sets the value used past the last knot.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: f64) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Returns the extrapolation value, NaN if unset.
    pub fn extrapolation(&self) -> f64 {
        self.extrapolation
    }

    /// Returns the knot cursor.
    pub fn knots(&self) -> &K {
        &self.knots
    }

    /// Consumes the curve and returns its knot cursor.
    pub fn into_knots(self) -> K {
        self.knots
    }

    /// Advancing point evaluation; see [`valuate`].
    pub fn valuate(&mut self, t: f64) -> (f64, f64) {
        valuate(&mut self.knots, t, self.extrapolation)
    }

    /// Returns `(t[i], x[i])` for the knot whose segment contains `t`.
    ///
    /// Past the last knot returns `(NaN, extrapolation)`.
    pub fn value(&self, t: f64) -> (f64, f64)
    where
        K: Clone,
    {
        value(&self.knots, t, self.extrapolation)
    }

    /// Like [`value`](PwFlat::value) but fails instead of returning NaN.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Extrapolation`] if `t` is past the last knot and
    /// no extrapolation value is set.
    pub fn try_value(&self, t: f64) -> CurveResult<(f64, f64)>
    where
        K: Clone,
    {
        let (ti, xi) = self.value(t);
        if xi.is_nan() {
            return Err(CurveError::Extrapolation { time: t });
        }
        Ok((ti, xi))
    }

    /// Advancing integration over `[t0, t]`; see [`integrate`].
    pub fn integrate(&mut self, t: f64, t0: f64) -> f64 {
        integrate(&mut self.knots, t, t0, self.extrapolation)
    }

    /// Integral of the forward curve over `[t0, t]`.
    pub fn integral(&self, t: f64, t0: f64) -> f64
    where
        K: Clone,
    {
        integral(&self.knots, t, t0, self.extrapolation)
    }

    /// Discount factor from `t` back to `t0`: `exp(-integral(t, t0))`.
    pub fn discount(&self, t: f64, t0: f64) -> f64
    where
        K: Clone,
    {
        (-self.integral(t, t0)).exp()
    }

    /// Continuously compounded spot rate to `t`.
    ///
    /// The average of the forward curve over `[0, t]`, and the first knot's
    /// value at or before the first knot.
    pub fn spot(&self, t: f64) -> f64
    where
        K: Clone,
    {
        if !self.knots.has_current() {
            return self.extrapolation;
        }

        let (t1, x1) = self.knots.current();
        if t <= t1 {
            x1
        } else {
            self.integral(t, 0.0) / t
        }
    }

    /// Average forward over `[t1, t2]`; NaN unless `t1 < t2`.
    pub fn forward(&self, t1: f64, t2: f64) -> f64
    where
        K: Clone,
    {
        if t2 <= t1 {
            return f64::NAN;
        }
        self.integral(t2, t1) / (t2 - t1)
    }

    /// Advancing present value; see [`present_valuate`].
    pub fn present_valuate<C>(&mut self, flows: &mut C, t0: f64) -> (f64, f64)
    where
        C: Enumerator<Item = (f64, f64)>,
    {
        present_valuate(&mut self.knots, flows, t0, self.extrapolation)
    }

    /// Present value of `flows` from `t0`, with the discount factor to the
    /// last payment: `(pv, D)`.
    pub fn present_value<C>(&self, flows: &C, t0: f64) -> (f64, f64)
    where
        K: Clone,
        C: Enumerator<Item = (f64, f64)> + Clone,
    {
        present_value(&self.knots, flows, t0, self.extrapolation)
    }
}

impl<K> Enumerator for PwFlat<K>
where
    K: Enumerator<Item = (f64, f64)>,
{
    type Item = (f64, f64);

    fn has_current(&self) -> bool {
        self.knots.has_current()
    }

    fn current(&self) -> (f64, f64) {
        self.knots.current()
    }

    fn advance(&mut self) -> &mut Self {
        self.knots.advance();
        self
    }
}

impl<K: PartialEq> PartialEq for PwFlat<K> {
    fn eq(&self, other: &Self) -> bool {
        let same_extrapolation = self.extrapolation == other.extrapolation
            || (self.extrapolation.is_nan() && other.extrapolation.is_nan());

        same_extrapolation && self.knots == other.knots
    }
}
