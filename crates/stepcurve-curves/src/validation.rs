//! Knot validation.
//!
//! Knot times must be strictly increasing and every knot finite. Checking is
//! done once at construction so integration never meets a bad knot.

use stepcurve_core::Enumerator;

use crate::error::{CurveError, CurveResult};

/// Scans `knots` and returns their number if they are valid.
///
/// Consumes `knots`; pass a clone to keep a cursor. Never returns on an
/// infinite enumerator.
///
/// # Errors
///
/// - [`CurveError::InvalidKnot`] if a time or value is NaN or infinite
/// - [`CurveError::InvalidKnotOrdering`] if times are not strictly increasing
pub fn validate_knots<K>(mut knots: K) -> CurveResult<usize>
where
    K: Enumerator<Item = (f64, f64)>,
{
    let mut count = 0;
    let mut prev: Option<f64> = None;

    while let Some((time, value)) = knots.next_item() {
        if !time.is_finite() || !value.is_finite() {
            return Err(CurveError::InvalidKnot {
                index: count,
                time,
                value,
            });
        }
        if let Some(prev) = prev {
            if time <= prev {
                return Err(CurveError::invalid_knot_ordering(count, prev, time));
            }
        }
        prev = Some(time);
        count += 1;
    }

    Ok(count)
}
