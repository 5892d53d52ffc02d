//! Arithmetic progressions.

use std::ops::Add;

use crate::enumerator::Enumerator;

/// The infinite progression `t0, t0 + dt, t0 + 2dt, ...`.
///
/// Never exhausts; bound it with [`take`](Enumerator::take) or
/// [`until`](Enumerator::until).
///
/// # Example
///
/// ```rust
/// use stepcurve_core::{Enumerator, Sequence};
///
/// let mut s = Sequence::new(1.0, 0.5);
/// assert_eq!(s.current(), 1.0);
/// assert_eq!(s.advance().current(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sequence<T> {
    t: T,
    dt: T,
}

impl<T> Sequence<T> {
    /// Creates the progression starting at `t0` with step `dt`.
    pub fn new(t0: T, dt: T) -> Self {
        Self { t: t0, dt }
    }

    /// Returns the step.
    pub fn step(&self) -> &T {
        &self.dt
    }
}

impl<T> Enumerator for Sequence<T>
where
    T: Copy + Add<Output = T>,
{
    type Item = T;

    fn has_current(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.t
    }

    fn advance(&mut self) -> &mut Self {
        self.t = self.t + self.dt;
        self
    }
}

/// The progression repeating `value` forever.
pub fn constant<T: Default>(value: T) -> Sequence<T> {
    Sequence::new(value, T::default())
}
