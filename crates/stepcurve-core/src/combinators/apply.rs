//! The `apply` (map) combinator.

use std::fmt;
use std::ptr;

use crate::enumerator::Enumerator;

/// An inner enumerator whose items are transformed by a function on read.
///
/// Holds a reference to the function; nothing is evaluated until
/// [`current`](Enumerator::current) is called.
pub struct Apply<'f, E, F> {
    f: &'f F,
    inner: E,
}

impl<'f, E, F> Apply<'f, E, F> {
    /// Maps the items of `inner` through `f`.
    pub fn new(f: &'f F, inner: E) -> Self {
        Self { f, inner }
    }

    /// Returns the inner enumerator at its current position.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E, F, Y> Enumerator for Apply<'_, E, F>
where
    E: Enumerator,
    F: Fn(E::Item) -> Y,
{
    type Item = Y;

    fn has_current(&self) -> bool {
        self.inner.has_current()
    }

    fn current(&self) -> Y {
        (self.f)(self.inner.current())
    }

    fn advance(&mut self) -> &mut Self {
        self.inner.advance();
        self
    }
}

impl<E: Clone, F> Clone for Apply<'_, E, F> {
    fn clone(&self) -> Self {
        Self {
            f: self.f,
            inner: self.inner.clone(),
        }
    }
}

/// Callables compare by address; values of a zero-sized callable type carry
/// no state, so sharing an address means sharing behaviour.
impl<E: PartialEq, F> PartialEq for Apply<'_, E, F> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.f, other.f) && self.inner == other.inner
    }
}

impl<E: fmt::Debug, F> fmt::Debug for Apply<'_, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Apply").field("inner", &self.inner).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;
    use crate::view::View;

    #[test]
    fn test_square() {
        let square = |i: i32| i * i;
        let mut a = Apply::new(&square, Sequence::new(-2, 1));

        assert!(a.has_current());
        assert_eq!(a.current(), 4);
        assert_eq!(a.advance().current(), 1);
        assert_eq!(a.advance().current(), 0);
        assert_eq!(a.advance().current(), 1);
    }

    #[test]
    fn test_negate() {
        let negate = |i: i32| -i;
        let mut a = Apply::new(&negate, Sequence::new(-2, 1));

        assert_eq!(a.current(), 2);
        assert_eq!(a.advance().current(), 1);
        assert_eq!(a.advance().current(), 0);
        assert_eq!(a.advance().current(), -1);
    }

    #[test]
    fn test_changes_item_type() {
        let discount = |t: f64| (-0.05 * t).exp();
        let times = [0.0, 1.0];
        let a = Apply::new(&discount, View::new(&times));

        assert_eq!(a.current(), 1.0);
        assert!(a.clone().advance().current() < 1.0);
        // the clone advanced, not `a`
        assert_eq!(a.current(), 1.0);
    }

    #[test]
    fn test_lazy_evaluation() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let traced = |i: i32| {
            calls.set(calls.get() + 1);
            i
        };
        let mut a = Apply::new(&traced, Sequence::new(0, 1));
        a.advance();
        a.advance();
        assert_eq!(calls.get(), 0);

        let _ = a.current();
        assert_eq!(calls.get(), 1);
    }
}
