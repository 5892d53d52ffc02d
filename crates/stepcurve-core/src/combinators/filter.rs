//! Predicate-driven combinators: `when` (filter) and `until` (take-while-not).

use std::fmt;
use std::ptr;

use crate::enumerator::Enumerator;

/// The items of an inner enumerator satisfying a predicate.
///
/// Skips forward eagerly, both at construction and after every advance, so
/// `current()` is always an item for which the predicate holds.
pub struct When<'p, E, P> {
    inner: E,
    predicate: &'p P,
}

impl<'p, E, P> When<'p, E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    /// Filters `inner` on `predicate`.
    pub fn new(inner: E, predicate: &'p P) -> Self {
        let mut when = Self { inner, predicate };
        when.seek();
        when
    }

    fn seek(&mut self) {
        while self.inner.has_current() && !(self.predicate)(&self.inner.current()) {
            self.inner.advance();
        }
    }
}

impl<E, P> When<'_, E, P> {
    /// Returns the inner enumerator at its current position.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E, P> Enumerator for When<'_, E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn has_current(&self) -> bool {
        self.inner.has_current()
    }

    fn current(&self) -> E::Item {
        self.inner.current()
    }

    fn advance(&mut self) -> &mut Self {
        if self.inner.has_current() {
            self.inner.advance();
            self.seek();
        }
        self
    }
}

impl<E: Clone, P> Clone for When<'_, E, P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            predicate: self.predicate,
        }
    }
}

/// Callables compare by address; values of a zero-sized callable type carry
/// no state, so sharing an address means sharing behaviour.
impl<E: PartialEq, P> PartialEq for When<'_, E, P> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.predicate, other.predicate) && self.inner == other.inner
    }
}

impl<E: fmt::Debug, P> fmt::Debug for When<'_, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// The items of an inner enumerator up to the first one satisfying a predicate.
///
/// Appears exhausted once the predicate holds, but the inner enumerator keeps
/// its position: [`into_inner`](Until::into_inner) resumes exactly at the
/// stopping item.
pub struct Until<'p, E, P> {
    inner: E,
    predicate: &'p P,
}

impl<'p, E, P> Until<'p, E, P> {
    /// Stops `inner` the first time `predicate` holds.
    pub fn new(inner: E, predicate: &'p P) -> Self {
        Self { inner, predicate }
    }

    /// Returns the inner enumerator, positioned at the stopping item.
    pub fn into_inner(self) -> E {
        self.inner
    }

    /// Returns the inner enumerator.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E, P> Enumerator for Until<'_, E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn has_current(&self) -> bool {
        self.inner.has_current() && !(self.predicate)(&self.inner.current())
    }

    fn current(&self) -> E::Item {
        self.inner.current()
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.inner.advance();
        }
        self
    }
}

impl<E: Clone, P> Clone for Until<'_, E, P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            predicate: self.predicate,
        }
    }
}

/// Callables compare by address; values of a zero-sized callable type carry
/// no state, so sharing an address means sharing behaviour.
impl<E: PartialEq, P> PartialEq for Until<'_, E, P> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.predicate, other.predicate) && self.inner == other.inner
    }
}

impl<E: fmt::Debug, P> fmt::Debug for Until<'_, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Until").field("inner", &self.inner).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerator::length;
    use crate::sequence::Sequence;
    use crate::view::View;

    #[test]
    fn test_when_even() {
        let even = |i: &i32| i % 2 == 0;
        let mut w = When::new(Sequence::new(0, 1), &even);

        assert!(w.has_current());
        assert_eq!(w.current(), 0);
        w.advance();
        assert_eq!(w.current(), 2);
        assert_eq!(w.post_advance().current(), 2);
        assert_eq!(w.current(), 4);
    }

    #[test]
    fn test_when_skips_at_construction() {
        let big = |i: &i32| *i > 1;
        let data = [0, 1, 2, 3];
        let w = When::new(View::new(&data), &big);

        assert_eq!(w.current(), 2);
        assert_eq!(length(&w), 2);
    }

    #[test]
    fn test_when_nothing_matches() {
        let never = |_: &i32| false;
        let data = [1, 2, 3];
        let mut w = When::new(View::new(&data), &never);

        assert!(!w.has_current());
        w.advance();
        assert!(!w.has_current());
    }

    #[test]
    fn test_until_stops_without_consuming() {
        let past_three = |t: &f64| *t > 3.0;
        let mut u = Until::new(Sequence::new(-1.0, 0.5), &past_three);

        let mut seen = Vec::new();
        while u.has_current() {
            seen.push(u.current());
            u.advance();
        }
        assert_eq!(seen, vec![-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);

        // further advances are no-ops and the inner cursor sits on the stopping item
        u.advance();
        assert!(!u.has_current());
        assert_eq!(u.into_inner().current(), 3.5);
    }

    #[test]
    fn test_until_immediately_true() {
        let always = |_: &i32| true;
        let data = [1, 2];
        let u = Until::new(View::new(&data), &always);

        assert!(!u.has_current());
        assert_eq!(length(&u), 0);
    }

    #[test]
    fn test_equality_requires_same_predicate() {
        let p = |i: &i32| *i > 2;
        let q = |i: &i32| *i > 2;
        let data = [1, 2, 3];

        let a = Until::new(View::new(&data), &p);
        let b = Until::new(View::new(&data), &p);
        assert_eq!(a, b);

        let c = Until::new(View::new(&data), &q);
        assert!(a.inner() == c.inner());

        let w1 = When::new(View::new(&data), &p);
        let mut w2 = w1.clone();
        assert_eq!(w1, w2);
        w2.advance();
        assert_ne!(w1, w2);
    }
}
