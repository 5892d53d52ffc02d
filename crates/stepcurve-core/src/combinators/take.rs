//! The `take` combinator.

use crate::enumerator::Enumerator;

/// At most `n` items of an inner enumerator.
///
/// Exhausted when either the count reaches zero or the inner enumerator is
/// exhausted, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Take<E> {
    n: usize,
    inner: E,
}

impl<E> Take<E> {
    /// Limits `inner` to at most `n` items.
    pub fn new(n: usize, inner: E) -> Self {
        Self { n, inner }
    }

    /// Returns the number of items still allowed.
    pub fn remaining(&self) -> usize {
        self.n
    }

    /// Returns the inner enumerator at its current position.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Enumerator> Enumerator for Take<E> {
    type Item = E::Item;

    fn has_current(&self) -> bool {
        self.n != 0 && self.inner.has_current()
    }

    fn current(&self) -> E::Item {
        assert!(self.n != 0, "current() called on an exhausted Take");
        self.inner.current()
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.n -= 1;
            self.inner.advance();
        }
        self
    }
}
