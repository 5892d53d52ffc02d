//! The `counted` combinator.

use crate::enumerator::Enumerator;

/// An inner enumerator that keeps track of how many times it was advanced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counted<E> {
    inner: E,
    n: usize,
}

impl<E> Counted<E> {
    /// Starts counting advances of `inner` from zero.
    pub fn new(inner: E) -> Self {
        Self { inner, n: 0 }
    }

    /// Returns the number of advances so far.
    pub fn count(&self) -> usize {
        self.n
    }

    /// Returns the inner enumerator.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Returns the inner enumerator mutably.
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }

    /// Returns the inner enumerator at its current position.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Enumerator> Enumerator for Counted<E> {
    type Item = E::Item;

    fn has_current(&self) -> bool {
        self.inner.has_current()
    }

    fn current(&self) -> E::Item {
        self.inner.current()
    }

    fn advance(&mut self) -> &mut Self {
        if self.inner.has_current() {
            self.n += 1;
            self.inner.advance();
        }
        self
    }
}
