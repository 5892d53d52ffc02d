//! The enumerator abstraction.
//!
//! An [`Enumerator`] is a cursor with three capabilities:
//!
//! - [`has_current`](Enumerator::has_current): is there an item under the cursor?
//! - [`current`](Enumerator::current): read that item (only valid while live)
//! - [`advance`](Enumerator::advance): move to the next item
//!
//! Unlike [`Iterator`], reading and advancing are separate steps, so an
//! enumerator can be inspected any number of times without being consumed.
//! Cloning an enumerator snapshots its cursor, which is how "peek without
//! consuming" is expressed throughout the workspace.
//!
//! Once `has_current()` returns `false` it keeps returning `false`, and further
//! calls to `advance()` do nothing.

use std::iter::FusedIterator;

use crate::combinators::{Apply, Counted, Pair, Take, Until, When};

/// A lazy, pull-based cursor over a sequence of items.
pub trait Enumerator {
    /// The type of item yielded by [`current`](Enumerator::current).
    type Item;

    /// Returns `true` while there is an item under the cursor.
    fn has_current(&self) -> bool;

    /// Returns the item under the cursor.
    ///
    /// # Panics
    ///
    /// Implementations panic when called on an exhausted enumerator.
    fn current(&self) -> Self::Item;

    /// Moves the cursor to the next item and returns `self` for chaining.
    ///
    /// A no-op once the enumerator is exhausted.
    fn advance(&mut self) -> &mut Self;

    /// Advances the cursor and returns a snapshot taken before the move.
    fn post_advance(&mut self) -> Self
    where
        Self: Sized + Clone,
    {
        let snapshot = self.clone();
        self.advance();
        snapshot
    }

    /// Reads the current item and advances, or returns `None` when exhausted.
    fn next_item(&mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        if self.has_current() {
            let item = self.current();
            self.advance();
            Some(item)
        } else {
            None
        }
    }

    /// Limits the enumerator to at most `n` items.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(n, self)
    }

    /// Skips up to `n` items.
    fn skip(mut self, n: usize) -> Self
    where
        Self: Sized,
    {
        for _ in 0..n {
            if !self.has_current() {
                break;
            }
            self.advance();
        }
        self
    }

    /// Walks this enumerator in lock-step with `other`.
    fn pair<B: Enumerator>(self, other: B) -> Pair<Self, B>
    where
        Self: Sized,
    {
        Pair::new(self, other)
    }

    /// Keeps only the items for which `predicate` holds.
    fn when<P>(self, predicate: &P) -> When<'_, Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        When::new(self, predicate)
    }

    /// Yields items until `predicate` first holds.
    fn until<P>(self, predicate: &P) -> Until<'_, Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Until::new(self, predicate)
    }

    /// Lazily maps every item through `f`.
    fn apply<F, Y>(self, f: &F) -> Apply<'_, Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Y,
    {
        Apply::new(f, self)
    }

    /// Counts the number of advances.
    fn counted(self) -> Counted<Self>
    where
        Self: Sized,
    {
        Counted::new(self)
    }

    /// Adapts the enumerator into a standard [`Iterator`].
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter { inner: self }
    }
}

impl<E: Enumerator + ?Sized> Enumerator for &mut E {
    type Item = E::Item;

    fn has_current(&self) -> bool {
        (**self).has_current()
    }

    fn current(&self) -> Self::Item {
        (**self).current()
    }

    fn advance(&mut self) -> &mut Self {
        (**self).advance();
        self
    }
}

/// A standard [`Iterator`] driving an [`Enumerator`].
///
/// Created by [`Enumerator::iter`].
#[derive(Debug, Clone, PartialEq)]
pub struct Iter<E> {
    inner: E,
}

impl<E> Iter<E> {
    /// Returns the underlying enumerator at its current position.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Enumerator> Iterator for Iter<E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_item()
    }
}

impl<E: Enumerator> FusedIterator for Iter<E> {}

/// Advances `e` until `predicate` holds for the current item or `e` is exhausted.
pub fn upto<E, P>(mut e: E, predicate: P) -> E
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    while e.has_current() && !predicate(&e.current()) {
        e.advance();
    }
    e
}

/// Returns the position of the first `false` item, or the exhausted enumerator.
pub fn all<E: Enumerator<Item = bool>>(e: E) -> E {
    upto(e, |b| !*b)
}

/// Returns the position of the first `true` item, or the exhausted enumerator.
pub fn any<E: Enumerator<Item = bool>>(e: E) -> E {
    upto(e, |b| *b)
}

/// Counts the items of a copy of `e`, starting the count at `n`.
///
/// Never terminates on an infinite enumerator.
pub fn length_from<E: Enumerator + Clone>(e: &E, n: usize) -> usize {
    let mut e = e.clone();
    let mut n = n;
    while e.has_current() {
        e.advance();
        n += 1;
    }
    n
}

/// Counts the items of a copy of `e`; `e` itself is not consumed.
///
/// O(n) and never terminates on an infinite enumerator.
pub fn length<E: Enumerator + Clone>(e: &E) -> usize {
    length_from(e, 0)
}

/// Returns `e` positioned at its last item, or exhausted if `e` is empty.
pub fn back<E: Enumerator + Clone>(mut e: E) -> E {
    let mut last = e.clone();
    while e.has_current() {
        last = e.post_advance();
    }
    last
}

/// Returns `true` if both enumerators yield equal items and exhaust together.
pub fn equal<A, B>(mut a: A, mut b: B) -> bool
where
    A: Enumerator,
    B: Enumerator,
    A::Item: PartialEq<B::Item>,
{
    while a.has_current() && b.has_current() {
        if a.current() != b.current() {
            return false;
        }
        a.advance();
        b.advance();
    }
    !a.has_current() && !b.has_current()
}
