//! Non-owning views over externally owned buffers.
//!
//! A [`View`] is a borrowed slice used as a cursor: the slice shrinks from the
//! front as the view advances. The buffer is owned elsewhere and the lifetime
//! `'a` ties every view (and every copy of it) to that owner.

use std::ptr;

use crate::combinators::Pair;
use crate::enumerator::Enumerator;
use crate::error::{CoreError, CoreResult};

/// A cursor over the remaining items of a borrowed buffer.
///
/// Equality is positional: two views are equal when they point at the same
/// remaining run of the same buffer.
#[derive(Debug)]
pub struct View<'a, T> {
    items: &'a [T],
}

impl<'a, T> View<'a, T> {
    /// Creates a view over the whole of `items`.
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Returns the number of items left.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items are left.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the remaining items.
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<'_, T> {}

impl<T> PartialEq for View<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.items.as_ptr(), other.items.as_ptr()) && self.items.len() == other.items.len()
    }
}

impl<T> Default for View<'_, T> {
    fn default() -> Self {
        Self { items: &[] }
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for View<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::new(items.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Self::new(items.as_slice())
    }
}

impl<T: Copy> Enumerator for View<'_, T> {
    type Item = T;

    fn has_current(&self) -> bool {
        !self.items.is_empty()
    }

    fn current(&self) -> T {
        match self.items.first() {
            Some(item) => *item,
            None => panic!("current() called on an exhausted View"),
        }
    }

    fn advance(&mut self) -> &mut Self {
        if let Some((_, rest)) = self.items.split_first() {
            self.items = rest;
        }
        self
    }
}

/// Pairs two buffers of equal length into a lock-step enumerator.
///
/// # Errors
///
/// Returns [`CoreError::LengthMismatch`] if the buffers differ in length.
pub fn paired<'a, A, B>(left: &'a [A], right: &'a [B]) -> CoreResult<Pair<View<'a, A>, View<'a, B>>> {
    if left.len() != right.len() {
        return Err(CoreError::length_mismatch(left.len(), right.len()));
    }
    Ok(Pair::new(View::new(left), View::new(right)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_view() {
        let mut a = View::<i32>::default();
        assert!(!a.has_current());

        let a2 = a;
        assert!(!a2.has_current());

        a.advance();
        assert!(!a.has_current());
        a.advance();
        assert!(!a.has_current());
    }

    #[test]
    fn test_walk() {
        let data = [1, 2, 3];
        let mut a = View::new(&data);
        let a2 = a;
        assert_eq!(a, a2);

        assert_eq!(a.current(), 1);
        a.advance();
        assert_eq!(a.post_advance().current(), 2);
        assert_eq!(a.current(), 3);
        assert!(!a.advance().has_current());
        assert_eq!(a.len(), 0);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let data = [1.0, 2.0];
        let mut a = View::new(&data);
        for _ in 0..10 {
            a.advance();
        }
        assert!(!a.has_current());
        assert!(a.is_empty());
    }

    #[test]
    #[should_panic(expected = "exhausted View")]
    fn test_current_past_end_panics() {
        let data = [1];
        let mut a = View::new(&data);
        a.advance();
        let _ = a.current();
    }

    #[test]
    fn test_equality_is_positional() {
        let data = [1, 2, 3];
        let same = [1, 2, 3];

        let a = View::new(&data);
        let b = View::new(&same);
        assert_ne!(a, b);

        let mut c = View::new(&data);
        c.advance();
        assert_ne!(a, c);
        assert_eq!(c, View::new(&data[1..]));
    }

    #[test]
    fn test_conversions() {
        let v = vec![1, 2];
        let arr = [3, 4, 5];

        assert_eq!(View::from(&v).len(), 2);
        assert_eq!(View::from(&arr).len(), 3);
        assert_eq!(View::from(&arr[..]).as_slice(), &[3, 4, 5]);
    }

    #[test]
    fn test_paired() {
        let t = [1.0, 2.0];
        let x = [0.1, 0.2];
        let short = [0.1];

        let tx = paired(&t, &x).unwrap();
        assert_eq!(tx.current(), (1.0, 0.1));

        let err = paired(&t, &short).unwrap_err();
        assert_eq!(err, CoreError::length_mismatch(2, 1));
    }
}
