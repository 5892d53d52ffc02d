//! Enumerator combinators.
//!
//! Every combinator is a small value type wrapping one or two inner
//! enumerators. None of them copy the underlying storage:
//!
//! - [`take`]: at most `n` items
//! - [`drop`]: skip the first `n` items
//! - [`pair`]: two enumerators in lock-step
//! - [`when`]: filter on a predicate
//! - [`until`]: stop the first time a predicate holds
//! - [`apply`]: lazily map items through a function
//! - [`counted`]: count advances
//!
//! Combinators that hold a predicate or function keep a reference to it, so
//! the callable must outlive the combinator and every copy of it. Two such
//! combinators compare equal only if they share the same callable and their
//! inner cursors are equal.

mod apply;
mod counted;
mod filter;
mod pair;
mod take;

pub use apply::Apply;
pub use counted::Counted;
pub use filter::{Until, When};
pub use pair::Pair;
pub use take::Take;

use crate::enumerator::Enumerator;

/// Limits `e` to at most `n` items.
pub fn take<E: Enumerator>(n: usize, e: E) -> Take<E> {
    Take::new(n, e)
}

/// Skips up to `n` items of `e`.
pub fn drop<E: Enumerator>(n: usize, e: E) -> E {
    e.skip(n)
}

/// Walks `a` and `b` in lock-step.
pub fn pair<A: Enumerator, B: Enumerator>(a: A, b: B) -> Pair<A, B> {
    Pair::new(a, b)
}

/// Keeps only the items of `e` for which `predicate` holds.
pub fn when<E, P>(e: E, predicate: &P) -> When<'_, E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    When::new(e, predicate)
}

/// Yields the items of `e` until `predicate` first holds.
pub fn until<E, P>(e: E, predicate: &P) -> Until<'_, E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    Until::new(e, predicate)
}

/// Lazily maps the items of `e` through `f`.
pub fn apply<F, E, Y>(f: &F, e: E) -> Apply<'_, E, F>
where
    E: Enumerator,
    F: Fn(E::Item) -> Y,
{
    Apply::new(f, e)
}

/// Counts the advances of `e`.
pub fn counted<E: Enumerator>(e: E) -> Counted<E> {
    Counted::new(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerator::{equal, length};
    use crate::sequence::Sequence;
    use crate::view::View;

    #[test]
    fn test_drop() {
        let data = [1, 2, 3, 4];
        assert_eq!(drop(2, View::new(&data)).current(), 3);
        assert!(!drop(10, View::new(&data)).has_current());
        assert_eq!(drop(0, Sequence::new(7, 1)).current(), 7);
    }

    #[test]
    fn test_composition() {
        // squares of the even numbers below ten
        let even = |i: &i32| i % 2 == 0;
        let below_ten = |i: &i32| *i >= 10;
        let square = |i: i32| i * i;

        let squares = apply(&square, until(when(Sequence::new(0, 1), &even), &below_ten));
        let expected = [0, 4, 16, 36, 64];

        assert_eq!(length(&squares), 5);
        assert!(equal(squares, View::new(&expected)));
    }

    #[test]
    fn test_free_functions_match_methods() {
        let data = [1, 2, 3];

        assert_eq!(take(2, View::new(&data)), View::new(&data).take(2));
        assert_eq!(counted(View::new(&data)), View::new(&data).counted());
        assert_eq!(
            pair(View::new(&data), Sequence::new(0, 1)),
            View::new(&data).pair(Sequence::new(0, 1))
        );
    }
}
