//! The `pair` combinator.

use crate::enumerator::Enumerator;

/// Two enumerators advanced in lock-step.
///
/// Live while both sides are live; yields the tuple of both current items.
/// This is how `(time, value)` knots and `(payment time, amount)` cash flows
/// are kept synchronized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair<A, B> {
    a: A,
    b: B,
}

impl<A, B> Pair<A, B> {
    /// Pairs `a` with `b`.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Returns the first enumerator.
    pub fn first(&self) -> &A {
        &self.a
    }

    /// Returns the second enumerator.
    pub fn second(&self) -> &B {
        &self.b
    }

    /// Splits the pair back into its two enumerators.
    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: Enumerator, B: Enumerator> Enumerator for Pair<A, B> {
    type Item = (A::Item, B::Item);

    fn has_current(&self) -> bool {
        self.a.has_current() && self.b.has_current()
    }

    fn current(&self) -> Self::Item {
        (self.a.current(), self.b.current())
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.a.advance();
            self.b.advance();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerator::length;
    use crate::sequence::Sequence;
    use crate::view::View;

    #[test]
    fn test_lock_step() {
        let t = [1.0, 2.0, 3.0];
        let x = [0.1, 0.2, 0.3];
        let mut p = Pair::new(View::new(&t), View::new(&x));

        assert_eq!(p.current(), (1.0, 0.1));
        p.advance();
        assert_eq!(p.current(), (2.0, 0.2));
        p.advance();
        assert_eq!(p.current(), (3.0, 0.3));
        p.advance();
        assert!(!p.has_current());
    }

    #[test]
    fn test_shorter_side_wins() {
        let t = [1, 2, 3];
        assert_eq!(length(&Pair::new(View::new(&t), Sequence::new(0, 1))), 3);
        assert_eq!(length(&Pair::new(View::new(&t), View::new(&t[..1]))), 1);
    }

    #[test]
    fn test_exhausted_pair_does_not_move_live_side() {
        let t = [1, 2, 3];
        let short = [9];
        let mut p = Pair::new(View::new(&t), View::new(&short));

        p.advance();
        p.advance();
        p.advance();
        assert!(!p.has_current());

        let (a, _) = p.into_parts();
        assert_eq!(a.current(), 2);
    }
}
