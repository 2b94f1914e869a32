//! Result limiter
//!
//! Caps a lazy result stream without pulling more items than it yields.

/// Iterator adapter yielding at most `max` items, or everything if unbounded
#[derive(Debug, Clone)]
pub struct Limit<I> {
    inner: I,
    remaining: Option<usize>,
}

/// Limits `iter` to its first `max` items.
///
/// `None` is unbounded and forwards every item. `Some(0)` yields nothing.
pub fn limit<I: IntoIterator>(iter: I, max: Option<usize>) -> Limit<I::IntoIter> {
    Limit {
        inner: iter.into_iter(),
        remaining: max,
    }
}

impl<I> Limit<I> {
    /// Items still allowed through, `None` if unbounded
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            None => self.inner.next(),
            Some(0) => None,
            Some(remaining) => {
                *remaining -= 1;
                self.inner.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        match self.remaining {
            None => (lower, upper),
            Some(n) => (
                lower.min(n),
                Some(upper.map_or(n, |upper| upper.min(n))),
            ),
        }
    }
}
