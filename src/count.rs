use std::ops::AddAssign;

use crate::cursor::{Cursor, Unbounded};
use crate::error::Result;
use crate::sequence::SequenceView;

/// Arithmetic progression cursor
///
/// Equality compares the current value only. The progression has no end, so
/// overflow of `T` follows the usual integer arithmetic rules.
#[derive(Debug, Clone, PartialEq)]
pub struct CountCursor<T, S> {
    current: T,
    step: S,
}

pub type Count<T, S> = SequenceView<CountCursor<T, S>, Unbounded>;

impl<T, S> Cursor for CountCursor<T, S>
where
    T: AddAssign<S> + Clone + PartialEq,
    S: Clone + PartialEq,
{
    type Element = T;

    fn value(&self) -> Result<T> {
        Ok(self.current.clone())
    }

    fn advance(&mut self) {
        self.current += self.step.clone();
    }
}

/// `start`, `start + step`, `start + 2 * step`, ... without end
pub fn count<T, S>(start: T, step: S) -> Count<T, S>
where
    T: AddAssign<S> + Clone + PartialEq,
    S: Clone + PartialEq,
{
    SequenceView::new(
        CountCursor {
            current: start,
            step,
        },
        Unbounded,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_from_zero() {
        let first: Vec<_> = count(0, 1).into_iter().take(5).collect();
        assert_eq!(first, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_count_with_step() {
        let first: Vec<_> = count(10, -3).into_iter().take(4).collect();
        assert_eq!(first, vec![10, 7, 4, 1]);

        let halves: Vec<f64> = count(0.0, 0.5).into_iter().take(3).collect();
        assert_eq!(halves, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_count_never_empty() {
        let view = count(0u8, 1u8);
        assert!(!view.is_empty());
        assert_eq!(view.begin(), view.begin());
    }

    #[test]
    fn test_count_restarts() {
        let view = count(5, 5);
        let once: Vec<_> = view.iter().take(2).collect();
        let twice: Vec<_> = view.iter().take(2).collect();
        assert_eq!(once, twice);
        assert_eq!(once, vec![5, 10]);
    }
}
