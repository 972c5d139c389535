use crate::cursor::{Bounded, Cursor, Terminus};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};

/// Cursor that replays a finite sequence, jumping back to its first position
/// whenever it reaches the last
#[derive(Debug, Clone)]
pub struct CycleCursor<C> {
    current: C,
    first: C,
    last: C,
}

impl<C: Cursor> CycleCursor<C> {
    fn is_empty(&self) -> bool {
        self.first.equals(&self.last)
    }
}

impl<C: PartialEq> PartialEq for CycleCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C: Cursor> Cursor for CycleCursor<C> {
    type Element = C::Element;

    fn value(&self) -> Result<Self::Element> {
        if self.is_empty() {
            return Err(IterError::read_at_end("cycle"));
        }
        self.current.value()
    }

    fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current.advance();
        if self.current.equals(&self.last) {
            self.current = self.first.clone();
        }
    }
}

/// End marker of a cycle: reached only when the cycled sequence is empty
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleEnd;

impl<C: Cursor> Terminus<CycleCursor<C>> for CycleEnd {
    fn is_reached_by(&self, cursor: &CycleCursor<C>) -> bool {
        cursor.is_empty()
    }
}

pub type Cycle<C> = SequenceView<CycleCursor<C>, CycleEnd>;

/// The elements of a finite sequence, over and over
///
/// Cycling an empty sequence yields an empty view instead of spinning.
pub fn cycle<S>(sequence: S) -> Cycle<S::Cursor>
where
    S: Sequence,
    S::End: Bounded<S::Cursor>,
{
    let (first, last) = sequence.span();
    if first.equals(&last) {
        tracing::debug!("cycling an empty sequence");
    }
    let cursor = CycleCursor {
        current: first.clone(),
        first,
        last,
    };
    SequenceView::new(cursor, CycleEnd)
}

pub trait CycleExt: Sequence + Sized {
    fn cycle(self) -> Cycle<Self::Cursor>
    where
        Self::End: Bounded<Self::Cursor>,
    {
        cycle(self)
    }
}

impl<S: Sequence> CycleExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::init_tracing;

    #[test]
    fn test_cycle_wraps_around() {
        let letters: String = cycle("ABC").into_iter().take(7).collect();
        assert_eq!(letters, "ABCABCA");
    }

    #[test]
    fn test_cycle_single_element() {
        let data = [4];
        let fours: Vec<_> = (&data).cycle().into_iter().take(3).copied().collect();
        assert_eq!(fours, vec![4, 4, 4]);
    }

    #[test]
    fn test_cycle_of_empty_is_empty() {
        init_tracing();
        let data: Vec<i32> = Vec::new();
        let view = cycle(&data);
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
        assert!(view.begin().value().is_err());

        let mut cursor = view.begin();
        cursor.advance();
        assert!(view.end().is_reached_by(&cursor));
    }
}
