use crate::cursor::{Cursor, Unbounded};
use crate::error::Result;
use crate::sequence::SequenceView;

/// Cursor that hands out clones of one value
///
/// It tracks how many values were emitted; two cursors are equal when they
/// emitted the same number of values, which is how the bounded form ends.
#[derive(Debug, Clone)]
pub struct RepeatCursor<T> {
    value: T,
    emitted: usize,
}

impl<T> PartialEq for RepeatCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.emitted == other.emitted
    }
}

impl<T: Clone> Cursor for RepeatCursor<T> {
    type Element = T;

    fn value(&self) -> Result<T> {
        Ok(self.value.clone())
    }

    fn advance(&mut self) {
        self.emitted = self.emitted.saturating_add(1);
    }
}

/// `value` forever
pub fn repeat<T: Clone>(value: T) -> SequenceView<RepeatCursor<T>, Unbounded> {
    SequenceView::new(RepeatCursor { value, emitted: 0 }, Unbounded)
}

/// `value` exactly `times` times
pub fn repeat_n<T: Clone>(value: T, times: usize) -> SequenceView<RepeatCursor<T>> {
    let end = RepeatCursor {
        value: value.clone(),
        emitted: times,
    };
    SequenceView::new(RepeatCursor { value, emitted: 0 }, end)
}
