use crate::cursor::{Cursor, Terminus};
use crate::sequence::{Sequence, SequenceView};

/// The rest of `sequence` after its leading run of elements satisfying `predicate`
///
/// The result is the remaining stretch of the source itself, not a wrapper:
/// its cursors are the source's own cursors.
pub fn dropwhile<S, F>(sequence: S, predicate: F) -> SequenceView<S::Cursor, S::End>
where
    S: Sequence,
    F: Fn(&<S::Cursor as Cursor>::Element) -> bool,
{
    let (mut begin, end) = (sequence.begin(), sequence.end());
    while !end.is_reached_by(&begin) {
        match begin.value() {
            Ok(value) if predicate(&value) => begin.advance(),
            _ => break,
        }
    }
    SequenceView::new(begin, end)
}

pub trait DropWhileExt: Sequence + Sized {
    fn dropwhile<F>(self, predicate: F) -> SequenceView<Self::Cursor, Self::End>
    where
        F: Fn(&<Self::Cursor as Cursor>::Element) -> bool,
    {
        dropwhile(self, predicate)
    }
}

impl<S: Sequence> DropWhileExt for S {}
