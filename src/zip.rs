use crate::cursor::{Cursor, Terminus};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};

/// Cursor walking two sequences in lockstep, done as soon as either ends
#[derive(Debug)]
pub enum ZipCursor<A, EA, B, EB> {
    Live {
        left: A,
        left_end: EA,
        right: B,
        right_end: EB,
    },
    Done,
}

pub type Zip<A, EA, B, EB> = SequenceView<ZipCursor<A, EA, B, EB>>;

impl<A, EA, B, EB> ZipCursor<A, EA, B, EB>
where
    A: Cursor,
    EA: Terminus<A>,
    B: Cursor,
    EB: Terminus<B>,
{
    fn settle(&mut self) {
        let exhausted = match self {
            ZipCursor::Live {
                left,
                left_end,
                right,
                right_end,
            } => left_end.is_reached_by(left) || right_end.is_reached_by(right),
            ZipCursor::Done => return,
        };
        if exhausted {
            *self = ZipCursor::Done;
        }
    }
}

impl<A: Clone, EA: Clone, B: Clone, EB: Clone> Clone for ZipCursor<A, EA, B, EB> {
    fn clone(&self) -> Self {
        match self {
            ZipCursor::Live {
                left,
                left_end,
                right,
                right_end,
            } => ZipCursor::Live {
                left: left.clone(),
                left_end: left_end.clone(),
                right: right.clone(),
                right_end: right_end.clone(),
            },
            ZipCursor::Done => ZipCursor::Done,
        }
    }
}

impl<A: PartialEq, EA, B: PartialEq, EB> PartialEq for ZipCursor<A, EA, B, EB> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                ZipCursor::Live {
                    left: a1,
                    right: b1,
                    ..
                },
                ZipCursor::Live {
                    left: a2,
                    right: b2,
                    ..
                },
            ) => a1 == a2 && b1 == b2,
            (ZipCursor::Done, ZipCursor::Done) => true,
            _ => false,
        }
    }
}

impl<A, EA, B, EB> Cursor for ZipCursor<A, EA, B, EB>
where
    A: Cursor,
    EA: Terminus<A>,
    B: Cursor,
    EB: Terminus<B>,
{
    type Element = (A::Element, B::Element);

    fn value(&self) -> Result<Self::Element> {
        match self {
            ZipCursor::Live { left, right, .. } => Ok((left.value()?, right.value()?)),
            ZipCursor::Done => Err(IterError::read_at_end("zip")),
        }
    }

    fn advance(&mut self) {
        if let ZipCursor::Live { left, right, .. } = self {
            left.advance();
            right.advance();
        }
        self.settle();
    }
}

/// Pairs of elements taken from both sequences in step; stops at the shorter
pub fn zip<A, B>(left: A, right: B) -> Zip<A::Cursor, A::End, B::Cursor, B::End>
where
    A: Sequence,
    B: Sequence,
{
    let mut begin = ZipCursor::Live {
        left: left.begin(),
        left_end: left.end(),
        right: right.begin(),
        right_end: right.end(),
    };
    begin.settle();
    SequenceView::new(begin, ZipCursor::Done)
}

/// Lockstep walk over any number of sequences
///
/// Elements are right-nested pairs in argument order, `(a, (b, c))` for three
/// sequences. The walk stops as soon as any sequence ends.
///
/// ```
/// use itercomb::zip;
///
/// let ids = [1, 2, 3];
/// let names = ["ann", "bob"];
/// let flags = [true, false, true];
/// let rows: Vec<_> = zip!(&ids, &names, &flags)
///     .into_iter()
///     .map(|(id, (name, flag))| (*id, *name, *flag))
///     .collect();
/// assert_eq!(rows, vec![(1, "ann", true), (2, "bob", false)]);
/// ```
#[macro_export]
macro_rules! zip {
    ($left:expr, $right:expr $(,)?) => {
        $crate::zip::zip($left, $right)
    };
    ($left:expr, $($rest:expr),+ $(,)?) => {
        $crate::zip::zip($left, $crate::zip!($($rest),+))
    };
}
