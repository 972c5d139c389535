use crate::cursor::{Cursor, Terminus};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};

/// Cursor walking two sequences in lockstep until both end
///
/// A side that ended early reads as its fill value.
#[derive(Debug)]
pub enum ZipLongestCursor<A, EA, B, EB, X, Y> {
    Live {
        left: A,
        left_end: EA,
        right: B,
        right_end: EB,
        left_fill: X,
        right_fill: Y,
    },
    Done,
}

pub type ZipLongest<A, EA, B, EB, X, Y> = SequenceView<ZipLongestCursor<A, EA, B, EB, X, Y>>;

impl<A, EA, B, EB, X, Y> ZipLongestCursor<A, EA, B, EB, X, Y>
where
    A: Cursor,
    EA: Terminus<A>,
    B: Cursor,
    EB: Terminus<B>,
{
    fn settle(&mut self) {
        let exhausted = match self {
            ZipLongestCursor::Live {
                left,
                left_end,
                right,
                right_end,
                ..
            } => left_end.is_reached_by(left) && right_end.is_reached_by(right),
            ZipLongestCursor::Done => return,
        };
        if exhausted {
            *self = ZipLongestCursor::Done;
        }
    }
}

impl<A, EA, B, EB, X, Y> Clone for ZipLongestCursor<A, EA, B, EB, X, Y>
where
    A: Clone,
    EA: Clone,
    B: Clone,
    EB: Clone,
    X: Clone,
    Y: Clone,
{
    fn clone(&self) -> Self {
        match self {
            ZipLongestCursor::Live {
                left,
                left_end,
                right,
                right_end,
                left_fill,
                right_fill,
            } => ZipLongestCursor::Live {
                left: left.clone(),
                left_end: left_end.clone(),
                right: right.clone(),
                right_end: right_end.clone(),
                left_fill: left_fill.clone(),
                right_fill: right_fill.clone(),
            },
            ZipLongestCursor::Done => ZipLongestCursor::Done,
        }
    }
}

impl<A: PartialEq, EA, B: PartialEq, EB, X, Y> PartialEq for ZipLongestCursor<A, EA, B, EB, X, Y> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                ZipLongestCursor::Live {
                    left: a1,
                    right: b1,
                    ..
                },
                ZipLongestCursor::Live {
                    left: a2,
                    right: b2,
                    ..
                },
            ) => a1 == a2 && b1 == b2,
            (ZipLongestCursor::Done, ZipLongestCursor::Done) => true,
            _ => false,
        }
    }
}

impl<A, EA, B, EB, X, Y> Cursor for ZipLongestCursor<A, EA, B, EB, X, Y>
where
    A: Cursor<Element = X>,
    EA: Terminus<A>,
    B: Cursor<Element = Y>,
    EB: Terminus<B>,
    X: Clone,
    Y: Clone,
{
    type Element = (X, Y);

    fn value(&self) -> Result<(X, Y)> {
        match self {
            ZipLongestCursor::Live {
                left,
                left_end,
                right,
                right_end,
                left_fill,
                right_fill,
            } => {
                let left = if left_end.is_reached_by(left) {
                    left_fill.clone()
                } else {
                    left.value()?
                };
                let right = if right_end.is_reached_by(right) {
                    right_fill.clone()
                } else {
                    right.value()?
                };
                Ok((left, right))
            }
            ZipLongestCursor::Done => Err(IterError::read_at_end("zip_longest")),
        }
    }

    fn advance(&mut self) {
        if let ZipLongestCursor::Live {
            left,
            left_end,
            right,
            right_end,
            ..
        } = self
        {
            if !left_end.is_reached_by(left) {
                left.advance();
            }
            if !right_end.is_reached_by(right) {
                right.advance();
            }
        }
        self.settle();
    }
}

/// Pairs from both sequences until the longer one ends, padding the shorter
/// side with the given fill values
#[allow(clippy::type_complexity)]
pub fn zip_longest_with<A, B>(
    left: A,
    right: B,
    left_fill: <A::Cursor as Cursor>::Element,
    right_fill: <B::Cursor as Cursor>::Element,
) -> ZipLongest<
    A::Cursor,
    A::End,
    B::Cursor,
    B::End,
    <A::Cursor as Cursor>::Element,
    <B::Cursor as Cursor>::Element,
>
where
    A: Sequence,
    B: Sequence,
    <A::Cursor as Cursor>::Element: Clone,
    <B::Cursor as Cursor>::Element: Clone,
{
    let mut begin = ZipLongestCursor::Live {
        left: left.begin(),
        left_end: left.end(),
        right: right.begin(),
        right_end: right.end(),
        left_fill,
        right_fill,
    };
    begin.settle();
    SequenceView::new(begin, ZipLongestCursor::Done)
}

/// Pairs from both sequences until the longer one ends, padding the shorter
/// side with its element type's default
#[allow(clippy::type_complexity)]
pub fn zip_longest<A, B>(
    left: A,
    right: B,
) -> ZipLongest<
    A::Cursor,
    A::End,
    B::Cursor,
    B::End,
    <A::Cursor as Cursor>::Element,
    <B::Cursor as Cursor>::Element,
>
where
    A: Sequence,
    B: Sequence,
    <A::Cursor as Cursor>::Element: Clone + Default,
    <B::Cursor as Cursor>::Element: Clone + Default,
{
    zip_longest_with(left, right, Default::default(), Default::default())
}

/// Lockstep walk over any number of sequences until the longest one ends
///
/// Elements are right-nested pairs in argument order, like [`zip!`](crate::zip!).
/// A sequence that ended early reads as its element type's default; once every
/// sequence after the first has ended, the nested pair reads as its own
/// default.
///
/// ```
/// use itercomb::{iterable, zip_longest};
///
/// let ids = [1, 2, 3];
/// let scores = [0.5];
/// let rows: Vec<_> = zip_longest!(iterable(ids.into_iter()), iterable(scores.into_iter()), "xy")
///     .into_iter()
///     .collect();
/// assert_eq!(rows, vec![(1, (0.5, 'x')), (2, (0.0, 'y')), (3, (0.0, '\0'))]);
/// ```
#[macro_export]
macro_rules! zip_longest {
    ($left:expr, $right:expr $(,)?) => {
        $crate::zip_longest::zip_longest($left, $right)
    };
    ($left:expr, $($rest:expr),+ $(,)?) => {
        $crate::zip_longest::zip_longest($left, $crate::zip_longest!($($rest),+))
    };
}
