use crate::cursor::{Cursor, Terminus};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};

/// Cursor over one sequence followed by another
///
/// Reads from `first` until it reaches `first_end`, then from `second`.
/// Collapses to `Done` once both are exhausted.
#[derive(Debug)]
pub enum ChainCursor<A, EA, B, EB> {
    Live {
        first: A,
        first_end: EA,
        second: B,
        second_end: EB,
    },
    Done,
}

pub type Chain<A, EA, B, EB> = SequenceView<ChainCursor<A, EA, B, EB>>;

impl<A, EA, B, EB> ChainCursor<A, EA, B, EB>
where
    A: Cursor,
    EA: Terminus<A>,
    B: Cursor,
    EB: Terminus<B>,
{
    fn settle(&mut self) {
        let exhausted = match self {
            ChainCursor::Live {
                first,
                first_end,
                second,
                second_end,
            } => first_end.is_reached_by(first) && second_end.is_reached_by(second),
            ChainCursor::Done => return,
        };
        if exhausted {
            *self = ChainCursor::Done;
        }
    }
}

impl<A: Clone, EA: Clone, B: Clone, EB: Clone> Clone for ChainCursor<A, EA, B, EB> {
    fn clone(&self) -> Self {
        match self {
            ChainCursor::Live {
                first,
                first_end,
                second,
                second_end,
            } => ChainCursor::Live {
                first: first.clone(),
                first_end: first_end.clone(),
                second: second.clone(),
                second_end: second_end.clone(),
            },
            ChainCursor::Done => ChainCursor::Done,
        }
    }
}

impl<A: PartialEq, EA, B: PartialEq, EB> PartialEq for ChainCursor<A, EA, B, EB> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                ChainCursor::Live {
                    first: a1,
                    second: b1,
                    ..
                },
                ChainCursor::Live {
                    first: a2,
                    second: b2,
                    ..
                },
            ) => a1 == a2 && b1 == b2,
            (ChainCursor::Done, ChainCursor::Done) => true,
            _ => false,
        }
    }
}

impl<A, EA, B, EB> Cursor for ChainCursor<A, EA, B, EB>
where
    A: Cursor,
    EA: Terminus<A>,
    B: Cursor<Element = A::Element>,
    EB: Terminus<B>,
{
    type Element = A::Element;

    fn value(&self) -> Result<Self::Element> {
        match self {
            ChainCursor::Live {
                first,
                first_end,
                second,
                ..
            } => {
                if first_end.is_reached_by(first) {
                    second.value()
                } else {
                    first.value()
                }
            }
            ChainCursor::Done => Err(IterError::read_at_end("chain")),
        }
    }

    fn advance(&mut self) {
        if let ChainCursor::Live {
            first,
            first_end,
            second,
            ..
        } = self
        {
            if first_end.is_reached_by(first) {
                second.advance();
            } else {
                first.advance();
            }
        }
        self.settle();
    }
}

/// Elements of `first`, then elements of `second`
///
/// An infinite `first` never yields to `second`. Use the
/// [`chain!`](crate::chain!) macro to join more than two sequences.
pub fn chain<A, B>(first: A, second: B) -> Chain<A::Cursor, A::End, B::Cursor, B::End>
where
    A: Sequence,
    B: Sequence,
    B::Cursor: Cursor<Element = <A::Cursor as Cursor>::Element>,
{
    let mut begin = ChainCursor::Live {
        first: first.begin(),
        first_end: first.end(),
        second: second.begin(),
        second_end: second.end(),
    };
    begin.settle();
    SequenceView::new(begin, ChainCursor::Done)
}

/// Concatenation of any number of sequences with the same element type
///
/// ```
/// use itercomb::chain;
///
/// let joined: String = chain!("ab", "", "cd").into_iter().collect();
/// assert_eq!(joined, "abcd");
/// ```
#[macro_export]
macro_rules! chain {
    ($first:expr, $second:expr $(,)?) => {
        $crate::chain::chain($first, $second)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::chain::chain($first, $crate::chain!($($rest),+))
    };
}
