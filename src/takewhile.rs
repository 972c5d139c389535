use crate::cursor::{Cursor, Terminus};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};

/// Cursor over the leading run of elements satisfying a predicate
///
/// Collapses to `Stopped` at the first rejected element or at the end of the
/// source, whichever comes first. `Stopped` is also the view's end cursor.
pub enum TakeWhileCursor<C, E, F> {
    Taking { inner: C, end: E, predicate: F },
    Stopped,
}

pub type TakeWhile<C, E, F> = SequenceView<TakeWhileCursor<C, E, F>>;

impl<C, E, F> TakeWhileCursor<C, E, F>
where
    C: Cursor,
    E: Terminus<C>,
    F: Fn(&C::Element) -> bool,
{
    fn settle(&mut self) {
        let keep = match self {
            TakeWhileCursor::Taking {
                inner,
                end,
                predicate,
            } => {
                !end.is_reached_by(inner) && inner.value().is_ok_and(|value| predicate(&value))
            }
            TakeWhileCursor::Stopped => return,
        };
        if !keep {
            *self = TakeWhileCursor::Stopped;
        }
    }
}

impl<C: Clone, E: Clone, F: Clone> Clone for TakeWhileCursor<C, E, F> {
    fn clone(&self) -> Self {
        match self {
            TakeWhileCursor::Taking {
                inner,
                end,
                predicate,
            } => TakeWhileCursor::Taking {
                inner: inner.clone(),
                end: end.clone(),
                predicate: predicate.clone(),
            },
            TakeWhileCursor::Stopped => TakeWhileCursor::Stopped,
        }
    }
}

impl<C: PartialEq, E, F> PartialEq for TakeWhileCursor<C, E, F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TakeWhileCursor::Taking { inner: a, .. }, TakeWhileCursor::Taking { inner: b, .. }) => {
                a == b
            }
            (TakeWhileCursor::Stopped, TakeWhileCursor::Stopped) => true,
            _ => false,
        }
    }
}

impl<C, E, F> Cursor for TakeWhileCursor<C, E, F>
where
    C: Cursor,
    E: Terminus<C>,
    F: Fn(&C::Element) -> bool + Clone,
{
    type Element = C::Element;

    fn value(&self) -> Result<Self::Element> {
        match self {
            TakeWhileCursor::Taking { inner, .. } => inner.value(),
            TakeWhileCursor::Stopped => Err(IterError::read_at_end("takewhile")),
        }
    }

    fn advance(&mut self) {
        if let TakeWhileCursor::Taking { inner, .. } = self {
            inner.advance();
        }
        self.settle();
    }
}

/// Elements of `sequence` up to, not including, the first one failing `predicate`
pub fn takewhile<S, F>(sequence: S, predicate: F) -> TakeWhile<S::Cursor, S::End, F>
where
    S: Sequence,
    F: Fn(&<S::Cursor as Cursor>::Element) -> bool + Clone,
{
    let mut begin = TakeWhileCursor::Taking {
        inner: sequence.begin(),
        end: sequence.end(),
        predicate,
    };
    begin.settle();
    SequenceView::new(begin, TakeWhileCursor::Stopped)
}

pub trait TakeWhileExt: Sequence + Sized {
    fn takewhile<F>(self, predicate: F) -> TakeWhile<Self::Cursor, Self::End, F>
    where
        F: Fn(&<Self::Cursor as Cursor>::Element) -> bool + Clone,
    {
        takewhile(self, predicate)
    }
}

impl<S: Sequence> TakeWhileExt for S {}
