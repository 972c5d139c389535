use std::ops::Add;

use crate::cursor::{Cursor, Terminus, Upstream, Wrapping};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};

/// Cursor emitting the running fold of its upstream elements
///
/// `state` holds the fold up to and including the element under `inner`.
pub struct AccumulateCursor<C, E, A, F> {
    inner: C,
    end: E,
    state: A,
    fold: F,
}

pub type Accumulate<C, E, A, F> = SequenceView<AccumulateCursor<C, E, A, F>, Upstream<E>>;

impl<C, E, A, F> AccumulateCursor<C, E, A, F>
where
    C: Cursor,
    E: Terminus<C>,
    A: Clone,
    F: Fn(A, C::Element) -> A,
{
    fn fold_current(&mut self) {
        if self.end.is_reached_by(&self.inner) {
            return;
        }
        if let Ok(value) = self.inner.value() {
            self.state = (self.fold)(self.state.clone(), value);
        }
    }
}

impl<C: Clone, E: Clone, A: Clone, F: Clone> Clone for AccumulateCursor<C, E, A, F> {
    fn clone(&self) -> Self {
        AccumulateCursor {
            inner: self.inner.clone(),
            end: self.end.clone(),
            state: self.state.clone(),
            fold: self.fold.clone(),
        }
    }
}

impl<C: PartialEq, E, A, F> PartialEq for AccumulateCursor<C, E, A, F> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C, E, A, F> Wrapping for AccumulateCursor<C, E, A, F> {
    type Inner = C;

    fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C, E, A, F> Cursor for AccumulateCursor<C, E, A, F>
where
    C: Cursor,
    E: Terminus<C>,
    A: Clone,
    F: Fn(A, C::Element) -> A + Clone,
{
    type Element = A;

    fn value(&self) -> Result<A> {
        if self.end.is_reached_by(&self.inner) {
            return Err(IterError::read_at_end("accumulate"));
        }
        Ok(self.state.clone())
    }

    fn advance(&mut self) {
        if self.end.is_reached_by(&self.inner) {
            return;
        }
        self.inner.advance();
        self.fold_current();
    }
}

/// Running fold of `sequence`
///
/// The first value is `fold(init, first)`, each later value folds the next
/// element into the previous value. An empty source yields nothing.
pub fn accumulate<S, A, F>(sequence: S, init: A, fold: F) -> Accumulate<S::Cursor, S::End, A, F>
where
    S: Sequence,
    A: Clone,
    F: Fn(A, <S::Cursor as Cursor>::Element) -> A + Clone,
{
    let end = sequence.end();
    let mut begin = AccumulateCursor {
        inner: sequence.begin(),
        end: end.clone(),
        state: init,
        fold,
    };
    begin.fold_current();
    SequenceView::new(begin, Upstream(end))
}

fn add<A: Add<T, Output = A>, T>(total: A, element: T) -> A {
    total + element
}

/// Running sums of `sequence` starting from `init`
#[allow(clippy::type_complexity)]
pub fn sum_accumulate<S, A>(
    sequence: S,
    init: A,
) -> Accumulate<S::Cursor, S::End, A, fn(A, <S::Cursor as Cursor>::Element) -> A>
where
    S: Sequence,
    A: Add<<S::Cursor as Cursor>::Element, Output = A> + Clone,
{
    let fold: fn(A, <S::Cursor as Cursor>::Element) -> A = add;
    accumulate(sequence, init, fold)
}

pub trait AccumulateExt: Sequence + Sized {
    fn accumulate<A, F>(self, init: A, fold: F) -> Accumulate<Self::Cursor, Self::End, A, F>
    where
        A: Clone,
        F: Fn(A, <Self::Cursor as Cursor>::Element) -> A + Clone,
    {
        accumulate(self, init, fold)
    }
}

impl<S: Sequence> AccumulateExt for S {}
