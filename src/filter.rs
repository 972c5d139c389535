use crate::cursor::{Cursor, Terminus, Upstream, Wrapping};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};
use crate::truthy::Truthy;

/// Cursor that skips upstream elements whose predicate result differs from `keep`
///
/// The predicate may be evaluated more than once for the same element (once
/// while positioning at construction, again after later advances), so it should
/// be free of observable side effects.
pub struct FilterCursor<C, E, F> {
    inner: C,
    end: E,
    predicate: F,
    keep: bool,
}

pub type Filter<C, E, F> = SequenceView<FilterCursor<C, E, F>, Upstream<E>>;

impl<C, E, F> FilterCursor<C, E, F>
where
    C: Cursor,
    E: Terminus<C>,
    F: Fn(&C::Element) -> bool,
{
    fn new(inner: C, end: E, predicate: F, keep: bool) -> Self {
        let mut cursor = FilterCursor {
            inner,
            end,
            predicate,
            keep,
        };
        cursor.skip_rejected();
        cursor
    }

    fn skip_rejected(&mut self) {
        while !self.end.is_reached_by(&self.inner) {
            match self.inner.value() {
                Ok(value) if (self.predicate)(&value) != self.keep => self.inner.advance(),
                _ => break,
            }
        }
    }
}

impl<C: Clone, E: Clone, F: Clone> Clone for FilterCursor<C, E, F> {
    fn clone(&self) -> Self {
        FilterCursor {
            inner: self.inner.clone(),
            end: self.end.clone(),
            predicate: self.predicate.clone(),
            keep: self.keep,
        }
    }
}

impl<C: PartialEq, E, F> PartialEq for FilterCursor<C, E, F> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C, E, F> Wrapping for FilterCursor<C, E, F> {
    type Inner = C;

    fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C, E, F> Cursor for FilterCursor<C, E, F>
where
    C: Cursor,
    E: Terminus<C>,
    F: Fn(&C::Element) -> bool + Clone,
{
    type Element = C::Element;

    fn value(&self) -> Result<Self::Element> {
        if self.end.is_reached_by(&self.inner) {
            return Err(IterError::read_at_end("filter"));
        }
        self.inner.value()
    }

    fn advance(&mut self) {
        if self.end.is_reached_by(&self.inner) {
            return;
        }
        self.inner.advance();
        self.skip_rejected();
    }
}

fn build<S, F>(sequence: S, predicate: F, keep: bool) -> Filter<S::Cursor, S::End, F>
where
    S: Sequence,
    F: Fn(&<S::Cursor as Cursor>::Element) -> bool + Clone,
{
    let end = sequence.end();
    let begin = FilterCursor::new(sequence.begin(), end.clone(), predicate, keep);
    SequenceView::new(begin, Upstream(end))
}

fn element_is_truthy<T: Truthy>(element: &T) -> bool {
    element.is_truthy()
}

/// Elements for which `predicate` holds
pub fn filter<S, F>(sequence: S, predicate: F) -> Filter<S::Cursor, S::End, F>
where
    S: Sequence,
    F: Fn(&<S::Cursor as Cursor>::Element) -> bool + Clone,
{
    build(sequence, predicate, true)
}

/// Elements for which `predicate` does not hold
pub fn filterfalse<S, F>(sequence: S, predicate: F) -> Filter<S::Cursor, S::End, F>
where
    S: Sequence,
    F: Fn(&<S::Cursor as Cursor>::Element) -> bool + Clone,
{
    build(sequence, predicate, false)
}

/// Elements that are themselves truthy
#[allow(clippy::type_complexity)]
pub fn filter_truthy<S>(
    sequence: S,
) -> Filter<S::Cursor, S::End, fn(&<S::Cursor as Cursor>::Element) -> bool>
where
    S: Sequence,
    <S::Cursor as Cursor>::Element: Truthy,
{
    let predicate: fn(&<S::Cursor as Cursor>::Element) -> bool = element_is_truthy;
    build(sequence, predicate, true)
}

/// Elements that are themselves falsy
#[allow(clippy::type_complexity)]
pub fn filterfalse_truthy<S>(
    sequence: S,
) -> Filter<S::Cursor, S::End, fn(&<S::Cursor as Cursor>::Element) -> bool>
where
    S: Sequence,
    <S::Cursor as Cursor>::Element: Truthy,
{
    let predicate: fn(&<S::Cursor as Cursor>::Element) -> bool = element_is_truthy;
    build(sequence, predicate, false)
}

/// Extension trait to add filtering methods to all sequences
pub trait FilterExt: Sequence + Sized {
    fn filter<F>(self, predicate: F) -> Filter<Self::Cursor, Self::End, F>
    where
        F: Fn(&<Self::Cursor as Cursor>::Element) -> bool + Clone,
    {
        filter(self, predicate)
    }

    fn filterfalse<F>(self, predicate: F) -> Filter<Self::Cursor, Self::End, F>
    where
        F: Fn(&<Self::Cursor as Cursor>::Element) -> bool + Clone,
    {
        filterfalse(self, predicate)
    }
}

impl<S: Sequence> FilterExt for S {}
