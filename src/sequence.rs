use std::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};

use crate::cursor::{Bounded, Cursor, Terminus};
use crate::cursors::{IterCursor, SliceCursor};

/// A backing sequence that can hand out a start cursor and an end marker
///
/// Every adaptor consumes `Sequence`s and returns a [`SequenceView`], which is
/// itself a `Sequence`, so adaptors compose freely.
pub trait Sequence {
    type Cursor: Cursor;
    type End: Terminus<Self::Cursor>;

    fn begin(&self) -> Self::Cursor;

    fn end(&self) -> Self::End;

    /// Capture this sequence as a restartable view
    fn view(&self) -> SequenceView<Self::Cursor, Self::End> {
        SequenceView::new(self.begin(), self.end())
    }

    /// The begin cursor together with a cursor sitting on the end
    fn span(&self) -> (Self::Cursor, Self::Cursor)
    where
        Self::End: Bounded<Self::Cursor>,
    {
        let begin = self.begin();
        let last = self.end().locate(&begin);
        (begin, last)
    }
}

/// A (begin cursor, end marker) pair
///
/// Views are restartable: `begin()` and `end()` always hand out the same pair,
/// and iterating a view by reference leaves it untouched.
#[derive(Debug, Clone)]
pub struct SequenceView<C, E = C> {
    begin: C,
    end: E,
}

impl<C, E> SequenceView<C, E>
where
    C: Cursor,
    E: Terminus<C>,
{
    pub fn new(begin: C, end: E) -> Self {
        SequenceView { begin, end }
    }

    pub fn begin(&self) -> C {
        self.begin.clone()
    }

    pub fn end(&self) -> E {
        self.end.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.end.is_reached_by(&self.begin)
    }

    pub fn iter(&self) -> Iter<C, E> {
        Iter {
            cursor: self.begin.clone(),
            end: self.end.clone(),
        }
    }
}

impl<C, E> Sequence for SequenceView<C, E>
where
    C: Cursor,
    E: Terminus<C>,
{
    type Cursor = C;
    type End = E;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> E {
        self.end.clone()
    }
}

impl<C, E> Sequence for &SequenceView<C, E>
where
    C: Cursor,
    E: Terminus<C>,
{
    type Cursor = C;
    type End = E;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> E {
        self.end.clone()
    }
}

/// The generic driving loop: read, advance, until the end marker is reached
#[derive(Debug, Clone)]
pub struct Iter<C, E> {
    cursor: C,
    end: E,
}

impl<C, E> Iterator for Iter<C, E>
where
    C: Cursor,
    E: Terminus<C>,
{
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end.is_reached_by(&self.cursor) {
            return None;
        }
        match self.cursor.value() {
            Ok(value) => {
                self.cursor.advance();
                Some(value)
            }
            Err(error) => {
                tracing::warn!(%error, "cursor failed before reaching its end");
                None
            }
        }
    }
}

impl<C, E> IntoIterator for SequenceView<C, E>
where
    C: Cursor,
    E: Terminus<C>,
{
    type Item = C::Element;
    type IntoIter = Iter<C, E>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            cursor: self.begin,
            end: self.end,
        }
    }
}

impl<C, E> IntoIterator for &SequenceView<C, E>
where
    C: Cursor,
    E: Terminus<C>,
{
    type Item = C::Element;
    type IntoIter = Iter<C, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new(*self)
    }

    fn end(&self) -> Self::End {
        SliceCursor::end(*self)
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new((*self).as_slice())
    }

    fn end(&self) -> Self::End {
        SliceCursor::end((*self).as_slice())
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new((*self).as_slice())
    }

    fn end(&self) -> Self::End {
        SliceCursor::end((*self).as_slice())
    }
}

/// Implements `Sequence` for borrowed containers through their cloneable iterator
macro_rules! iter_sequence {
    ($([$($generics:tt)*] $source:ty => $iter:ty, |$this:ident| $make:expr;)*) => {
        $(
            impl<$($generics)*> Sequence for $source {
                type Cursor = IterCursor<$iter>;
                type End = IterCursor<$iter>;

                fn begin(&self) -> Self::Cursor {
                    let $this = *self;
                    IterCursor::new($make)
                }

                fn end(&self) -> Self::End {
                    IterCursor::End
                }
            }
        )*
    };
}

iter_sequence! {
    ['a] &'a str => std::str::Chars<'a>, |this| this.chars();
    ['a] &'a String => std::str::Chars<'a>, |this| this.chars();
    ['a, T] &'a VecDeque<T> => std::collections::vec_deque::Iter<'a, T>, |this| this.iter();
    ['a, T] &'a LinkedList<T> => std::collections::linked_list::Iter<'a, T>, |this| this.iter();
    ['a, T] &'a BTreeSet<T> => std::collections::btree_set::Iter<'a, T>, |this| this.iter();
    ['a, K, V] &'a BTreeMap<K, V> => std::collections::btree_map::Iter<'a, K, V>, |this| this.iter();
}

/// A backing sequence built from any cloneable iterator
///
/// Useful for ranges and other iterator-shaped sources: `iterable(0..4)`.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

pub fn iterable<I>(iter: I) -> IterSource<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    IterSource { iter }
}

impl<I> Sequence for IterSource<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor = IterCursor<I>;
    type End = IterCursor<I>;

    fn begin(&self) -> Self::Cursor {
        IterCursor::new(self.iter.clone())
    }

    fn end(&self) -> Self::End {
        IterCursor::End
    }
}

impl<I> Sequence for &IterSource<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor = IterCursor<I>;
    type End = IterCursor<I>;

    fn begin(&self) -> Self::Cursor {
        IterCursor::new(self.iter.clone())
    }

    fn end(&self) -> Self::End {
        IterCursor::End
    }
}
