use std::fmt;

use crate::cursor::Cursor;
use crate::error::{IterError, Result};

/// Cursor over any cloneable forward iterator
///
/// The element under the cursor is buffered, so reading it repeatedly does not
/// re-drive the iterator. Positions are counted from the start of the
/// iteration, which is what makes two cursors over the same source comparable.
pub enum IterCursor<I: Iterator> {
    Valid {
        rest: I,
        current: I::Item,
        position: usize,
    },
    End,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(mut iter: I) -> Self {
        match iter.next() {
            Some(current) => IterCursor::Valid {
                rest: iter,
                current,
                position: 0,
            },
            None => IterCursor::End,
        }
    }

    /// Index of the element under the cursor, `None` at the end
    pub fn position(&self) -> Option<usize> {
        match self {
            IterCursor::Valid { position, .. } => Some(*position),
            IterCursor::End => None,
        }
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        match self {
            IterCursor::Valid {
                rest,
                current,
                position,
            } => IterCursor::Valid {
                rest: rest.clone(),
                current: current.clone(),
                position: *position,
            },
            IterCursor::End => IterCursor::End,
        }
    }
}

impl<I: Iterator> PartialEq for IterCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
    }
}

impl<I: Iterator> fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(position) => f.debug_struct("Valid").field("position", &position).finish(),
            None => f.write_str("End"),
        }
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Element = I::Item;

    fn value(&self) -> Result<Self::Element> {
        match self {
            IterCursor::Valid { current, .. } => Ok(current.clone()),
            IterCursor::End => Err(IterError::read_at_end("iterator")),
        }
    }

    fn advance(&mut self) {
        let IterCursor::Valid {
            rest,
            current,
            position,
        } = self
        else {
            return;
        };
        match rest.next() {
            Some(next) => {
                *current = next;
                *position += 1;
            }
            None => *self = IterCursor::End,
        }
    }
}
