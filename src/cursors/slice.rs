use std::fmt;

use crate::cursor::Cursor;
use crate::error::{IterError, Result};

/// Cursor over a borrowed slice
///
/// Mirrors the two states a position in a slice can be in: pointing at an
/// element, or one past the last element.
pub enum SliceCursor<'a, T> {
    Valid { data: &'a [T], position: usize },
    End { data: &'a [T] },
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        if data.is_empty() {
            return SliceCursor::End { data };
        }
        SliceCursor::Valid { data, position: 0 }
    }

    pub fn end(data: &'a [T]) -> Self {
        SliceCursor::End { data }
    }

    /// Index of the element under the cursor; the slice length at the end
    pub fn position(&self) -> usize {
        match self {
            SliceCursor::Valid { position, .. } => *position,
            SliceCursor::End { data } => data.len(),
        }
    }

    pub fn source(&self) -> &'a [T] {
        match self {
            SliceCursor::Valid { data, .. } => data,
            SliceCursor::End { data } => data,
        }
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source().as_ptr(), other.source().as_ptr())
            && self.source().len() == other.source().len()
            && self.position() == other.position()
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceCursor::Valid { data, position } => f
                .debug_struct("Valid")
                .field("len", &data.len())
                .field("position", position)
                .finish(),
            SliceCursor::End { data } => f.debug_struct("End").field("len", &data.len()).finish(),
        }
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Element = &'a T;

    fn value(&self) -> Result<Self::Element> {
        match self {
            SliceCursor::Valid { data, position } => Ok(&data[*position]),
            SliceCursor::End { .. } => Err(IterError::read_at_end("slice")),
        }
    }

    fn advance(&mut self) {
        if let SliceCursor::Valid { data, position } = *self {
            *self = if position + 1 >= data.len() {
                SliceCursor::End { data }
            } else {
                SliceCursor::Valid {
                    data,
                    position: position + 1,
                }
            };
        }
    }
}
