use crate::error::Result;

/// Generic cursor trait for sequence adaptors
///
/// A cursor represents a position in a sequence of elements that can be read,
/// advanced and compared against another cursor derived from the same sequence.
/// Every adaptor in this crate is a cursor wrapping one or more upstream cursors,
/// which is what lets adaptors nest into arbitrarily deep lazy pipelines.
///
/// Cursors are only comparable when they come from the same underlying sequence
/// (or, for composite cursors, from structurally matching composite state).
pub trait Cursor: Clone + PartialEq {
    /// The type of elements this cursor produces
    type Element;

    /// Get the element at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the sequence.
    /// Composite cursors build their element afresh on every call.
    fn value(&self) -> Result<Self::Element>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, the cursor stays positioned at the end
    fn advance(&mut self);

    /// Advance the cursor, consuming it and returning the moved cursor
    fn next(mut self) -> Self {
        self.advance();
        self
    }

    /// Check whether two cursors point at the same position
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

/// End marker of a sequence: decides whether a cursor has run off the end
///
/// A finite sequence ends at a cursor, so every `Cursor` is a terminus for
/// itself. Infinite sequences end at [`Unbounded`], which is never reached.
pub trait Terminus<C>: Clone {
    fn is_reached_by(&self, cursor: &C) -> bool;
}

impl<C: Cursor> Terminus<C> for C {
    fn is_reached_by(&self, cursor: &C) -> bool {
        cursor.equals(self)
    }
}

/// End marker of an infinite sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl<C> Terminus<C> for Unbounded {
    fn is_reached_by(&self, _cursor: &C) -> bool {
        false
    }
}

/// Cursors that wrap exactly one upstream cursor and end when it ends
pub trait Wrapping {
    type Inner;

    fn inner(&self) -> &Self::Inner;
}

/// End marker that delegates to the end of the wrapped upstream sequence
///
/// Adaptors such as filter or starmap stop precisely when their source stops,
/// so they carry the source's own terminus: finite sources stay finite and
/// infinite sources stay infinite.
#[derive(Debug, Clone, Copy)]
pub struct Upstream<E>(pub E);

impl<C, E> Terminus<C> for Upstream<E>
where
    C: Wrapping,
    E: Terminus<C::Inner>,
{
    fn is_reached_by(&self, cursor: &C) -> bool {
        self.0.is_reached_by(cursor.inner())
    }
}

/// End markers of finite sequences, which can be turned into a last cursor
///
/// Adaptors that rewind or measure their source (the combinatorial family and
/// cycle) need a cursor that sits on the end. A cursor is already one; an
/// `Upstream` marker over a finite source is found by walking forward from
/// the given cursor. `Unbounded` has no such cursor and does not implement
/// this trait.
pub trait Bounded<C>: Terminus<C> {
    fn locate(&self, from: &C) -> C;
}

impl<C: Cursor> Bounded<C> for C {
    fn locate(&self, _from: &C) -> C {
        self.clone()
    }
}

impl<C, E> Bounded<C> for Upstream<E>
where
    C: Cursor + Wrapping,
    E: Bounded<C::Inner>,
{
    fn locate(&self, from: &C) -> C {
        let mut cursor = from.clone();
        while !self.is_reached_by(&cursor) {
            cursor.advance();
        }
        cursor
    }
}
