use std::fmt;

use crate::cursor::{Bounded, Cursor};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};
use crate::wheel::{Rewind, Wheel, check_arity};

/// Composite cursor over the Cartesian product of two finite sequences
///
/// Holds the outer cursor with its last position, and the inner cursor with
/// snapshots of its first and last positions used to reset it. The inner cursor
/// may itself be a `ProductCursor`, which is how `product!` nests any number of
/// sequences. The composite is exhausted iff the outer cursor reached its last.
pub struct ProductCursor<A, B> {
    outer: A,
    outer_last: A,
    inner: B,
    inner_first: B,
    inner_last: B,
}

pub type Product<A, B> = SequenceView<ProductCursor<A, B>>;

impl<A: Cursor, B: Cursor> ProductCursor<A, B> {
    fn new(outer: A, outer_last: A, inner_first: B, inner_last: B) -> Self {
        // an empty inner sequence empties the whole product
        let outer = if inner_first.equals(&inner_last) {
            outer_last.clone()
        } else {
            outer
        };
        ProductCursor {
            outer,
            outer_last,
            inner: inner_first.clone(),
            inner_first,
            inner_last,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.outer.equals(&self.outer_last)
    }

    fn exhausted(&self) -> Self {
        ProductCursor {
            outer: self.outer_last.clone(),
            outer_last: self.outer_last.clone(),
            inner: self.inner_last.clone(),
            inner_first: self.inner_first.clone(),
            inner_last: self.inner_last.clone(),
        }
    }
}

impl<A: Clone, B: Clone> Clone for ProductCursor<A, B> {
    fn clone(&self) -> Self {
        ProductCursor {
            outer: self.outer.clone(),
            outer_last: self.outer_last.clone(),
            inner: self.inner.clone(),
            inner_first: self.inner_first.clone(),
            inner_last: self.inner_last.clone(),
        }
    }
}

impl<A: Cursor, B: Cursor> PartialEq for ProductCursor<A, B> {
    fn eq(&self, other: &Self) -> bool {
        (self.is_exhausted() && other.is_exhausted())
            || (self.outer == other.outer && self.inner == other.inner)
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for ProductCursor<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductCursor")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<A: Cursor, B: Cursor> Cursor for ProductCursor<A, B> {
    type Element = (A::Element, B::Element);

    fn value(&self) -> Result<Self::Element> {
        if self.is_exhausted() {
            return Err(IterError::read_at_end("product"));
        }
        Ok((self.outer.value()?, self.inner.value()?))
    }

    fn advance(&mut self) {
        if self.is_exhausted() {
            return;
        }
        self.inner.advance();
        if self.inner.equals(&self.inner_last) {
            self.outer.advance();
            if !self.is_exhausted() {
                self.inner = self.inner_first.clone();
            }
        }
    }
}

/// Cartesian product of two finite sequences; the second varies fastest
///
/// An empty input on either side yields an empty product. Use the
/// [`product!`](crate::product!) macro for more than two sequences.
pub fn product<A, B>(outer: A, inner: B) -> Product<A::Cursor, B::Cursor>
where
    A: Sequence,
    A::End: Bounded<A::Cursor>,
    B: Sequence,
    B::End: Bounded<B::Cursor>,
{
    let (outer_first, outer_last) = outer.span();
    let (inner_first, inner_last) = inner.span();
    let begin = ProductCursor::new(outer_first, outer_last, inner_first, inner_last);
    let end = begin.exhausted();
    SequenceView::new(begin, end)
}

/// Cartesian product of any number of finite sequences
///
/// Produces right-nested pairs in argument order, `(a, (b, c))` for three
/// sequences, with the last sequence varying fastest:
///
/// ```
/// use itercomb::product;
///
/// let a = [1, 2];
/// let b = ['x', 'y'];
/// let c = [true];
/// let triples: Vec<_> = product!(&a, &b, &c)
///     .into_iter()
///     .map(|(a, (b, c))| (*a, *b, *c))
///     .collect();
/// assert_eq!(triples[1], (1, 'y', true));
/// assert_eq!(triples.len(), 4);
/// ```
#[macro_export]
macro_rules! product {
    ($outer:expr, $inner:expr $(,)?) => {
        $crate::product::product($outer, $inner)
    };
    ($outer:expr, $($rest:expr),+ $(,)?) => {
        $crate::product::product($outer, $crate::product!($($rest),+))
    };
}

/// Cartesian product of a runtime number of same-typed finite sequences
///
/// Each element is a `Vec` holding one element per sequence, in argument order.
pub fn product_n<S>(sequences: Vec<S>) -> Result<SequenceView<Wheel<S::Cursor>>>
where
    S: Sequence,
    S::End: Bounded<S::Cursor>,
{
    check_arity("sequences", sequences.len())?;
    let (starts, lasts) = sequences.iter().map(Sequence::span).unzip();
    let begin = Wheel::new(starts, lasts, Rewind::First, false, "product");
    let end = begin.exhausted();
    Ok(SequenceView::new(begin, end))
}

/// Cartesian product of a sequence with itself `repeat` times
pub fn product_repeat<S>(sequence: S, repeat: usize) -> Result<SequenceView<Wheel<S::Cursor>>>
where
    S: Sequence,
    S::End: Bounded<S::Cursor>,
{
    check_arity("repeat", repeat)?;
    let (first, last) = sequence.span();
    let begin = Wheel::new(
        vec![first; repeat],
        vec![last; repeat],
        Rewind::First,
        false,
        "product",
    );
    let end = begin.exhausted();
    Ok(SequenceView::new(begin, end))
}
