use std::collections::VecDeque;

use crate::cursor::{Bounded, Cursor};
use crate::error::Result;
use crate::sequence::{Sequence, SequenceView};
use crate::wheel::{Rewind, Wheel, check_arity};

pub type Combinations<C> = SequenceView<Wheel<C>>;

/// Strictly increasing `size`-element selections from a finite sequence
///
/// Selections come out in lexicographic order of source position. A source
/// shorter than `size` has no selection and produces an empty view.
pub fn combinations<S>(sequence: S, size: usize) -> Result<Combinations<S::Cursor>>
where
    S: Sequence,
    S::End: Bounded<S::Cursor>,
{
    check_arity("size", size)?;
    let (begin, last) = sequence.span();
    let (starts, lasts) = bounds(begin, &last, size);
    let wheel = Wheel::new(starts, lasts, Rewind::PastOuter, false, "combinations");
    let end = wheel.exhausted();
    Ok(SequenceView::new(wheel, end))
}

/// Start and last cursor of every level, in one pass over the source
///
/// Level `j` ranges over positions `j..=length - size + j`. Only the first
/// `size` and the trailing `size` positions are kept during the pass. When the
/// source is too short every level starts on its own last cursor.
fn bounds<C: Cursor>(begin: C, last: &C, size: usize) -> (Vec<C>, Vec<C>) {
    let mut starts = Vec::with_capacity(size);
    let mut trailing = VecDeque::with_capacity(size + 1);
    let mut length = 0;
    let mut cursor = begin.clone();
    loop {
        if starts.len() < size {
            starts.push(cursor.clone());
        }
        trailing.push_back(cursor.clone());
        if trailing.len() > size {
            trailing.pop_front();
        }
        if cursor.equals(last) {
            break;
        }
        cursor.advance();
        length += 1;
    }
    tracing::trace!(size, length, "measured combinations source");

    if length < size {
        tracing::debug!(size, length, "combinations larger than their source");
        return (vec![begin.clone(); size], vec![begin; size]);
    }
    (starts, trailing.into())
}
