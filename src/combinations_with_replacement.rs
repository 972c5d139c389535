use crate::cursor::Bounded;
use crate::error::Result;
use crate::sequence::{Sequence, SequenceView};
use crate::wheel::{Rewind, Wheel, check_arity};

pub type CombinationsWithReplacement<C> = SequenceView<Wheel<C>>;

/// Non-decreasing `size`-element selections from a finite sequence
///
/// Any source position may be picked repeatedly, so a single element still
/// yields one selection of every size. Only an empty source produces an empty
/// view. A source of length `L` yields `C(L + size - 1, size)` selections.
pub fn combinations_with_replacement<S>(
    sequence: S,
    size: usize,
) -> Result<CombinationsWithReplacement<S::Cursor>>
where
    S: Sequence,
    S::End: Bounded<S::Cursor>,
{
    check_arity("size", size)?;
    let (begin, last) = sequence.span();
    if begin == last {
        tracing::debug!(size, "combinations with replacement over an empty source");
    }
    let wheel = Wheel::new(
        vec![begin; size],
        vec![last; size],
        Rewind::AtOuter,
        false,
        "combinations_with_replacement",
    );
    let end = wheel.exhausted();
    Ok(SequenceView::new(wheel, end))
}
