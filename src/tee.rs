use crate::sequence::{Sequence, SequenceView};

/// `N` independent views over the same source
///
/// Each view has its own cursors, so walking one leaves the others where they
/// are. The count is usually inferred from the binding:
///
/// ```
/// use itercomb::tee;
///
/// let data = [1, 2, 3];
/// let [a, b] = tee(&data);
/// assert_eq!(a.iter().count(), 3);
/// assert_eq!(b.iter().count(), 3);
/// ```
pub fn tee<S, const N: usize>(sequence: S) -> [SequenceView<S::Cursor, S::End>; N]
where
    S: Sequence,
{
    std::array::from_fn(|_| sequence.view())
}
