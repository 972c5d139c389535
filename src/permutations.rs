use crate::cursor::{Bounded, Cursor};
use crate::error::Result;
use crate::sequence::{Sequence, SequenceView};
use crate::wheel::{Rewind, Wheel, check_arity, measure};

pub type Permutations<C> = SequenceView<Wheel<C>>;

/// Successive `size`-length arrangements of a finite sequence
///
/// Elements are distinguished by position, not value: two equal elements at
/// different positions still form distinct arrangements. Arrangements come out
/// in lexicographic order of source position. When `size` exceeds the source
/// length there is no arrangement and the view is empty.
pub fn permutations<S>(sequence: S, size: usize) -> Result<Permutations<S::Cursor>>
where
    S: Sequence,
    S::End: Bounded<S::Cursor>,
{
    check_arity("size", size)?;
    let (begin, last) = sequence.span();
    let length = measure(&begin, &last);
    if size > length {
        tracing::debug!(size, length, "permutations larger than their source");
    }
    Ok(build(begin, last, size, length))
}

/// Every full-length arrangement of a finite sequence
///
/// An empty source produces an empty view.
pub fn permutations_full<S>(sequence: S) -> Permutations<S::Cursor>
where
    S: Sequence,
    S::End: Bounded<S::Cursor>,
{
    let (begin, last) = sequence.span();
    let length = measure(&begin, &last);
    build(begin, last, length, length)
}

fn build<C>(begin: C, last: C, size: usize, length: usize) -> Permutations<C>
where
    C: Cursor,
{
    tracing::trace!(size, length, "building permutations");
    // no arrangement can avoid repeating a position, start on the last cursors
    let starts = if size > length {
        vec![last.clone(); size]
    } else {
        vec![begin; size]
    };
    let wheel = Wheel::new(starts, vec![last; size], Rewind::First, true, "permutations");
    let end = wheel.exhausted();
    SequenceView::new(wheel, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IterError;
    use crate::sequence::iterable;
    use crate::testing::init_tracing;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    fn collect(view: Permutations<crate::cursors::SliceCursor<'_, i32>>) -> Vec<Vec<i32>> {
        view.into_iter()
            .map(|p| p.into_iter().copied().collect())
            .collect()
    }

    #[test]
    fn test_five_arrange_one() {
        let nums = [1, 2, 3, 4, 5];
        let singles = collect(permutations(&nums, 1).unwrap());
        assert_eq!(singles, vec![vec![1], vec![2], vec![3], vec![4], vec![5]]);
    }

    #[test]
    fn test_five_arrange_three_matches_itertools() {
        init_tracing();
        let nums = [1, 2, 3, 4, 5];
        let ours = collect(permutations(&nums, 3).unwrap());
        let oracle: Vec<Vec<i32>> = nums.iter().copied().permutations(3).collect();

        assert_eq!(ours.len(), 60);
        assert_eq!(ours, oracle);
    }

    #[test]
    fn test_positions_not_values_are_unique() {
        let nums = [7, 7, 7];
        let ours = collect(permutations(&nums, 2).unwrap());
        assert_eq!(ours.len(), 6);
        assert!(ours.iter().all(|p| p == &vec![7, 7]));
    }

    #[test]
    fn test_size_equal_to_length() {
        let nums = [1, 2, 3];
        let ours = collect(permutations(&nums, 3).unwrap());
        assert_eq!(
            ours,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_size_larger_than_length_is_empty() {
        init_tracing();
        let nums = [1, 2, 3];
        for size in 4..7 {
            assert!(permutations(&nums, size).unwrap().is_empty());
        }
        let empty: [i32; 0] = [];
        assert!(permutations(&empty, 1).unwrap().is_empty());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let nums = [1, 2];
        assert!(matches!(
            permutations(&nums, 0),
            Err(IterError::InvalidArgument { name: "size", .. })
        ));
    }

    #[test]
    fn test_full_permutations() {
        let full: Vec<String> = permutations_full("abc")
            .into_iter()
            .map(|p| p.into_iter().collect())
            .collect();
        assert_eq!(full, vec!["abc", "acb", "bac", "bca", "cab", "cba"]);
        assert!(permutations_full("").is_empty());
    }

    #[test]
    fn test_counts_follow_falling_factorial() {
        for length in 1..6usize {
            for size in 1..=length {
                let expected: usize = (length - size + 1..=length).product();
                let view = permutations(iterable(0..length), size).unwrap();
                assert_eq!(view.into_iter().count(), expected, "P({length}, {size})");
            }
        }
    }
}
