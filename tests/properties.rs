use itercomb::{
    Cursor, IterError, Sequence, accumulate, combinations, combinations_with_replacement,
    compress, groupby, islice, iterable, permutations, permutations_full, product, sum_accumulate, zip,
    zip_longest,
};
use itertools::Itertools;
use pretty_assertions::assert_eq;

fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

fn falling_factorial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (n - k + 1..=n).product()
}

#[test]
fn test_combinations_count_order_and_increase() {
    for length in 0..7usize {
        for size in 1..7usize {
            let picks: Vec<Vec<usize>> = combinations(iterable(0..length), size)
                .unwrap()
                .into_iter()
                .collect();
            assert_eq!(picks.len(), binomial(length, size), "C({length}, {size})");
            assert!(picks.iter().all(|p| p.windows(2).all(|w| w[0] < w[1])));
            assert!(picks.windows(2).all(|w| w[0] < w[1]), "lexicographic order");
        }
    }
}

#[test]
fn test_combinations_with_replacement_count_and_order() {
    for length in 1..6usize {
        for size in 1..6usize {
            let picks: Vec<Vec<usize>> = combinations_with_replacement(iterable(0..length), size)
                .unwrap()
                .into_iter()
                .collect();
            assert_eq!(picks.len(), binomial(length + size - 1, size));
            assert!(picks.iter().all(|p| p.windows(2).all(|w| w[0] <= w[1])));
            assert!(picks.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_permutations_count_distinct_positions_and_order() {
    for length in 0..6usize {
        for size in 1..7usize {
            let arrangements: Vec<Vec<usize>> = permutations(iterable(0..length), size)
                .unwrap()
                .into_iter()
                .collect();
            assert_eq!(arrangements.len(), falling_factorial(length, size));
            assert!(arrangements.iter().all(|a| a.iter().all_unique()));
            assert!(arrangements.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_permutations_full_of_eight() {
    let data: Vec<u8> = (0..8).collect();
    let view = permutations_full(&data);
    let mut total = 0;
    for arrangement in &view {
        assert!(arrangement.iter().all_unique());
        total += 1;
    }
    assert_eq!(total, falling_factorial(8, 8));
}

#[test]
fn test_product_count_and_last_varies_fastest() {
    let a = [1, 2];
    let b = ['p', 'q', 'r'];
    let c = vec![true, false];
    let triples: Vec<_> = itercomb::product!(&a, &b, &c)
        .into_iter()
        .map(|(x, (y, z))| (*x, *y, *z))
        .collect();
    let oracle: Vec<_> = a
        .iter()
        .cartesian_product(b.iter())
        .cartesian_product(c.iter())
        .map(|((x, y), z)| (*x, *y, *z))
        .collect();

    assert_eq!(triples.len(), 2 * 3 * 2);
    assert_eq!(triples, oracle);
    assert_eq!(product(&a, &b).into_iter().count(), 6);
}

#[test]
fn test_zip_lengths() {
    for left in 0..5usize {
        for right in 0..5usize {
            let shortest = zip(iterable(0..left), iterable(0..right));
            let longest = zip_longest(iterable(0..left), iterable(0..right));
            assert_eq!(shortest.into_iter().count(), left.min(right));

            let padded: Vec<(usize, usize)> = longest.into_iter().collect();
            assert_eq!(padded.len(), left.max(right));
            for (index, (l, r)) in padded.into_iter().enumerate() {
                assert_eq!(l, if index < left { index } else { 0 });
                assert_eq!(r, if index < right { index } else { 0 });
            }
        }
    }
}

#[test]
fn test_accumulate_running_sums() {
    let data = [1, 2, 3, 4, 5];
    let sums: Vec<i32> = sum_accumulate(&data, 0).into_iter().collect();
    assert_eq!(sums, vec![1, 3, 6, 10, 15]);

    let empty: [i32; 0] = [];
    assert!(accumulate(&empty, 0, |a, b| a + b).is_empty());

    let one = [1];
    let sums: Vec<i32> = accumulate(&one, 0, |a, b| a + b).into_iter().collect();
    assert_eq!(sums, vec![1]);
}

#[test]
fn test_compress_selects_and_truncates() {
    let data = [1, 2, 3, 4];
    let kept: Vec<_> = compress(&data, &[false, true, false, true])
        .into_iter()
        .copied()
        .collect();
    assert_eq!(kept, vec![2, 4]);

    let kept: Vec<_> = compress(&data, &[true, true]).into_iter().copied().collect();
    assert_eq!(kept, vec![1, 2]);
    let kept: Vec<_> = compress(&data[..1], &[true, true, true])
        .into_iter()
        .copied()
        .collect();
    assert_eq!(kept, vec![1]);
}

#[test]
fn test_groupby_makes_five_groups() {
    let data = [1, 2, 2, 3, 3, 3, 2, 2, 1];
    let groups: Vec<(i32, Vec<i32>)> = groupby(&data)
        .into_iter()
        .map(|(key, run)| (*key, run.into_iter().copied().collect()))
        .collect();
    assert_eq!(groups.len(), 5);
    assert_eq!(groups[2], (3, vec![3, 3, 3]));
    assert_eq!(groups[3], (2, vec![2, 2]));
}

#[test]
fn test_islice_examples() {
    let every_third: String = islice("ABCDEFG", 0, Some(7), 3)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(every_third, "ADG");

    assert!(islice("ABCDEFG", 5, Some(3), 1).unwrap().is_empty());
    assert!(matches!(
        islice("ABCDEFG", 0, Some(7), 0),
        Err(IterError::InvalidArgument { name: "step", .. })
    ));
}

#[test]
fn test_begin_and_end_are_idempotent() {
    let data = vec![3, 1, 4, 1, 5];
    let combos = combinations(&data, 2).unwrap();
    assert_eq!(combos.begin(), combos.begin());
    assert_eq!(combos.end(), combos.end());

    let perms = permutations(&data, 3).unwrap();
    assert_eq!(perms.begin(), perms.begin());
    assert_eq!(perms.end(), perms.end());

    let pairs = zip(&data, "abc");
    assert_eq!(pairs.begin(), pairs.begin());
    assert_eq!(pairs.end(), pairs.end());

    let view = (&data).view();
    assert_eq!(Sequence::begin(&view), view.begin());
    assert_eq!(view.begin().value().unwrap(), &3);
}
