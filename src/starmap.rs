use crate::cursor::{Cursor, Upstream, Wrapping};
use crate::error::Result;
use crate::sequence::{Sequence, SequenceView};

/// Tuple-shaped values whose fields can be passed to `F` as separate arguments
///
/// Implemented for tuples of one to six fields, owned or borrowed. Borrowed
/// tuples hand clones of their fields to the callable.
pub trait Spread<F> {
    type Output;

    fn spread(self, function: &F) -> Self::Output;
}

macro_rules! spread_tuple {
    ($($field:ident: $ty:ident),+) => {
        impl<F, R, $($ty),+> Spread<F> for ($($ty,)+)
        where
            F: Fn($($ty),+) -> R,
        {
            type Output = R;

            fn spread(self, function: &F) -> R {
                let ($($field,)+) = self;
                function($($field),+)
            }
        }

        impl<'a, F, R, $($ty: Clone),+> Spread<F> for &'a ($($ty,)+)
        where
            F: Fn($($ty),+) -> R,
        {
            type Output = R;

            fn spread(self, function: &F) -> R {
                let ($($field,)+) = self;
                function($($field.clone()),+)
            }
        }
    };
}

spread_tuple!(a: A);
spread_tuple!(a: A, b: B);
spread_tuple!(a: A, b: B, c: C);
spread_tuple!(a: A, b: B, c: C, d: D);
spread_tuple!(a: A, b: B, c: C, d: D, e: E);
spread_tuple!(a: A, b: B, c: C, d: D, e: E, g: G);

/// Cursor applying a callable to the spread fields of each upstream element
#[derive(Debug, Clone)]
pub struct StarmapCursor<C, F> {
    inner: C,
    function: F,
}

pub type Starmap<C, E, F> = SequenceView<StarmapCursor<C, F>, Upstream<E>>;

impl<C: PartialEq, F> PartialEq for StarmapCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C, F> Wrapping for StarmapCursor<C, F> {
    type Inner = C;

    fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C, F> Cursor for StarmapCursor<C, F>
where
    C: Cursor,
    C::Element: Spread<F>,
    F: Clone,
{
    type Element = <C::Element as Spread<F>>::Output;

    fn value(&self) -> Result<Self::Element> {
        Ok(self.inner.value()?.spread(&self.function))
    }

    fn advance(&mut self) {
        self.inner.advance();
    }
}

/// `function(a, b, ..)` for every tuple `(a, b, ..)` of `sequence`
pub fn starmap<S, F>(sequence: S, function: F) -> Starmap<S::Cursor, S::End, F>
where
    S: Sequence,
    <S::Cursor as Cursor>::Element: Spread<F>,
    F: Clone,
{
    let begin = StarmapCursor {
        inner: sequence.begin(),
        function,
    };
    SequenceView::new(begin, Upstream(sequence.end()))
}

pub trait StarmapExt: Sequence + Sized {
    fn starmap<F>(self, function: F) -> Starmap<Self::Cursor, Self::End, F>
    where
        <Self::Cursor as Cursor>::Element: Spread<F>,
        F: Clone,
    {
        starmap(self, function)
    }
}

impl<S: Sequence> StarmapExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count;
    use crate::zip::zip;

    #[test]
    fn test_starmap_pow() {
        let pairs = [(2u32, 5u32), (3, 2), (10, 3)];
        let powers: Vec<u32> = starmap(&pairs, |base: u32, exp: u32| base.pow(exp))
            .into_iter()
            .collect();
        assert_eq!(powers, vec![32, 9, 1000]);
    }

    #[test]
    fn test_starmap_owned_nested_pairs() {
        let sums: Vec<i64> = zip(count(1i64, 1i64), zip(count(10i64, 10i64), &[100i64, 200]))
            .starmap(|a: i64, pair: (i64, &i64)| a + pair.0 + pair.1)
            .into_iter()
            .collect();
        assert_eq!(sums, vec![111, 222]);
    }

    #[test]
    fn test_starmap_single_field() {
        let words = [("hi",), ("there",)];
        let lengths: Vec<usize> = (&words)
            .starmap(|w: &str| w.len())
            .into_iter()
            .collect();
        assert_eq!(lengths, vec![2, 5]);
    }

    #[test]
    fn test_starmap_six_fields() {
        let rows = vec![(1, 2, 3, 4, 5, 6)];
        let total: Vec<i32> = starmap(&rows, |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| {
            a + b + c + d + e + f
        })
        .into_iter()
        .collect();
        assert_eq!(total, vec![21]);
    }

    #[test]
    fn test_starmap_empty() {
        let pairs: Vec<(i32, i32)> = Vec::new();
        assert!(starmap(&pairs, |a: i32, b: i32| a * b).is_empty());
    }
}
