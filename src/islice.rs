use crate::cursor::{Cursor, Terminus};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};

/// Cursor visiting every `step`-th source index from `start` up to `stop`
///
/// Collapses to `Done` as soon as the index bound or the source end is
/// reached. `Done` is also the view's end cursor.
pub enum IsliceCursor<C, E> {
    Active {
        inner: C,
        end: E,
        index: usize,
        stop: Option<usize>,
        step: usize,
    },
    Done,
}

pub type Islice<C, E> = SequenceView<IsliceCursor<C, E>>;

impl<C, E> IsliceCursor<C, E>
where
    C: Cursor,
    E: Terminus<C>,
{
    /// Move the source forward by up to `count` elements
    fn skip(&mut self, count: usize) {
        if let IsliceCursor::Active {
            inner,
            end,
            index,
            stop,
            ..
        } = self
        {
            for _ in 0..count {
                if end.is_reached_by(inner) || stop.is_some_and(|stop| *index >= stop) {
                    break;
                }
                inner.advance();
                *index += 1;
            }
        }
        self.settle();
    }

    fn settle(&mut self) {
        let finished = match self {
            IsliceCursor::Active {
                inner,
                end,
                index,
                stop,
                ..
            } => end.is_reached_by(inner) || stop.is_some_and(|stop| *index >= stop),
            IsliceCursor::Done => return,
        };
        if finished {
            *self = IsliceCursor::Done;
        }
    }
}

impl<C: Clone, E: Clone> Clone for IsliceCursor<C, E> {
    fn clone(&self) -> Self {
        match self {
            IsliceCursor::Active {
                inner,
                end,
                index,
                stop,
                step,
            } => IsliceCursor::Active {
                inner: inner.clone(),
                end: end.clone(),
                index: *index,
                stop: *stop,
                step: *step,
            },
            IsliceCursor::Done => IsliceCursor::Done,
        }
    }
}

impl<C: PartialEq, E> PartialEq for IsliceCursor<C, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                IsliceCursor::Active {
                    inner: a, index: i, ..
                },
                IsliceCursor::Active {
                    inner: b, index: j, ..
                },
            ) => i == j && a == b,
            (IsliceCursor::Done, IsliceCursor::Done) => true,
            _ => false,
        }
    }
}

impl<C, E> Cursor for IsliceCursor<C, E>
where
    C: Cursor,
    E: Terminus<C>,
{
    type Element = C::Element;

    fn value(&self) -> Result<Self::Element> {
        match self {
            IsliceCursor::Active { inner, .. } => inner.value(),
            IsliceCursor::Done => Err(IterError::read_at_end("islice")),
        }
    }

    fn advance(&mut self) {
        if let IsliceCursor::Active { step, .. } = self {
            let step = *step;
            self.skip(step);
        }
    }
}

/// Source elements at indices `start`, `start + step`, ... below `stop`
///
/// `stop: None` runs to the end of the source. A zero `step` is rejected.
/// `start >= stop` gives an empty view.
pub fn islice<S>(
    sequence: S,
    start: usize,
    stop: Option<usize>,
    step: usize,
) -> Result<Islice<S::Cursor, S::End>>
where
    S: Sequence,
{
    if step == 0 {
        tracing::debug!(start, ?stop, "rejected zero islice step");
        return Err(IterError::invalid_arg("step", "must be at least 1"));
    }
    if stop.is_some_and(|stop| start >= stop) {
        tracing::trace!(start, ?stop, "islice window is empty");
        return Ok(SequenceView::new(IsliceCursor::Done, IsliceCursor::Done));
    }
    tracing::trace!(start, ?stop, step, "skipping to islice start");
    let mut begin = IsliceCursor::Active {
        inner: sequence.begin(),
        end: sequence.end(),
        index: 0,
        stop,
        step,
    };
    begin.skip(start);
    Ok(SequenceView::new(begin, IsliceCursor::Done))
}

pub trait IsliceExt: Sequence + Sized {
    fn islice(
        self,
        start: usize,
        stop: Option<usize>,
        step: usize,
    ) -> Result<Islice<Self::Cursor, Self::End>> {
        islice(self, start, stop, step)
    }
}

impl<S: Sequence> IsliceExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count;
    use crate::filter::filter;
    use crate::sequence::iterable;
    use crate::testing::init_tracing;
    use std::cell::Cell;
    use std::collections::LinkedList;

    fn letters(start: usize, stop: Option<usize>, step: usize) -> String {
        islice("ABCDEFG", start, stop, step)
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_islice_every_third() {
        init_tracing();
        assert_eq!(letters(0, Some(7), 3), "ADG");
    }

    #[test]
    fn test_islice_steps() {
        assert_eq!(letters(0, Some(7), 1), "ABCDEFG");
        assert_eq!(letters(0, Some(7), 2), "ACEG");
        assert_eq!(letters(0, Some(7), 4), "AE");
        assert_eq!(letters(0, Some(7), 7), "A");
        assert_eq!(letters(1, None, 2), "BDF");
    }

    #[test]
    fn test_islice_start_past_source() {
        assert_eq!(letters(7, Some(14), 1), "");
        assert_eq!(letters(20, None, 3), "");
    }

    #[test]
    fn test_islice_start_not_below_stop() {
        assert_eq!(letters(4, Some(4), 1), "");
        assert_eq!(letters(5, Some(2), 1), "");
    }

    #[test]
    fn test_islice_stops_before_source_end() {
        assert_eq!(letters(0, Some(3), 1), "ABC");
        assert_eq!(letters(2, Some(6), 2), "CE");
    }

    #[test]
    fn test_islice_empty_source() {
        let empty: Vec<u8> = Vec::new();
        assert!(islice(&empty, 0, None, 1).unwrap().is_empty());
    }

    #[test]
    fn test_islice_linked_list() {
        let list: LinkedList<i32> = (1..16).collect();
        let odd: Vec<i32> = (&list)
            .islice(0, Some(15), 2)
            .unwrap()
            .into_iter()
            .copied()
            .collect();
        assert_eq!(odd, vec![1, 3, 5, 7, 9, 11, 13, 15]);
    }

    #[test]
    fn test_islice_infinite_source() {
        let picked: Vec<_> = islice(count(0, 1), 10, Some(20), 5)
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(picked, vec![10, 15]);
    }

    #[test]
    fn test_islice_never_reads_past_stop() {
        let pulled = Cell::new(0usize);
        let counted = |_: &i64| {
            pulled.set(pulled.get() + 1);
            true
        };

        let picked: Vec<i64> = islice(filter(count(0i64, 1i64), counted), 0, Some(1), 1_000_000)
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(picked, vec![0]);
        assert!(pulled.get() <= 2, "pulled {} elements", pulled.get());

        pulled.set(0);
        let view = islice(filter(count(0i64, 1i64), counted), 5_000_000, Some(0), 1).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
        assert!(pulled.get() <= 1, "pulled {} elements", pulled.get());
    }

    #[test]
    fn test_islice_zero_step_rejected() {
        init_tracing();
        assert!(matches!(
            islice(iterable(0..3), 0, None, 0),
            Err(IterError::InvalidArgument { name: "step", .. })
        ));
    }
}
