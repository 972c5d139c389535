use crate::cursor::{Cursor, Terminus};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};

/// Cursor over the maximal runs of consecutive elements sharing a key
///
/// Each element is a key paired with a view over its run. The run view holds
/// its own copies of the source cursors, so it stays readable after the
/// grouping cursor moves on; the borrow of the backing container keeps the
/// source alive for as long as any run view exists. Equal keys that are not
/// adjacent form separate runs.
///
/// Finding the end of a run reads ahead through the whole run, so a run that
/// never ends on an infinite source never yields.
pub enum GroupByCursor<C, E, K, F> {
    InGroup {
        group_start: C,
        group_end: C,
        end: E,
        key: K,
        next_key: Option<K>,
        key_fn: F,
    },
    Exhausted,
}

pub type GroupBy<C, E, K, F> = SequenceView<GroupByCursor<C, E, K, F>>;

/// Walk past the run starting at `start`; returns its end and the next run's key
fn scan<C, E, K, F>(start: &C, end: &E, key: &K, key_fn: &F) -> (C, Option<K>)
where
    C: Cursor,
    E: Terminus<C>,
    K: PartialEq,
    F: Fn(&C::Element) -> K,
{
    let mut cursor = start.clone().next();
    while !end.is_reached_by(&cursor) {
        let Ok(value) = cursor.value() else {
            break;
        };
        let next = key_fn(&value);
        if next != *key {
            return (cursor, Some(next));
        }
        cursor.advance();
    }
    (cursor, None)
}

impl<C, E, K, F> GroupByCursor<C, E, K, F>
where
    C: Cursor,
    E: Terminus<C>,
    K: PartialEq,
    F: Fn(&C::Element) -> K,
{
    fn new(start: C, end: E, key_fn: F) -> Self {
        if end.is_reached_by(&start) {
            return GroupByCursor::Exhausted;
        }
        let Ok(first) = start.value() else {
            return GroupByCursor::Exhausted;
        };
        let key = key_fn(&first);
        let (group_end, next_key) = scan(&start, &end, &key, &key_fn);
        GroupByCursor::InGroup {
            group_start: start,
            group_end,
            end,
            key,
            next_key,
            key_fn,
        }
    }
}

impl<C, E, K, F> Clone for GroupByCursor<C, E, K, F>
where
    C: Clone,
    E: Clone,
    K: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        match self {
            GroupByCursor::InGroup {
                group_start,
                group_end,
                end,
                key,
                next_key,
                key_fn,
            } => GroupByCursor::InGroup {
                group_start: group_start.clone(),
                group_end: group_end.clone(),
                end: end.clone(),
                key: key.clone(),
                next_key: next_key.clone(),
                key_fn: key_fn.clone(),
            },
            GroupByCursor::Exhausted => GroupByCursor::Exhausted,
        }
    }
}

impl<C: PartialEq, E, K, F> PartialEq for GroupByCursor<C, E, K, F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                GroupByCursor::InGroup { group_start: a, .. },
                GroupByCursor::InGroup { group_start: b, .. },
            ) => a == b,
            (GroupByCursor::Exhausted, GroupByCursor::Exhausted) => true,
            _ => false,
        }
    }
}

impl<C, E, K, F> Cursor for GroupByCursor<C, E, K, F>
where
    C: Cursor,
    E: Terminus<C>,
    K: Clone + PartialEq,
    F: Fn(&C::Element) -> K + Clone,
{
    type Element = (K, SequenceView<C, C>);

    fn value(&self) -> Result<Self::Element> {
        match self {
            GroupByCursor::InGroup {
                group_start,
                group_end,
                key,
                ..
            } => Ok((
                key.clone(),
                SequenceView::new(group_start.clone(), group_end.clone()),
            )),
            GroupByCursor::Exhausted => Err(IterError::read_at_end("groupby")),
        }
    }

    fn advance(&mut self) {
        let GroupByCursor::InGroup {
            group_start,
            group_end,
            end,
            key,
            next_key,
            key_fn,
        } = self
        else {
            return;
        };
        let Some(next) = next_key.take() else {
            *self = GroupByCursor::Exhausted;
            return;
        };
        *group_start = group_end.clone();
        let (run_end, following) = scan(group_start, end, &next, key_fn);
        *group_end = run_end;
        *key = next;
        *next_key = following;
    }
}

fn element_key<T: Clone>(element: &T) -> T {
    element.clone()
}

/// Runs of consecutive elements sharing the key computed by `key_fn`
pub fn groupby_key<S, K, F>(sequence: S, key_fn: F) -> GroupBy<S::Cursor, S::End, K, F>
where
    S: Sequence,
    K: Clone + PartialEq,
    F: Fn(&<S::Cursor as Cursor>::Element) -> K + Clone,
{
    let begin = GroupByCursor::new(sequence.begin(), sequence.end(), key_fn);
    SequenceView::new(begin, GroupByCursor::Exhausted)
}

/// Runs of consecutive equal elements, keyed by the element itself
#[allow(clippy::type_complexity)]
pub fn groupby<S>(
    sequence: S,
) -> GroupBy<
    S::Cursor,
    S::End,
    <S::Cursor as Cursor>::Element,
    fn(&<S::Cursor as Cursor>::Element) -> <S::Cursor as Cursor>::Element,
>
where
    S: Sequence,
    <S::Cursor as Cursor>::Element: Clone + PartialEq,
{
    let key_fn: fn(&<S::Cursor as Cursor>::Element) -> <S::Cursor as Cursor>::Element =
        element_key;
    groupby_key(sequence, key_fn)
}

pub trait GroupByExt: Sequence + Sized {
    fn groupby_key<K, F>(self, key_fn: F) -> GroupBy<Self::Cursor, Self::End, K, F>
    where
        K: Clone + PartialEq,
        F: Fn(&<Self::Cursor as Cursor>::Element) -> K + Clone,
    {
        groupby_key(self, key_fn)
    }
}

impl<S: Sequence> GroupByExt for S {}
