use crate::cursor::{Cursor, Terminus};
use crate::error::{IterError, Result};
use crate::sequence::{Sequence, SequenceView};
use crate::truthy::Truthy;

/// Cursor over data elements whose paired selector is truthy
///
/// Data and selectors advance together; the cursor collapses to `Done` as soon
/// as either side ends.
#[derive(Debug)]
pub enum CompressCursor<D, ED, S, ES> {
    Live {
        data: D,
        data_end: ED,
        selectors: S,
        selectors_end: ES,
    },
    Done,
}

pub type Compress<D, ED, S, ES> = SequenceView<CompressCursor<D, ED, S, ES>>;

impl<D, ED, S, ES> CompressCursor<D, ED, S, ES>
where
    D: Cursor,
    ED: Terminus<D>,
    S: Cursor,
    S::Element: Truthy,
    ES: Terminus<S>,
{
    /// Move to the next selected position, or collapse to `Done`
    fn skip_unselected(&mut self) {
        let exhausted = match self {
            CompressCursor::Live {
                data,
                data_end,
                selectors,
                selectors_end,
            } => loop {
                if data_end.is_reached_by(data) || selectors_end.is_reached_by(selectors) {
                    break true;
                }
                match selectors.value() {
                    Ok(selector) if selector.is_truthy() => break false,
                    Ok(_) => {
                        data.advance();
                        selectors.advance();
                    }
                    Err(_) => break true,
                }
            },
            CompressCursor::Done => return,
        };
        if exhausted {
            *self = CompressCursor::Done;
        }
    }
}

impl<D: Clone, ED: Clone, S: Clone, ES: Clone> Clone for CompressCursor<D, ED, S, ES> {
    fn clone(&self) -> Self {
        match self {
            CompressCursor::Live {
                data,
                data_end,
                selectors,
                selectors_end,
            } => CompressCursor::Live {
                data: data.clone(),
                data_end: data_end.clone(),
                selectors: selectors.clone(),
                selectors_end: selectors_end.clone(),
            },
            CompressCursor::Done => CompressCursor::Done,
        }
    }
}

impl<D: PartialEq, ED, S, ES> PartialEq for CompressCursor<D, ED, S, ES> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CompressCursor::Live { data: a, .. }, CompressCursor::Live { data: b, .. }) => a == b,
            (CompressCursor::Done, CompressCursor::Done) => true,
            _ => false,
        }
    }
}

impl<D, ED, S, ES> Cursor for CompressCursor<D, ED, S, ES>
where
    D: Cursor,
    ED: Terminus<D>,
    S: Cursor,
    S::Element: Truthy,
    ES: Terminus<S>,
{
    type Element = D::Element;

    fn value(&self) -> Result<Self::Element> {
        match self {
            CompressCursor::Live { data, .. } => data.value(),
            CompressCursor::Done => Err(IterError::read_at_end("compress")),
        }
    }

    fn advance(&mut self) {
        if let CompressCursor::Live {
            data, selectors, ..
        } = self
        {
            data.advance();
            selectors.advance();
        }
        self.skip_unselected();
    }
}

/// Elements of `data` whose counterpart in `selectors` is truthy
///
/// Stops at whichever of the two sequences ends first.
pub fn compress<D, S>(data: D, selectors: S) -> Compress<D::Cursor, D::End, S::Cursor, S::End>
where
    D: Sequence,
    S: Sequence,
    <S::Cursor as Cursor>::Element: Truthy,
{
    let mut begin = CompressCursor::Live {
        data: data.begin(),
        data_end: data.end(),
        selectors: selectors.begin(),
        selectors_end: selectors.end(),
    };
    begin.skip_unselected();
    SequenceView::new(begin, CompressCursor::Done)
}
