//! The multi-cursor composition engine behind product, permutations and
//! combinations.
//!
//! A wheel is an arena of `N` cursors over sequences of the same cursor type,
//! indexed from the outermost level (0) to the innermost (`N - 1`). Advancing
//! turns the innermost level first; when a level runs into its last cursor the
//! next outer level turns by one and every level inside it is rewound. This is
//! the nested-loop order: the last level varies fastest.
//!
//! The adaptors differ only in how inner levels rewind and in whether levels
//! may share a position:
//!
//! - product: every level rewinds to its own first cursor
//! - permutations: like product, but a level never settles on a source
//!   position an outer level holds, so states with a shared position are
//!   never visited
//! - combinations: level `j` rewinds one past level `j - 1`
//! - combinations with replacement: level `j` rewinds onto level `j - 1`

use std::fmt;

use crate::cursor::Cursor;
use crate::error::{IterError, Result};

/// How the levels inside a turned level are repositioned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewind {
    /// Back to the level's saved first cursor
    First,
    /// One past the enclosing level's cursor
    PastOuter,
    /// Onto the enclosing level's cursor
    AtOuter,
}

/// Composite cursor holding one cursor per level plus first/last snapshots
///
/// The wheel is exhausted iff its outermost cursor equals the outermost last
/// cursor. Two wheels compare equal when both are exhausted or when every level
/// sits at the same position.
pub struct Wheel<C> {
    cursors: Vec<C>,
    firsts: Vec<C>,
    lasts: Vec<C>,
    rewind: Rewind,
    distinct: bool,
    adaptor: &'static str,
}

impl<C: Cursor> Wheel<C> {
    /// Build a wheel from the starting cursor and last cursor of every level
    ///
    /// The starting cursors double as the snapshots `Rewind::First` resets to.
    /// A level that starts on its own last cursor leaves nothing to combine, so
    /// the wheel starts exhausted.
    pub(crate) fn new(
        starts: Vec<C>,
        lasts: Vec<C>,
        rewind: Rewind,
        distinct: bool,
        adaptor: &'static str,
    ) -> Self {
        debug_assert_eq!(starts.len(), lasts.len());
        let mut wheel = Wheel {
            cursors: starts.clone(),
            firsts: starts,
            lasts,
            rewind,
            distinct,
            adaptor,
        };
        let empty_level = wheel
            .cursors
            .iter()
            .zip(&wheel.lasts)
            .any(|(cursor, last)| cursor.equals(last));
        if empty_level {
            wheel.exhaust();
        } else if wheel.distinct {
            wheel.place_distinct(0);
        }
        wheel
    }

    /// Number of levels
    pub fn arity(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_exhausted(&self) -> bool {
        match (self.cursors.first(), self.lasts.first()) {
            (Some(outer), Some(outer_last)) => outer.equals(outer_last),
            _ => true,
        }
    }

    /// A copy of this wheel parked on its terminal state
    pub(crate) fn exhausted(&self) -> Self {
        let mut wheel = self.clone();
        wheel.exhaust();
        wheel
    }

    fn exhaust(&mut self) {
        self.cursors.clone_from(&self.lasts);
    }

    /// Turn the innermost level once, carrying outward on wraparound
    fn turn(&mut self) {
        let mut level = self.cursors.len();
        while level > 0 {
            level -= 1;
            self.cursors[level].advance();
            if !self.cursors[level].equals(&self.lasts[level]) {
                self.rewind_inside(level);
                return;
            }
        }
    }

    fn rewind_inside(&mut self, outer: usize) {
        for level in outer + 1..self.cursors.len() {
            self.rewind_level(level);
        }
    }

    fn rewind_level(&mut self, level: usize) {
        self.cursors[level] = match self.rewind {
            Rewind::First => self.firsts[level].clone(),
            Rewind::PastOuter => self.cursors[level - 1].clone().next(),
            Rewind::AtOuter => self.cursors[level - 1].clone(),
        };
    }

    /// Whether `level` sits on a position already taken by an outer level
    fn collides(&self, level: usize) -> bool {
        let cursor = &self.cursors[level];
        self.cursors[..level].iter().any(|outer| outer.equals(cursor))
    }

    /// Settle levels `from..` on the next state where no two levels share a
    /// position
    ///
    /// Levels outside `from` are already pairwise distinct. Each level moves
    /// past the positions its outer levels hold before the levels inside it are
    /// rewound, so only repeat-free prefixes are ever extended.
    fn place_distinct(&mut self, from: usize) {
        let depth = self.cursors.len();
        let mut level = from;
        while level < depth {
            if self.cursors[level].equals(&self.lasts[level]) {
                if level == 0 {
                    return;
                }
                level -= 1;
                self.cursors[level].advance();
            } else if self.collides(level) {
                self.cursors[level].advance();
            } else {
                level += 1;
                if level < depth {
                    self.rewind_level(level);
                }
            }
        }
    }

    fn step_distinct(&mut self) {
        if let Some(inner) = self.cursors.len().checked_sub(1) {
            self.cursors[inner].advance();
            self.place_distinct(inner);
        }
    }
}

impl<C: Clone> Clone for Wheel<C> {
    fn clone(&self) -> Self {
        Wheel {
            cursors: self.cursors.clone(),
            firsts: self.firsts.clone(),
            lasts: self.lasts.clone(),
            rewind: self.rewind,
            distinct: self.distinct,
            adaptor: self.adaptor,
        }
    }
}

impl<C: Cursor> PartialEq for Wheel<C> {
    fn eq(&self, other: &Self) -> bool {
        (self.is_exhausted() && other.is_exhausted()) || self.cursors == other.cursors
    }
}

impl<C: fmt::Debug> fmt::Debug for Wheel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wheel")
            .field("adaptor", &self.adaptor)
            .field("cursors", &self.cursors)
            .field("rewind", &self.rewind)
            .field("distinct", &self.distinct)
            .finish()
    }
}

impl<C: Cursor> Cursor for Wheel<C> {
    type Element = Vec<C::Element>;

    fn value(&self) -> Result<Self::Element> {
        if self.is_exhausted() {
            return Err(IterError::read_at_end(self.adaptor));
        }
        self.cursors.iter().map(Cursor::value).collect()
    }

    fn advance(&mut self) {
        if self.is_exhausted() {
            return;
        }
        if self.distinct {
            self.step_distinct();
        } else {
            self.turn();
        }
    }
}

/// Count the elements between two cursors with a single forward traversal
pub(crate) fn measure<C: Cursor>(begin: &C, end: &C) -> usize {
    let mut cursor = begin.clone();
    let mut length = 0;
    while !cursor.equals(end) {
        cursor.advance();
        length += 1;
    }
    length
}

/// Reject a zero-level selection at construction
pub(crate) fn check_arity(name: &'static str, size: usize) -> Result<()> {
    if size == 0 {
        tracing::debug!(name, "rejected zero-sized selection");
        return Err(IterError::invalid_arg(name, "must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::SliceCursor;
    use std::cell::Cell;

    fn drain<C: Cursor>(mut wheel: Wheel<C>) -> Vec<Vec<C::Element>> {
        let mut out = Vec::new();
        while !wheel.is_exhausted() {
            out.push(wheel.value().unwrap());
            wheel.advance();
        }
        out
    }

    #[test]
    fn test_first_rewind_is_an_odometer() {
        let data = [0, 1];
        let begin = SliceCursor::new(&data);
        let end = SliceCursor::end(&data);
        let wheel = Wheel::new(vec![begin; 3], vec![end; 3], Rewind::First, false, "test");
        assert_eq!(wheel.arity(), 3);

        let states: Vec<Vec<i32>> = drain(wheel)
            .into_iter()
            .map(|v| v.into_iter().copied().collect())
            .collect();
        assert_eq!(states.len(), 8);
        assert_eq!(states[0], vec![0, 0, 0]);
        assert_eq!(states[1], vec![0, 0, 1]);
        assert_eq!(states[2], vec![0, 1, 0]);
        assert_eq!(states[7], vec![1, 1, 1]);
    }

    #[test]
    fn test_distinct_skips_shared_positions() {
        let data = [5, 5, 5];
        let begin = SliceCursor::new(&data);
        let end = SliceCursor::end(&data);
        let wheel = Wheel::new(vec![begin; 2], vec![end; 2], Rewind::First, true, "test");

        // equal values at different positions are still distinct picks
        assert_eq!(drain(wheel).len(), 6);
    }

    #[derive(Clone)]
    struct Tally<'a> {
        position: usize,
        length: usize,
        advances: &'a Cell<usize>,
    }

    impl PartialEq for Tally<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.position == other.position
        }
    }

    impl Cursor for Tally<'_> {
        type Element = usize;

        fn value(&self) -> Result<usize> {
            if self.position < self.length {
                Ok(self.position)
            } else {
                Err(IterError::read_at_end("tally"))
            }
        }

        fn advance(&mut self) {
            if self.position < self.length {
                self.position += 1;
                self.advances.set(self.advances.get() + 1);
            }
        }
    }

    #[test]
    fn test_distinct_extends_only_repeat_free_prefixes() {
        let advances = Cell::new(0);
        let begin = Tally {
            position: 0,
            length: 7,
            advances: &advances,
        };
        let last = Tally {
            position: 7,
            ..begin.clone()
        };
        let wheel = Wheel::new(vec![begin; 7], vec![last; 7], Rewind::First, true, "test");

        let states = drain(wheel);
        assert_eq!(states.len(), 5040);
        assert!(states.iter().all(|s| {
            let mut seen = s.clone();
            seen.sort_unstable();
            seen.dedup();
            seen.len() == 7
        }));
        // one sweep of 7 positions per repeat-free prefix of length 0..7
        let prefixes: usize = (0..7).map(|j| (7 - j + 1..=7).product::<usize>()).sum();
        assert!(
            advances.get() <= 7 * prefixes,
            "{} advances for {} prefixes",
            advances.get(),
            prefixes
        );
    }

    #[test]
    fn test_empty_level_exhausts() {
        let full = [1, 2];
        let empty: [i32; 0] = [];
        let wheel = Wheel::new(
            vec![SliceCursor::new(&full), SliceCursor::new(&empty)],
            vec![SliceCursor::end(&full), SliceCursor::end(&empty)],
            Rewind::First,
            false,
            "test",
        );
        assert!(wheel.is_exhausted());
        assert_eq!(
            wheel.value().unwrap_err(),
            IterError::ReadAtEnd { adaptor: "test" }
        );
    }

    #[test]
    fn test_exhausted_wheels_compare_equal() {
        let data = [1, 2, 3];
        let begin = SliceCursor::new(&data);
        let end = SliceCursor::end(&data);
        let mut wheel = Wheel::new(vec![begin; 2], vec![end; 2], Rewind::AtOuter, false, "test");
        let terminal = wheel.exhausted();

        assert_ne!(wheel, terminal);
        for _ in 0..6 {
            wheel.advance();
        }
        assert_eq!(wheel, terminal);

        wheel.advance();
        assert_eq!(wheel, terminal);
    }

    #[test]
    fn test_measure() {
        let data = [1, 2, 3, 4];
        assert_eq!(measure(&SliceCursor::new(&data), &SliceCursor::end(&data)), 4);
        let empty: [u8; 0] = [];
        assert_eq!(measure(&SliceCursor::new(&empty), &SliceCursor::end(&empty)), 0);
    }

    #[test]
    fn test_check_arity() {
        assert!(check_arity("size", 1).is_ok());
        assert!(matches!(
            check_arity("size", 0),
            Err(IterError::InvalidArgument { name: "size", .. })
        ));
    }
}
