use std::iter::Rev;
use std::vec::Drain;

use crate::fixpoint_assert_simple;

/// An undo log partitioned into backtrack levels.
///
/// Entries pushed while level `i` is current are handed back, newest first, when synchronising to
/// a level below `i`.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_level: usize,
    /// At index i is the position where the i-th level ends (exclusive) on the trail.
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// Implemented by hand to avoid requiring `T: Default`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_level: 0,
            trail_delimiter: Vec::new(),
            trail: Vec::new(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_level(&mut self) {
        self.current_level += 1;
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn get_level(&self) -> usize {
        self.current_level
    }

    /// Pops every entry recorded above `new_level`, most recent first.
    pub(crate) fn synchronise(&mut self, new_level: usize) -> Rev<Drain<'_, T>> {
        fixpoint_assert_simple!(
            new_level < self.current_level,
            "can only synchronise to a level below the current level {}, got {new_level}",
            self.current_level
        );

        let new_trail_len = self.trail_delimiter[new_level];

        self.current_level = new_level;
        self.trail_delimiter.truncate(new_level);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }

    pub(crate) fn len(&self) -> usize {
        self.trail.len()
    }
}
