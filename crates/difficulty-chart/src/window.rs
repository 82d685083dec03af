//! Selection of the contiguous range of levels shown on the chart.

use std::ops::RangeInclusive;

use crate::taxonomy::LEVEL_COUNT;
use crate::votes::VoteHistogram;

/// Minimum number of bars on a chart.
pub const MIN_WINDOW_SIZE: usize = 5;

/// Inclusive index range into the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub min: usize,
    pub max: usize,
}

impl Window {
    pub fn new(min: usize, max: usize) -> Self {
        debug_assert!(min <= max && max < LEVEL_COUNT);
        Self { min, max }
    }

    /// Number of levels in the window.
    pub fn width(&self) -> usize {
        self.max - self.min + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.min..=self.max).contains(&index)
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

impl Default for Window {
    /// The first five levels, used when nothing has been voted on.
    fn default() -> Self {
        Self::new(0, MIN_WINDOW_SIZE.min(LEVEL_COUNT) - 1)
    }
}

/// Pick the window of levels to display.
///
/// The voted span is padded by one level on each side for context and then
/// widened, staying inside the taxonomy, until it holds at least
/// [`MIN_WINDOW_SIZE`] levels.
pub fn select_window(votes: &VoteHistogram) -> Window {
    let mut voted: Option<(usize, usize)> = None;
    for (level, count) in votes.recognized() {
        if count == 0 {
            continue;
        }
        voted = Some(match voted {
            Some((lo, hi)) => (lo.min(level.index), hi.max(level.index)),
            None => (level.index, level.index),
        });
    }

    let Some((min_voted, max_voted)) = voted else {
        return Window::default();
    };

    let last = LEVEL_COUNT as isize - 1;
    let min_size = MIN_WINDOW_SIZE.min(LEVEL_COUNT) as isize;

    let mut min_idx = (min_voted as isize - 1).max(0);
    let mut max_idx = (max_voted as isize + 1).min(last);

    let size = max_idx - min_idx + 1;
    if size < min_size {
        let deficit = min_size - size;
        let expand_left = deficit / 2;
        let expand_right = deficit - expand_left;

        min_idx -= expand_left;
        max_idx += expand_right;

        // Overflow on one side moves to the other.
        if min_idx < 0 {
            max_idx -= min_idx;
            min_idx = 0;
        }
        if max_idx > last {
            min_idx -= max_idx - last;
            max_idx = last;
        }
        min_idx = min_idx.max(0);
    }

    Window::new(min_idx as usize, max_idx as usize)
}
