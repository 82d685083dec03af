//! Vote histogram input type.

use std::collections::BTreeMap;

use crate::taxonomy::{self, DifficultyLevel};

/// Vote counts keyed by difficulty level name.
///
/// Names that are not part of the taxonomy are kept but ignored by every
/// computation in this crate. Keys are ordered so that iteration, and thus
/// floating point summation, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteHistogram {
    counts: BTreeMap<String, u64>,
}

impl VoteHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a level, replacing any previous value.
    pub fn insert(&mut self, level: impl Into<String>, count: u64) {
        self.counts.insert(level.into(), count);
    }

    /// Count recorded under a name; unknown names count as zero.
    pub fn get(&self, level: &str) -> u64 {
        self.counts.get(level).copied().unwrap_or(0)
    }

    /// Count for a taxonomy level.
    pub fn count_for(&self, level: &DifficultyLevel) -> u64 {
        self.get(level.name)
    }

    /// All raw entries, including unrecognized names.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Entries whose name is part of the taxonomy.
    pub fn recognized(&self) -> impl Iterator<Item = (&'static DifficultyLevel, u64)> + '_ {
        self.counts
            .iter()
            .filter_map(|(name, count)| taxonomy::level_by_name(name).map(|level| (level, *count)))
    }

    /// Sum of all counts under recognized names, saturating at `u64::MAX`.
    pub fn total_recognized(&self) -> u64 {
        self.recognized()
            .fold(0u64, |total, (_, count)| total.saturating_add(count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for VoteHistogram {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for (level, count) in iter {
            histogram.insert(level, count);
        }
        histogram
    }
}

impl<S: Into<String>, const N: usize> From<[(S, u64); N]> for VoteHistogram {
    fn from(entries: [(S, u64); N]) -> Self {
        entries.into_iter().collect()
    }
}
