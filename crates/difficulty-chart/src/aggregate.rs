//! Weighted average of votes and its difficulty label.

use crate::taxonomy::{self, LEVEL_COUNT};
use crate::votes::VoteHistogram;

/// Vote-weighted mean of level midpoints.
///
/// Only recognized levels contribute, to both the numerator and the
/// denominator. Returns 0.0 when no recognized level has votes.
pub fn weighted_average(votes: &VoteHistogram) -> f64 {
    // Summed as floats so counts near u64::MAX cannot overflow.
    let mut total_weight = 0.0;
    let mut total_votes = 0.0;

    for (level, count) in votes.recognized() {
        let count = count as f64;
        total_weight += level.midpoint * count;
        total_votes += count;
    }

    if total_votes == 0.0 {
        return 0.0;
    }
    total_weight / total_votes
}

/// Classify an average into the level whose range contains it.
///
/// Levels are scanned easiest first. Values outside the scale (negative,
/// above 10, NaN) match nothing and fall back to the hardest level.
pub fn label_for_average(avg: f64) -> &'static str {
    let levels = taxonomy::levels();
    levels
        .iter()
        .find(|level| level.range.contains(avg))
        .unwrap_or(&levels[LEVEL_COUNT - 1])
        .name
}

/// Format an average with two decimals, truncating rather than rounding.
pub fn format_average(avg: f64) -> String {
    let whole = avg.trunc();
    let hundredths = ((avg - whole) * 100.0).trunc().abs() as u64;
    format!("{}.{:02}", whole as i64, hundredths)
}
