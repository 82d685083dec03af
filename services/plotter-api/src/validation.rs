//! Parsing and validation of chart request bodies.

use std::collections::BTreeMap;

use difficulty_chart::{taxonomy, VoteHistogram};
use serde::Deserialize;
use thiserror::Error;

/// A request body that cannot be charted.
///
/// Display strings are returned to clients verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid JSON")]
    InvalidJson,

    #[error("missing votes field")]
    MissingVotes,

    #[error("invalid difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("invalid vote count for {0}")]
    NegativeCount(String),

    #[error("no votes provided")]
    NoVotes,
}

#[derive(Debug, Deserialize)]
struct ChartRequest {
    votes: Option<BTreeMap<String, i64>>,
}

/// Parse a `{"votes": {...}}` body into a histogram.
///
/// Levels are checked in name order; the first failing entry decides the
/// error.
pub fn parse_chart_request(body: &[u8]) -> Result<VoteHistogram, RequestError> {
    let request: ChartRequest =
        serde_json::from_slice(body).map_err(|_| RequestError::InvalidJson)?;
    let votes = request.votes.ok_or(RequestError::MissingVotes)?;

    let mut histogram = VoteHistogram::new();
    let mut total: u64 = 0;
    for (level, count) in votes {
        if taxonomy::level_by_name(&level).is_none() {
            return Err(RequestError::UnknownDifficulty(level));
        }
        let Ok(count) = u64::try_from(count) else {
            return Err(RequestError::NegativeCount(level));
        };
        total = total.saturating_add(count);
        histogram.insert(level, count);
    }

    if total == 0 {
        return Err(RequestError::NoVotes);
    }
    Ok(histogram)
}
