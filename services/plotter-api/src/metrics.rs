//! Prometheus metrics for chart requests.

use std::time::Duration;

use metrics::{counter, histogram};

/// How a chart request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    Rejected,
    Failed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Rendered => "rendered",
            Outcome::Rejected => "rejected",
            Outcome::Failed => "failed",
        }
    }
}

pub fn record_request(outcome: Outcome) {
    counter!("chart_requests_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_render_duration(layout: &'static str, elapsed: Duration) {
    histogram!("chart_render_duration_seconds", "layout" => layout).record(elapsed.as_secs_f64());
}
