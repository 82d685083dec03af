//! Plotter API Service Library
//!
//! HTTP surface over the `difficulty-chart` renderer: vote histograms are
//! posted as JSON and returned as WebP bar charts.

pub mod handlers;
pub mod metrics;
pub mod state;
pub mod validation;
