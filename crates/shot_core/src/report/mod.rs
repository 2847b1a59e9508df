//! # Report Module
//!
//! - `comparison` - both teams' zone metrics and the chart requests built from them
//! - `chart` - chart request shape and the `ChartSink` rendering seam

pub mod chart;
pub mod comparison;

pub use chart::{render_all, requests_to_json, ChartMetric, ChartRequest, ChartSink, MemorySink};
pub use comparison::{compare_teams, TeamComparison, TeamReport};
