//! # Metrics Module
//!
//! Reduces a zone bucket to counts and shooting percentages.

pub mod efficiency;

pub use efficiency::{efg_pct, fg_pct, round2, ZoneMetrics, THREE_POINT_BONUS};
