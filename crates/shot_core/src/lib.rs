//! # shot_core - Basketball Shot-Zone Efficiency Engine
//!
//! Classifies shot attempts by court geometry and computes per-team shooting
//! efficiency for each zone.
//!
//! ## Pipeline
//! - `geometry` - corner three / non-corner three / two-pointer predicates
//! - `metrics` - attempts, makes, FG% and eFG%
//! - `report` - two-team comparison and chart requests for a rendering sink
//!
//! All stages are pure functions over an already-loaded `&[ShotRecord]`.

pub mod config;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod models;
pub mod report;

pub use config::{AnalysisConfig, ArcBreakPolicy, ChartColor, ChartPalette, CourtGeometry};
pub use error::{ConfigError, MetricsError, Result};
pub use geometry::{ShotZone, ZoneBucket, ZoneClassifier};
pub use metrics::{efg_pct, fg_pct, ZoneMetrics};
pub use models::ShotRecord;
pub use report::{compare_teams, ChartMetric, ChartRequest, ChartSink, TeamComparison};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
