//! # Geometry Module
//!
//! Shot-zone classification from hoop-centred court coordinates.
//!
//! - `zone` - `ShotZone` and the `ZoneBucket` subset type
//! - `classifier` - zone predicates and stable per-team filters
//!
//! The free functions below use the default court and the reference
//! arc-break policy.

pub mod classifier;
pub mod zone;

pub use classifier::{ZoneClassifier, ZonePartition, ZoneSummary};
pub use zone::{ShotZone, ZoneBucket};

use crate::models::ShotRecord;

pub fn classify(shot: &ShotRecord) -> Option<ShotZone> {
    ZoneClassifier::default().classify(shot)
}

pub fn team_shots<'a>(shots: &'a [ShotRecord], team: &str) -> Vec<&'a ShotRecord> {
    ZoneClassifier::default().team_shots(shots, team)
}

pub fn corner_threes<'a>(shots: &'a [ShotRecord], team: &'a str) -> ZoneBucket<'a> {
    ZoneClassifier::default().corner_threes(shots, team)
}

pub fn non_corner_threes<'a>(shots: &'a [ShotRecord], team: &'a str) -> ZoneBucket<'a> {
    ZoneClassifier::default().non_corner_threes(shots, team)
}

pub fn two_pointers<'a>(shots: &'a [ShotRecord], team: &'a str) -> ZoneBucket<'a> {
    ZoneClassifier::default().two_pointers(shots, team)
}
