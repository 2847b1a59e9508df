//! # Zone Classifier
//!
//! Court-geometry predicates for the three shot zones.
//!
//! | zone             | predicate                                                   |
//! |------------------|-------------------------------------------------------------|
//! | corner three     | `abs(x) >= 22` and `y <= 7.8`                               |
//! | non-corner three | (`abs(x) >= 22` and `y > 7.8`) or (`d >= 23.75` and `y > 8.95`) |
//! | two-pointer      | (`abs(x) < 22` and `y < 8.95`) or (`y > 8.95` and `d < 23.75`)  |
//!
//! The predicates never overlap. They leave one gap: the segment
//! `y == 8.95`, `abs(x) < 22`, which `ArcBreakPolicy` resolves.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::zone::{ShotZone, ZoneBucket};
use crate::config::{AnalysisConfig, ArcBreakPolicy, CourtGeometry};
use crate::models::ShotRecord;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneClassifier {
    court: CourtGeometry,
    arc_break: ArcBreakPolicy,
}

impl ZoneClassifier {
    pub fn new(court: CourtGeometry, arc_break: ArcBreakPolicy) -> Self {
        Self { court, arc_break }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.court, config.arc_break)
    }

    pub fn court(&self) -> &CourtGeometry {
        &self.court
    }

    pub fn arc_break(&self) -> ArcBreakPolicy {
        self.arc_break
    }

    fn beyond_corner_line(&self, shot: &ShotRecord) -> bool {
        shot.x().abs() >= self.court.corner_x
    }

    pub fn is_corner_three(&self, shot: &ShotRecord) -> bool {
        self.beyond_corner_line(shot) && shot.y() <= self.court.corner_max_y
    }

    /// Straight sideline section above the corner, or the curved arc.
    pub fn is_non_corner_three(&self, shot: &ShotRecord) -> bool {
        let sideline = self.beyond_corner_line(shot) && shot.y() > self.court.corner_max_y;
        let arc = shot.distance() >= self.court.arc_radius && shot.y() > self.court.arc_break_y;
        sideline || arc
    }

    pub fn is_two_pointer(&self, shot: &ShotRecord) -> bool {
        let below_break = !self.beyond_corner_line(shot) && shot.y() < self.court.arc_break_y;
        let inside_arc =
            shot.y() > self.court.arc_break_y && shot.distance() < self.court.arc_radius;
        below_break || inside_arc
    }

    /// The segment no literal predicate matches.
    pub fn on_arc_break_line(&self, shot: &ShotRecord) -> bool {
        shot.y() == self.court.arc_break_y && shot.x().abs() < self.court.corner_x
    }

    /// Zone owning `shot`, or `None` for an unclassified shot.
    pub fn classify(&self, shot: &ShotRecord) -> Option<ShotZone> {
        if self.is_corner_three(shot) {
            Some(ShotZone::CornerThree)
        } else if self.is_non_corner_three(shot) {
            Some(ShotZone::NonCornerThree)
        } else if self.is_two_pointer(shot) {
            Some(ShotZone::TwoPoint)
        } else if self.arc_break == ArcBreakPolicy::TwoPoint && self.on_arc_break_line(shot) {
            Some(ShotZone::TwoPoint)
        } else {
            None
        }
    }

    pub fn team_shots<'a>(&self, shots: &'a [ShotRecord], team: &str) -> Vec<&'a ShotRecord> {
        shots.iter().filter(|shot| shot.is_team(team)).collect()
    }

    /// Stable filter of `team`'s shots credited to `zone`.
    pub fn bucket<'a>(
        &self,
        shots: &'a [ShotRecord],
        team: &'a str,
        zone: ShotZone,
    ) -> ZoneBucket<'a> {
        let matching: Vec<&ShotRecord> = shots
            .iter()
            .filter(|shot| shot.is_team(team) && self.classify(shot) == Some(zone))
            .collect();
        debug!(team, %zone, attempts = matching.len(), "zone bucket");
        ZoneBucket::new(zone, team, matching)
    }

    pub fn corner_threes<'a>(&self, shots: &'a [ShotRecord], team: &'a str) -> ZoneBucket<'a> {
        self.bucket(shots, team, ShotZone::CornerThree)
    }

    pub fn non_corner_threes<'a>(
        &self,
        shots: &'a [ShotRecord],
        team: &'a str,
    ) -> ZoneBucket<'a> {
        self.bucket(shots, team, ShotZone::NonCornerThree)
    }

    pub fn two_pointers<'a>(&self, shots: &'a [ShotRecord], team: &'a str) -> ZoneBucket<'a> {
        self.bucket(shots, team, ShotZone::TwoPoint)
    }

    /// Splits every shot of `team` in one pass.
    pub fn partition<'a>(&self, shots: &'a [ShotRecord], team: &'a str) -> ZonePartition<'a> {
        let mut two_point = Vec::new();
        let mut corner_three = Vec::new();
        let mut non_corner_three = Vec::new();
        let mut unclassified = Vec::new();

        for shot in shots.iter().filter(|shot| shot.is_team(team)) {
            match self.classify(shot) {
                Some(ShotZone::TwoPoint) => two_point.push(shot),
                Some(ShotZone::CornerThree) => corner_three.push(shot),
                Some(ShotZone::NonCornerThree) => non_corner_three.push(shot),
                None => unclassified.push(shot),
            }
        }

        if !unclassified.is_empty() {
            warn!(
                team,
                count = unclassified.len(),
                arc_break_y = self.court.arc_break_y,
                "shots matched no zone"
            );
        }

        let partition = ZonePartition {
            team,
            two_point: ZoneBucket::new(ShotZone::TwoPoint, team, two_point),
            corner_three: ZoneBucket::new(ShotZone::CornerThree, team, corner_three),
            non_corner_three: ZoneBucket::new(ShotZone::NonCornerThree, team, non_corner_three),
            unclassified,
        };
        debug!(team, summary = ?partition.summary(), "zone partition");
        partition
    }
}

/// All of one team's shots split by zone.
#[derive(Debug, Clone)]
pub struct ZonePartition<'a> {
    pub team: &'a str,
    pub two_point: ZoneBucket<'a>,
    pub corner_three: ZoneBucket<'a>,
    pub non_corner_three: ZoneBucket<'a>,
    pub unclassified: Vec<&'a ShotRecord>,
}

impl<'a> ZonePartition<'a> {
    pub fn bucket(&self, zone: ShotZone) -> &ZoneBucket<'a> {
        match zone {
            ShotZone::TwoPoint => &self.two_point,
            ShotZone::CornerThree => &self.corner_three,
            ShotZone::NonCornerThree => &self.non_corner_three,
        }
    }

    pub fn summary(&self) -> ZoneSummary {
        ZoneSummary {
            team: self.team.to_string(),
            two_point: self.two_point.attempts(),
            corner_three: self.corner_three.attempts(),
            non_corner_three: self.non_corner_three.attempts(),
            unclassified: self.unclassified.len() as u32,
        }
    }
}

/// Attempt counts per zone for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub team: String,
    pub two_point: u32,
    pub corner_three: u32,
    pub non_corner_three: u32,
    pub unclassified: u32,
}

impl ZoneSummary {
    pub fn total(&self) -> u32 {
        self.two_point + self.corner_three + self.non_corner_three + self.unclassified
    }
}
