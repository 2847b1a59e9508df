use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ShotRecord;

/// Court region a field-goal attempt is credited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotZone {
    TwoPoint,
    CornerThree,
    NonCornerThree,
}

impl ShotZone {
    /// Chart order: two-pointers first, then corner and non-corner threes.
    pub const ALL: [ShotZone; 3] = [
        ShotZone::TwoPoint,
        ShotZone::CornerThree,
        ShotZone::NonCornerThree,
    ];

    pub fn is_three(&self) -> bool {
        !matches!(self, ShotZone::TwoPoint)
    }

    pub fn point_value(&self) -> u8 {
        if self.is_three() {
            3
        } else {
            2
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShotZone::TwoPoint => "two pointers",
            ShotZone::CornerThree => "corner 3 pointers",
            ShotZone::NonCornerThree => "non-corner 3 pointers",
        }
    }

    /// Heading used in chart titles
    pub fn title(&self) -> &'static str {
        match self {
            ShotZone::TwoPoint => "Two Pointers",
            ShotZone::CornerThree => "Corner Threes Pointers",
            ShotZone::NonCornerThree => "Non-corner Threes Pointers",
        }
    }
}

impl fmt::Display for ShotZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One team's shots that fall in a single zone, in input order.
#[derive(Debug, Clone)]
pub struct ZoneBucket<'a> {
    zone: ShotZone,
    team: &'a str,
    shots: Vec<&'a ShotRecord>,
}

impl<'a> ZoneBucket<'a> {
    pub fn new(zone: ShotZone, team: &'a str, shots: Vec<&'a ShotRecord>) -> Self {
        Self { zone, team, shots }
    }

    pub fn zone(&self) -> ShotZone {
        self.zone
    }

    pub fn team(&self) -> &'a str {
        self.team
    }

    pub fn shots(&self) -> &[&'a ShotRecord] {
        &self.shots
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ShotRecord> + '_ {
        self.shots.iter().copied()
    }

    pub fn attempts(&self) -> u32 {
        self.shots.len() as u32
    }

    pub fn makes(&self) -> u32 {
        self.shots.iter().filter(|shot| shot.made()).count() as u32
    }

    pub fn misses(&self) -> u32 {
        self.shots.iter().filter(|shot| !shot.made()).count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }
}
