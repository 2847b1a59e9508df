use serde::{Deserialize, Serialize};

/// A single field-goal attempt.
///
/// Coordinates are in feet with the hoop at the origin; `y` grows away from
/// the baseline. `distance` is derived once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ShotRecordFields")]
pub struct ShotRecord {
    team: String,
    x: f64,
    y: f64,
    made: bool,
    distance: f64,
}

/// Wire shape of a shot; `distance` is never trusted from input.
#[derive(Debug, Clone, Deserialize)]
struct ShotRecordFields {
    team: String,
    x: f64,
    y: f64,
    #[serde(alias = "fgmade")]
    made: bool,
}

impl From<ShotRecordFields> for ShotRecord {
    fn from(fields: ShotRecordFields) -> Self {
        ShotRecord::new(fields.team, fields.x, fields.y, fields.made)
    }
}

impl ShotRecord {
    pub fn new(team: impl Into<String>, x: f64, y: f64, made: bool) -> Self {
        Self {
            team: team.into(),
            x,
            y,
            made,
            distance: x.hypot(y),
        }
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn made(&self) -> bool {
        self.made
    }

    /// Euclidean distance from the hoop, `sqrt(x² + y²)`.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn is_team(&self, team: &str) -> bool {
        self.team == team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_derived() {
        let shot = ShotRecord::new("Team A", 3.0, 4.0, true);
        assert_eq!(shot.distance(), 5.0);

        let behind = ShotRecord::new("Team A", -6.0, -8.0, false);
        assert_eq!(behind.distance(), 10.0);
    }

    #[test]
    fn test_deserialize_accepts_fgmade_alias() {
        let json = r#"{"team":"Team B","x":0.0,"y":25.0,"fgmade":false}"#;
        let shot: ShotRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shot.team(), "Team B");
        assert!(!shot.made());
        assert_eq!(shot.distance(), 25.0);
    }

    #[test]
    fn test_deserialize_ignores_supplied_distance() {
        let json = r#"{"team":"Team A","x":3.0,"y":4.0,"made":true,"distance":99.0}"#;
        let shot: ShotRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shot.distance(), 5.0);
    }
}
