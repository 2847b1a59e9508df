//! # Analysis Configuration
//!
//! Court constants, boundary ownership and chart colours in one place.
//!
//! ## Presets
//! - `reference()` (default): literal zone predicates, the arc-break line is
//!   left unclassified, reference chart colours.
//! - `strict()`: the arc-break line belongs to the two-point zone and the
//!   palette groups all three-point charts under one colour.
//!
//! ## Usage
//!
//! ```rust
//! use shot_core::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::default();
//! let strict = AnalysisConfig::strict();
//! assert!(config.validate().is_ok());
//! assert!(strict.validate().is_ok());
//! ```
//!
//! ## Environment Variables
//!
//! - `SHOT_ZONE_PROFILE`: Select preset (reference, strict)

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;

use crate::error::ConfigError;
use crate::geometry::ShotZone;
use crate::report::ChartMetric;

pub const PROFILE_ENV: &str = "SHOT_ZONE_PROFILE";

/// How far the configured arc break may sit above the exact
/// arc/sideline intersection.
const ARC_BREAK_TOLERANCE_FT: f64 = 0.05;

/// Court constants in feet, hoop at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtGeometry {
    /// |x| at and beyond which a shot is on the straight corner section
    pub corner_x: f64,
    /// Highest y still counted as a corner three
    pub corner_max_y: f64,
    /// Three-point arc radius
    pub arc_radius: f64,
    /// y where the arc meets the corner line
    pub arc_break_y: f64,
}

impl Default for CourtGeometry {
    fn default() -> Self {
        Self {
            corner_x: 22.0,
            corner_max_y: 7.8,
            arc_radius: 23.75,
            arc_break_y: 8.95,
        }
    }
}

impl CourtGeometry {
    /// Exact y of the arc/corner-line intersection, `sqrt(r² - corner_x²)`.
    pub fn exact_arc_break_y(&self) -> f64 {
        (self.arc_radius.powi(2) - self.corner_x.powi(2)).sqrt()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("corner_x", self.corner_x),
            ("corner_max_y", self.corner_max_y),
            ("arc_radius", self.arc_radius),
            ("arc_break_y", self.arc_break_y),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidGeometry(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }

        if self.arc_radius <= self.corner_x {
            return Err(ConfigError::InvalidGeometry(format!(
                "arc_radius ({}) must exceed corner_x ({})",
                self.arc_radius, self.corner_x
            )));
        }

        if self.corner_max_y > self.arc_break_y {
            return Err(ConfigError::InvalidGeometry(format!(
                "corner_max_y ({}) must not exceed arc_break_y ({})",
                self.corner_max_y, self.arc_break_y
            )));
        }

        // Below the exact intersection the inside-arc and sideline regions overlap.
        let exact = self.exact_arc_break_y();
        if self.arc_break_y < exact || self.arc_break_y - exact > ARC_BREAK_TOLERANCE_FT {
            return Err(ConfigError::InvalidGeometry(format!(
                "arc_break_y ({}) must lie within [{:.4}, {:.4}]",
                self.arc_break_y,
                exact,
                exact + ARC_BREAK_TOLERANCE_FT
            )));
        }

        Ok(())
    }
}

/// Owner of the line `y == arc_break_y` inside the corner lines.
///
/// The literal predicates match no zone there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcBreakPolicy {
    /// Leave such shots unclassified and report them
    #[default]
    Reference,
    /// Count such shots as two-pointers
    TwoPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartColor {
    Orange,
    Blue,
    Green,
    Red,
    Gray,
}

impl ChartColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartColor::Orange => "orange",
            ChartColor::Blue => "blue",
            ChartColor::Green => "green",
            ChartColor::Red => "red",
            ChartColor::Gray => "gray",
        }
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bar colour for each of the six comparison charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPalette {
    pub two_point_fg: ChartColor,
    pub two_point_efg: ChartColor,
    pub corner_three_fg: ChartColor,
    pub corner_three_efg: ChartColor,
    pub non_corner_three_fg: ChartColor,
    pub non_corner_three_efg: ChartColor,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self::reference()
    }
}

impl ChartPalette {
    /// Reference colours; non-corner eFG% is orange while its
    /// FG% sibling is blue.
    pub fn reference() -> Self {
        Self {
            two_point_fg: ChartColor::Orange,
            two_point_efg: ChartColor::Orange,
            corner_three_fg: ChartColor::Blue,
            corner_three_efg: ChartColor::Blue,
            non_corner_three_fg: ChartColor::Blue,
            non_corner_three_efg: ChartColor::Orange,
        }
    }

    /// Orange for two-pointers, blue for every three-point chart.
    pub fn grouped() -> Self {
        Self {
            non_corner_three_efg: ChartColor::Blue,
            ..Self::reference()
        }
    }

    pub fn color_for(&self, zone: ShotZone, metric: ChartMetric) -> ChartColor {
        match (zone, metric) {
            (ShotZone::TwoPoint, ChartMetric::FieldGoal) => self.two_point_fg,
            (ShotZone::TwoPoint, ChartMetric::EffectiveFieldGoal) => self.two_point_efg,
            (ShotZone::CornerThree, ChartMetric::FieldGoal) => self.corner_three_fg,
            (ShotZone::CornerThree, ChartMetric::EffectiveFieldGoal) => self.corner_three_efg,
            (ShotZone::NonCornerThree, ChartMetric::FieldGoal) => self.non_corner_three_fg,
            (ShotZone::NonCornerThree, ChartMetric::EffectiveFieldGoal) => {
                self.non_corner_three_efg
            }
        }
    }
}

/// Full analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub court: CourtGeometry,
    pub arc_break: ArcBreakPolicy,
    pub palette: ChartPalette,
    /// First team in every comparison
    pub team_a: String,
    /// Second team in every comparison
    pub team_b: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            court: CourtGeometry::default(),
            arc_break: ArcBreakPolicy::Reference,
            palette: ChartPalette::reference(),
            team_a: "Team A".to_string(),
            team_b: "Team B".to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Literal reference behaviour (default)
    pub fn reference() -> Self {
        Self::default()
    }

    /// Closed boundaries and grouped colours
    pub fn strict() -> Self {
        Self {
            arc_break: ArcBreakPolicy::TwoPoint,
            palette: ChartPalette::grouped(),
            ..Self::default()
        }
    }

    pub fn from_profile(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_lowercase().as_str() {
            "" | "reference" | "default" => Ok(Self::reference()),
            "strict" => Ok(Self::strict()),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }

    pub fn from_env_or_default() -> Self {
        match env::var(PROFILE_ENV)
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "strict" => Self::strict(),
            _ => Self::default(),
        }
    }

    /// Parse a YAML override; absent fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn with_teams(mut self, team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        self.team_a = team_a.into();
        self.team_b = team_b.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.court.validate()?;

        if self.team_a.trim().is_empty() || self.team_b.trim().is_empty() {
            return Err(ConfigError::InvalidTeams(
                "team identifiers must not be empty".to_string(),
            ));
        }
        if self.team_a == self.team_b {
            return Err(ConfigError::InvalidTeams(format!(
                "cannot compare '{}' with itself",
                self.team_a
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_is_valid() {
        let court = CourtGeometry::default();
        assert!(court.validate().is_ok());
        assert!((court.exact_arc_break_y() - 8.9478).abs() < 1e-3);
    }

    #[test]
    fn test_arc_break_below_intersection_rejected() {
        let court = CourtGeometry {
            arc_break_y: 8.9,
            ..CourtGeometry::default()
        };
        assert!(matches!(
            court.validate(),
            Err(ConfigError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_non_finite_geometry_rejected() {
        let court = CourtGeometry {
            arc_radius: f64::NAN,
            ..CourtGeometry::default()
        };
        assert!(court.validate().is_err());
    }

    #[test]
    fn test_palettes_differ_only_on_non_corner_efg() {
        let reference = ChartPalette::reference();
        let grouped = ChartPalette::grouped();
        assert_eq!(
            reference.color_for(ShotZone::NonCornerThree, ChartMetric::EffectiveFieldGoal),
            ChartColor::Orange
        );
        assert_eq!(
            grouped.color_for(ShotZone::NonCornerThree, ChartMetric::EffectiveFieldGoal),
            ChartColor::Blue
        );
        assert_eq!(
            ChartPalette {
                non_corner_three_efg: ChartColor::Orange,
                ..grouped
            },
            reference
        );
    }

    #[test]
    fn test_yaml_override_keeps_defaults() {
        let yaml = r#"
arc_break: two_point
team_a: Home
team_b: Away
palette:
  non_corner_three_efg: blue
"#;
        let config = AnalysisConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.arc_break, ArcBreakPolicy::TwoPoint);
        assert_eq!(config.team_a, "Home");
        assert_eq!(config.court, CourtGeometry::default());
        assert_eq!(config.palette, ChartPalette::grouped());
    }

    #[test]
    fn test_yaml_with_invalid_geometry_fails() {
        let yaml = "court:\n  corner_x: 30.0\n";
        assert!(AnalysisConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_profiles() {
        assert_eq!(
            AnalysisConfig::from_profile("Strict").unwrap(),
            AnalysisConfig::strict()
        );
        assert_eq!(
            AnalysisConfig::from_profile("reference").unwrap(),
            AnalysisConfig::default()
        );
        assert!(matches!(
            AnalysisConfig::from_profile("arcade"),
            Err(ConfigError::UnknownProfile(_))
        ));
    }

    // The only test touching SHOT_ZONE_PROFILE; keep every env case here so
    // parallel tests never race on the variable.
    #[test]
    fn test_from_env_or_default() {
        env::set_var(PROFILE_ENV, "STRICT");
        assert_eq!(AnalysisConfig::from_env_or_default(), AnalysisConfig::strict());

        env::set_var(PROFILE_ENV, "arcade");
        assert_eq!(AnalysisConfig::from_env_or_default(), AnalysisConfig::default());

        env::remove_var(PROFILE_ENV);
        assert_eq!(AnalysisConfig::from_env_or_default(), AnalysisConfig::default());
    }

    #[test]
    fn test_same_team_rejected() {
        let config = AnalysisConfig::default().with_teams("Team A", "Team A");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTeams(_))
        ));
    }

    #[test]
    fn test_from_yaml_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "team_a: Lakers\nteam_b: Celtics").unwrap();
        let config = AnalysisConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.team_a, "Lakers");
        assert_eq!(config.team_b, "Celtics");
        assert_eq!(config.arc_break, ArcBreakPolicy::Reference);
    }
}
