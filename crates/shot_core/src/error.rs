use thiserror::Error;

use crate::geometry::ShotZone;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// A percentage was requested for a bucket with no attempts.
    #[error("percentage undefined: zero attempts")]
    DivisionUndefined,

    #[error("percentage undefined for {team} {zone}: zero attempts")]
    EmptyZone { team: String, zone: ShotZone },

    #[error("makes ({makes}) exceed attempts ({attempts})")]
    MakesExceedAttempts { makes: u32, attempts: u32 },

    /// Made threes are a subset of makes.
    #[error("threes made ({threes_made}) exceed makes ({makes})")]
    ThreesExceedMakes { threes_made: u32, makes: u32 },
}

impl MetricsError {
    /// True for both the bare and the team/zone-qualified zero-attempt case.
    pub fn is_division_undefined(&self) -> bool {
        matches!(
            self,
            MetricsError::DivisionUndefined | MetricsError::EmptyZone { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid court geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid team configuration: {0}")]
    InvalidTeams(String),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
