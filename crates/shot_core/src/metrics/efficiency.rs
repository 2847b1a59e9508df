//! # Shooting Efficiency
//!
//! - FG% = `100 * makes / attempts`
//! - eFG% = `100 * (makes + 0.5 * threes_made) / attempts`
//!
//! Both round half away from zero to two decimals on the binary `f64`, so a
//! value such as 12.345 (stored as 12.34499...) rounds down. Zero attempts
//! yield `MetricsError::DivisionUndefined`, never 0 or NaN.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};
use crate::geometry::{ShotZone, ZoneBucket};

/// Weight of the extra point on a made three.
pub const THREE_POINT_BONUS: f64 = 0.5;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn check_counts(makes: u32, attempts: u32) -> Result<()> {
    if attempts == 0 {
        return Err(MetricsError::DivisionUndefined);
    }
    if makes > attempts {
        return Err(MetricsError::MakesExceedAttempts { makes, attempts });
    }
    Ok(())
}

/// Field-goal percentage, rounded to two decimals.
///
/// # Examples
/// ```
/// use shot_core::metrics::fg_pct;
///
/// assert_eq!(fg_pct(2, 4).unwrap(), 50.0);
/// assert_eq!(fg_pct(1, 3).unwrap(), 33.33);
/// assert!(fg_pct(0, 0).is_err());
/// ```
pub fn fg_pct(makes: u32, attempts: u32) -> Result<f64> {
    check_counts(makes, attempts)?;
    Ok(round2(100.0 * makes as f64 / attempts as f64))
}

/// Effective field-goal percentage, rounded to two decimals.
///
/// # Examples
/// ```
/// use shot_core::metrics::efg_pct;
///
/// assert_eq!(efg_pct(2, 2, 4).unwrap(), 75.0);
/// assert_eq!(efg_pct(3, 0, 4).unwrap(), 75.0);
/// ```
pub fn efg_pct(makes: u32, threes_made: u32, attempts: u32) -> Result<f64> {
    check_counts(makes, attempts)?;
    if threes_made > makes {
        return Err(MetricsError::ThreesExceedMakes { threes_made, makes });
    }
    let weighted = makes as f64 + THREE_POINT_BONUS * threes_made as f64;
    Ok(round2(100.0 * weighted / attempts as f64))
}

/// Counts for one team in one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneMetrics {
    pub zone: ShotZone,
    pub attempts: u32,
    pub makes: u32,
    /// Made threes; every make in a three-point zone, none for two-pointers
    pub threes_made: u32,
}

impl ZoneMetrics {
    pub fn from_bucket(bucket: &ZoneBucket<'_>) -> Self {
        let makes = bucket.makes();
        let threes_made = if bucket.zone().is_three() { makes } else { 0 };
        Self {
            zone: bucket.zone(),
            attempts: bucket.attempts(),
            makes,
            threes_made,
        }
    }

    pub fn misses(&self) -> u32 {
        self.attempts.saturating_sub(self.makes)
    }

    pub fn is_empty(&self) -> bool {
        self.attempts == 0
    }

    pub fn fg_pct(&self) -> Result<f64> {
        fg_pct(self.makes, self.attempts)
    }

    /// Evaluated even for two-pointers, where it equals FG%.
    pub fn efg_pct(&self) -> Result<f64> {
        efg_pct(self.makes, self.threes_made, self.attempts)
    }

    /// Points scored from this zone.
    pub fn points(&self) -> u32 {
        self.makes * self.zone.point_value() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShotRecord;

    #[test]
    fn test_corner_three_scenario() {
        let metrics = ZoneMetrics {
            zone: ShotZone::CornerThree,
            attempts: 4,
            makes: 2,
            threes_made: 2,
        };
        assert_eq!(metrics.fg_pct().unwrap(), 50.0);
        assert_eq!(metrics.efg_pct().unwrap(), 75.0);
        assert_eq!(metrics.points(), 6);
    }

    #[test]
    fn test_zero_attempts_is_undefined() {
        assert_eq!(fg_pct(0, 0), Err(MetricsError::DivisionUndefined));
        assert_eq!(efg_pct(0, 0, 0), Err(MetricsError::DivisionUndefined));
        // A valid zero is still a value
        assert_eq!(fg_pct(0, 5).unwrap(), 0.0);
    }

    #[test]
    fn test_makes_exceed_attempts_rejected() {
        assert_eq!(
            fg_pct(5, 4),
            Err(MetricsError::MakesExceedAttempts {
                makes: 5,
                attempts: 4
            })
        );
    }

    #[test]
    fn test_threes_exceed_makes_rejected() {
        assert_eq!(
            efg_pct(1, 5, 4),
            Err(MetricsError::ThreesExceedMakes {
                threes_made: 5,
                makes: 1
            })
        );
        assert!(efg_pct(4, 40, 4).is_err());
        assert_eq!(efg_pct(4, 4, 4).unwrap(), 150.0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(fg_pct(1, 3).unwrap(), 33.33);
        assert_eq!(fg_pct(2, 3).unwrap(), 66.67);
        assert_eq!(efg_pct(1, 1, 3).unwrap(), 50.0);
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn test_from_bucket_two_point_has_no_threes() {
        let shots = vec![
            ShotRecord::new("Team A", 1.0, 1.0, true),
            ShotRecord::new("Team A", 2.0, 2.0, false),
            ShotRecord::new("Team A", 3.0, 3.0, true),
        ];
        let bucket = ZoneBucket::new(ShotZone::TwoPoint, "Team A", shots.iter().collect());
        let metrics = ZoneMetrics::from_bucket(&bucket);
        assert_eq!(metrics.attempts, 3);
        assert_eq!(metrics.makes, 2);
        assert_eq!(metrics.threes_made, 0);
        assert_eq!(metrics.misses(), 1);
        assert_eq!(metrics.fg_pct(), metrics.efg_pct());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: two-point eFG% coincides with FG%
            #[test]
            fn prop_two_point_efg_equals_fg(attempts in 1u32..500, ratio in 0.0f64..=1.0) {
                let makes = (attempts as f64 * ratio).floor() as u32;
                let metrics = ZoneMetrics { zone: ShotZone::TwoPoint, attempts, makes, threes_made: 0 };
                prop_assert_eq!(metrics.fg_pct().unwrap(), metrics.efg_pct().unwrap());
            }

            /// Property: made threes never lower eFG% below FG%
            #[test]
            fn prop_efg_at_least_fg(attempts in 1u32..500, ratio in 0.0f64..=1.0) {
                let makes = (attempts as f64 * ratio).floor() as u32;
                let fg = fg_pct(makes, attempts).unwrap();
                let efg = efg_pct(makes, makes, attempts).unwrap();
                prop_assert!(efg >= fg);
                if makes > 0 {
                    prop_assert!(efg > fg);
                }
            }

            /// Property: percentages stay within [0, 100] for FG% and [0, 150] for eFG%
            #[test]
            fn prop_percentages_bounded(attempts in 1u32..500, ratio in 0.0f64..=1.0) {
                let makes = (attempts as f64 * ratio).floor() as u32;
                let fg = fg_pct(makes, attempts).unwrap();
                let efg = efg_pct(makes, makes, attempts).unwrap();
                prop_assert!((0.0..=100.0).contains(&fg));
                prop_assert!((0.0..=150.0).contains(&efg));
            }
        }
    }
}
