//! # Team Comparison
//!
//! Final composition step: both teams' zone metrics side by side, and the
//! six chart requests built from them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::chart::{ChartMetric, ChartRequest};
use crate::config::{AnalysisConfig, ChartPalette};
use crate::error::{ConfigError, MetricsError, Result};
use crate::geometry::{ShotZone, ZoneClassifier, ZoneSummary};
use crate::metrics::ZoneMetrics;
use crate::models::ShotRecord;

/// One team's metrics for every zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub team: String,
    pub summary: ZoneSummary,
    pub two_point: ZoneMetrics,
    pub corner_three: ZoneMetrics,
    pub non_corner_three: ZoneMetrics,
}

impl TeamReport {
    pub fn build(classifier: &ZoneClassifier, shots: &[ShotRecord], team: &str) -> Self {
        let partition = classifier.partition(shots, team);
        Self {
            team: team.to_string(),
            summary: partition.summary(),
            two_point: ZoneMetrics::from_bucket(&partition.two_point),
            corner_three: ZoneMetrics::from_bucket(&partition.corner_three),
            non_corner_three: ZoneMetrics::from_bucket(&partition.non_corner_three),
        }
    }

    pub fn zone(&self, zone: ShotZone) -> &ZoneMetrics {
        match zone {
            ShotZone::TwoPoint => &self.two_point,
            ShotZone::CornerThree => &self.corner_three,
            ShotZone::NonCornerThree => &self.non_corner_three,
        }
    }

    /// Percentage for one chart, naming team and zone when undefined.
    pub fn value(&self, zone: ShotZone, metric: ChartMetric) -> Result<f64> {
        let metrics = self.zone(zone);
        let value = match metric {
            ChartMetric::FieldGoal => metrics.fg_pct(),
            ChartMetric::EffectiveFieldGoal => metrics.efg_pct(),
        };
        value.map_err(|err| match err {
            MetricsError::DivisionUndefined => MetricsError::EmptyZone {
                team: self.team.clone(),
                zone,
            },
            other => other,
        })
    }

    pub fn total_points(&self) -> u32 {
        ShotZone::ALL.iter().map(|zone| self.zone(*zone).points()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamComparison {
    pub team_a: TeamReport,
    pub team_b: TeamReport,
    pub palette: ChartPalette,
}

/// Classifies and aggregates both configured teams.
///
/// Fails with `ConfigError` before classifying anything if `config` does not
/// validate.
pub fn compare_teams(
    shots: &[ShotRecord],
    config: &AnalysisConfig,
) -> std::result::Result<TeamComparison, ConfigError> {
    config.validate()?;
    let classifier = ZoneClassifier::from_config(config);
    let team_a = TeamReport::build(&classifier, shots, &config.team_a);
    let team_b = TeamReport::build(&classifier, shots, &config.team_b);

    info!(
        team_a = %team_a.team,
        team_a_shots = team_a.summary.total(),
        team_b = %team_b.team,
        team_b_shots = team_b.summary.total(),
        "teams compared"
    );

    Ok(TeamComparison {
        team_a,
        team_b,
        palette: config.palette,
    })
}

impl TeamComparison {
    pub fn chart_request(&self, zone: ShotZone, metric: ChartMetric) -> Result<ChartRequest> {
        let request = ChartRequest {
            zone,
            metric,
            team_a_label: self.team_a.team.clone(),
            team_a_value: self.team_a.value(zone, metric)?,
            team_b_label: self.team_b.team.clone(),
            team_b_value: self.team_b.value(zone, metric)?,
            x_axis_title: metric.category_title(zone),
            y_axis_title: metric.axis_title().to_string(),
            chart_title: metric.chart_title(zone),
            color: self.palette.color_for(zone, metric),
        };
        debug!(
            title = %request.chart_title,
            team_a_value = request.team_a_value,
            team_b_value = request.team_b_value,
            "chart request"
        );
        Ok(request)
    }

    /// The six requests in chart order: per zone, FG% then eFG%.
    pub fn chart_requests(&self) -> Result<Vec<ChartRequest>> {
        ShotZone::ALL
            .into_iter()
            .flat_map(|zone| ChartMetric::ALL.into_iter().map(move |metric| (zone, metric)))
            .map(|(zone, metric)| self.chart_request(zone, metric))
            .collect()
    }

    /// Requests whose values are defined for both teams; the rest are
    /// returned as errors alongside.
    pub fn defined_chart_requests(&self) -> (Vec<ChartRequest>, Vec<MetricsError>) {
        let mut requests = Vec::new();
        let mut undefined = Vec::new();
        for zone in ShotZone::ALL {
            for metric in ChartMetric::ALL {
                match self.chart_request(zone, metric) {
                    Ok(request) => requests.push(request),
                    Err(err) => undefined.push(err),
                }
            }
        }
        (requests, undefined)
    }
}
