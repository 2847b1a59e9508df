use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ChartColor;
use crate::geometry::ShotZone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMetric {
    FieldGoal,
    EffectiveFieldGoal,
}

impl ChartMetric {
    pub const ALL: [ChartMetric; 2] = [ChartMetric::FieldGoal, ChartMetric::EffectiveFieldGoal];

    pub fn short_label(&self) -> &'static str {
        match self {
            ChartMetric::FieldGoal => "FG%",
            ChartMetric::EffectiveFieldGoal => "eFG%",
        }
    }

    /// Formula shown on the value axis
    pub fn axis_title(&self) -> &'static str {
        match self {
            ChartMetric::FieldGoal => "fg% (FGM/FGA) *100",
            ChartMetric::EffectiveFieldGoal => "Efg% ((FGM +(0.5 *3pt))/FGA))",
        }
    }

    fn category_suffix(&self) -> &'static str {
        match self {
            ChartMetric::FieldGoal => "fg%",
            ChartMetric::EffectiveFieldGoal => "efg%",
        }
    }

    pub fn chart_title(&self, zone: ShotZone) -> String {
        format!("{} {}", zone.title(), self.short_label())
    }

    pub fn category_title(&self, zone: ShotZone) -> String {
        format!("Teams {} {}", zone.label(), self.category_suffix())
    }
}

impl fmt::Display for ChartMetric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.short_label())
    }
}

/// One two-bar comparison handed to a rendering sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub zone: ShotZone,
    pub metric: ChartMetric,
    pub team_a_label: String,
    pub team_a_value: f64,
    pub team_b_label: String,
    pub team_b_value: f64,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub chart_title: String,
    pub color: ChartColor,
}

impl ChartRequest {
    /// Bar label as printed above each bar, e.g. `"50.0%"`.
    pub fn value_label(value: f64) -> String {
        format!("{:?}%", value)
    }

    pub fn bars(&self) -> [(&str, f64); 2] {
        [
            (self.team_a_label.as_str(), self.team_a_value),
            (self.team_b_label.as_str(), self.team_b_value),
        ]
    }
}

/// Rendering collaborator consuming chart requests.
pub trait ChartSink {
    type Error;

    fn render(&mut self, request: &ChartRequest) -> Result<(), Self::Error>;

    /// Called once after the last request.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Hands every request to `sink` in order, then finishes it.
pub fn render_all<S: ChartSink>(sink: &mut S, requests: &[ChartRequest]) -> Result<(), S::Error> {
    for request in requests {
        tracing::debug!(title = %request.chart_title, color = %request.color, "render chart");
        sink.render(request)?;
    }
    sink.finish()
}

pub fn requests_to_json(requests: &[ChartRequest]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(requests)
}

/// Collects requests in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub requests: Vec<ChartRequest>,
    pub finished: bool,
}

impl ChartSink for MemorySink {
    type Error = std::convert::Infallible;

    fn render(&mut self, request: &ChartRequest) -> Result<(), Self::Error> {
        self.requests.push(request.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(
            ChartMetric::FieldGoal.chart_title(ShotZone::TwoPoint),
            "Two Pointers FG%"
        );
        assert_eq!(
            ChartMetric::EffectiveFieldGoal.category_title(ShotZone::NonCornerThree),
            "Teams non-corner 3 pointers efg%"
        );
    }

    #[test]
    fn test_value_label_keeps_decimal() {
        assert_eq!(ChartRequest::value_label(50.0), "50.0%");
        assert_eq!(ChartRequest::value_label(33.33), "33.33%");
    }
}
