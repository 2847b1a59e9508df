//! Shot Charts Library
//!
//! CSV shot log → zone classification → efficiency metrics → chart requests

pub mod metadata;
pub mod sinks;
pub mod source;

use anyhow::{Context, Result};
use shot_core::geometry::{ZoneClassifier, ZoneSummary};
use shot_core::{compare_teams, AnalysisConfig, ChartRequest, MetricsError, TeamComparison};
use std::path::Path;
use tracing::warn;

pub use metadata::{file_checksum, RunMetadata};
pub use sinks::{JsonFileSink, TableSink};
pub use source::{load_shots, read_shots, LoadError, LoadMode, ParseStats};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub mode: LoadMode,
    /// Drop charts with an undefined percentage instead of failing
    pub skip_undefined: bool,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub comparison: TeamComparison,
    pub requests: Vec<ChartRequest>,
    pub undefined: Vec<MetricsError>,
    pub metadata: RunMetadata,
}

/// Load `csv`, compare the configured teams and build their chart requests.
pub fn run_comparison(
    csv: &Path,
    config: &AnalysisConfig,
    options: RunOptions,
) -> Result<RunOutcome> {
    config.validate().context("Invalid analysis configuration")?;

    let checksum = file_checksum(csv)?;
    let (shots, stats) = load_shots(csv, options.mode)?;
    warn_missing_teams(&stats, config);

    let comparison = compare_teams(&shots, config)?;

    let (requests, undefined) = if options.skip_undefined {
        let (requests, undefined) = comparison.defined_chart_requests();
        for err in &undefined {
            warn!("Skipping chart: {}", err);
        }
        (requests, undefined)
    } else {
        let requests = comparison
            .chart_requests()
            .context("Cannot build chart requests")?;
        (requests, Vec::new())
    };

    let mut metadata = RunMetadata::new(csv, checksum, &stats);
    metadata.unclassified =
        comparison.team_a.summary.unclassified + comparison.team_b.summary.unclassified;
    metadata.charts = requests.len() as u32;
    metadata.undefined_charts = undefined.len() as u32;

    Ok(RunOutcome {
        comparison,
        requests,
        undefined,
        metadata,
    })
}

/// Per-zone attempt counts for both configured teams.
pub fn zone_summaries(csv: &Path, config: &AnalysisConfig, mode: LoadMode) -> Result<Vec<ZoneSummary>> {
    config.validate().context("Invalid analysis configuration")?;

    let (shots, stats) = load_shots(csv, mode)?;
    warn_missing_teams(&stats, config);

    let classifier = ZoneClassifier::from_config(config);
    Ok([config.team_a.as_str(), config.team_b.as_str()]
        .into_iter()
        .map(|team| classifier.partition(&shots, team).summary())
        .collect())
}

fn warn_missing_teams(stats: &ParseStats, config: &AnalysisConfig) {
    for team in [&config.team_a, &config.team_b] {
        if stats.shots_for(team) == 0 {
            warn!(team = %team, "no shots found for team");
        }
    }
}
