//! Chart sinks - where chart requests end up.
//!
//! - `JsonFileSink` writes every request to one pretty-printed JSON file
//! - `TableSink` prints each chart as two text bars

use anyhow::{Context, Result};
use shot_core::report::requests_to_json;
use shot_core::{ChartRequest, ChartSink};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Bar width for the largest possible value (eFG% of 150).
const BAR_WIDTH: usize = 45;
const BAR_SCALE_MAX: f64 = 150.0;

pub struct JsonFileSink {
    path: PathBuf,
    requests: Vec<ChartRequest>,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            requests: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartSink for JsonFileSink {
    type Error = anyhow::Error;

    fn render(&mut self, request: &ChartRequest) -> Result<()> {
        self.requests.push(request.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }

        let json = requests_to_json(&self.requests).context("Failed to serialize chart requests")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write output file: {}", self.path.display()))?;
        Ok(())
    }
}

pub struct TableSink<W: Write> {
    out: W,
}

impl<W: Write> TableSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TableSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

fn bar(value: f64) -> String {
    let filled = ((value / BAR_SCALE_MAX) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

impl<W: Write> ChartSink for TableSink<W> {
    type Error = anyhow::Error;

    fn render(&mut self, request: &ChartRequest) -> Result<()> {
        let label_width = request
            .bars()
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(self.out, "\n{} ({})", request.chart_title, request.color)?;
        writeln!(self.out, "  {}", request.y_axis_title)?;
        for (label, value) in request.bars() {
            writeln!(
                self.out,
                "  {:<width$} | {} {}",
                label,
                bar(value),
                ChartRequest::value_label(value),
                width = label_width
            )?;
        }
        writeln!(self.out, "  {}", request.x_axis_title)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
