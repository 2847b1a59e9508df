//! Shot Log Source - CSV → Vec<ShotRecord>
//!
//! Expected header columns (any order, extra columns ignored):
//! - `team` - team identifier
//! - `x`, `y` - hoop-centred coordinates in feet
//! - `fgmade` or `made` - `1`/`0` or `true`/`false`
//!
//! Rows that fail to parse are skipped with a warning unless the load runs
//! in `LoadMode::Strict`.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use shot_core::ShotRecord;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Column names accepted for the make/miss flag, in lookup order.
const MADE_COLUMNS: [&str; 2] = ["fgmade", "made"];

#[derive(Error, Debug, PartialEq)]
pub enum LoadError {
    #[error("missing required column '{0}'")]
    MissingField(String),

    #[error("line {line}: missing value for '{column}'")]
    MissingValue { line: u64, column: String },

    #[error("line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Skip unparseable rows and count them
    #[default]
    Lenient,
    /// Fail on the first unparseable row
    Strict,
}

/// CSV parsing statistics
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
    /// Parsed shots per team
    pub teams: FxHashMap<String, u32>,
}

impl ParseStats {
    pub fn shots_for(&self, team: &str) -> u32 {
        self.teams.get(team).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    team: usize,
    x: usize,
    y: usize,
    made: usize,
    made_name: &'static str,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> std::result::Result<Self, LoadError> {
        // Spreadsheet exports may prefix the first header with a UTF-8 BOM
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
        };
        let require =
            |name: &str| find(name).ok_or_else(|| LoadError::MissingField(name.to_string()));

        let (made, made_name) = MADE_COLUMNS
            .iter()
            .find_map(|name| find(*name).map(|idx| (idx, *name)))
            .ok_or_else(|| LoadError::MissingField(MADE_COLUMNS.join("|")))?;

        Ok(Self {
            team: require("team")?,
            x: require("x")?,
            y: require("y")?,
            made,
            made_name,
        })
    }
}

fn field<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    column: &str,
    line: u64,
) -> std::result::Result<&'r str, LoadError> {
    match record.get(idx).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(LoadError::MissingValue {
            line,
            column: column.to_string(),
        }),
    }
}

fn parse_coordinate(value: &str, column: &str, line: u64) -> std::result::Result<f64, LoadError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LoadError::InvalidValue {
            line,
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_made(value: &str, column: &str, line: u64) -> std::result::Result<bool, LoadError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" | "t" | "yes" => Ok(true),
        "0" | "0.0" | "false" | "f" | "no" => Ok(false),
        _ => Err(LoadError::InvalidValue {
            line,
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_row(
    record: &csv::StringRecord,
    columns: &Columns,
    line: u64,
) -> std::result::Result<ShotRecord, LoadError> {
    let team = field(record, columns.team, "team", line)?;
    let x = parse_coordinate(field(record, columns.x, "x", line)?, "x", line)?;
    let y = parse_coordinate(field(record, columns.y, "y", line)?, "y", line)?;
    let made = parse_made(
        field(record, columns.made, columns.made_name, line)?,
        columns.made_name,
        line,
    )?;
    Ok(ShotRecord::new(team, x, y, made))
}

/// Parse a shot log from any reader.
pub fn read_shots<R: Read>(reader: R, mode: LoadMode) -> Result<(Vec<ShotRecord>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let columns = Columns::locate(&headers)?;

    let mut shots = Vec::new();
    let mut stats = ParseStats::default();

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1
        let line = idx as u64 + 2;
        stats.total_rows += 1;

        let record = match result {
            Ok(record) => record,
            Err(err) if mode == LoadMode::Lenient => {
                stats.failed += 1;
                warn!("Skipping unreadable line {}: {}", line, err);
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read CSV line {}", line))
            }
        };
        match parse_row(&record, &columns, line) {
            Ok(shot) => {
                stats.parsed += 1;
                *stats.teams.entry(shot.team().to_string()).or_insert(0) += 1;
                shots.push(shot);
            }
            Err(err) if mode == LoadMode::Lenient => {
                stats.failed += 1;
                warn!("Skipping row: {}", err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok((shots, stats))
}

/// Load a shot log from a CSV file.
pub fn load_shots(csv_path: &Path, mode: LoadMode) -> Result<(Vec<ShotRecord>, ParseStats)> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;
    read_shots(file, mode).with_context(|| format!("Failed to load {}", csv_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
team,x,y,fgmade
Team A,23,5,1
Team B,0,25,0
Team A,10,5,1
";

    #[test]
    fn test_read_shots() -> Result<()> {
        let (shots, stats) = read_shots(SAMPLE.as_bytes(), LoadMode::Strict)?;
        assert_eq!(shots.len(), 3);
        assert_eq!(stats.parsed, 3);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.shots_for("Team A"), 2);
        assert_eq!(stats.shots_for("Team C"), 0);

        assert_eq!(shots[1].team(), "Team B");
        assert_eq!(shots[1].distance(), 25.0);
        assert!(!shots[1].made());
        Ok(())
    }

    #[test]
    fn test_made_column_and_column_order() -> Result<()> {
        let csv = "made,y,x,team,period\ntrue,-1.5,22,Team A,1\nfalse,3,4,Team B,2\n";
        let (shots, _) = read_shots(csv.as_bytes(), LoadMode::Strict)?;
        assert_eq!(shots[0].x(), 22.0);
        assert_eq!(shots[0].y(), -1.5);
        assert!(shots[0].made());
        assert!(!shots[1].made());
        Ok(())
    }

    #[test]
    fn test_missing_column_is_missing_field() {
        let csv = "team,x,fgmade\nTeam A,1,1\n";
        let err = read_shots(csv.as_bytes(), LoadMode::Lenient).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LoadError>(),
            Some(&LoadError::MissingField("y".to_string()))
        );
    }

    #[test]
    fn test_missing_made_column() {
        let csv = "team,x,y\nTeam A,1,1\n";
        let err = read_shots(csv.as_bytes(), LoadMode::Lenient).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MissingField(_))
        ));
    }

    #[test]
    fn test_lenient_skips_bad_rows() -> Result<()> {
        let csv = "team,x,y,fgmade\nTeam A,abc,5,1\nTeam A,1,,1\nTeam A,1,2,maybe\nTeam A,1,2,0\n";
        let (shots, stats) = read_shots(csv.as_bytes(), LoadMode::Lenient)?;
        assert_eq!(shots.len(), 1);
        assert_eq!(stats.total_rows, 4);
        assert_eq!(stats.failed, 3);
        Ok(())
    }

    #[test]
    fn test_strict_fails_on_bad_row() {
        let csv = "team,x,y,fgmade\nTeam A,1,2,0\nTeam A,abc,5,1\n";
        let err = read_shots(csv.as_bytes(), LoadMode::Strict).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LoadError>(),
            Some(&LoadError::InvalidValue {
                line: 3,
                column: "x".to_string(),
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_lenient_skips_unreadable_row() -> Result<()> {
        let csv: &[u8] = b"team,x,y,fgmade\nTeam A,1,2,1\nTeam \xff,3,4,0\nTeam A,5,6,1\n";
        let (shots, stats) = read_shots(csv, LoadMode::Lenient)?;
        assert_eq!(shots.len(), 2);
        assert_eq!(stats.total_rows, 3);
        assert_eq!(stats.parsed, 2);
        assert_eq!(stats.failed, 1);
        Ok(())
    }

    #[test]
    fn test_strict_fails_on_unreadable_row() {
        let csv: &[u8] = b"team,x,y,fgmade\nTeam A,1,2,1\nTeam \xff,3,4,0\n";
        let err = read_shots(csv, LoadMode::Strict).unwrap_err();
        assert!(format!("{:#}", err).contains("line 3"));
    }

    #[test]
    fn test_header_with_byte_order_mark() -> Result<()> {
        let csv = "\u{feff}team,x,y,fgmade\nTeam A,1,2,1\n";
        let (shots, stats) = read_shots(csv.as_bytes(), LoadMode::Strict)?;
        assert_eq!(shots.len(), 1);
        assert_eq!(stats.shots_for("Team A"), 1);
        Ok(())
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let csv = "team,x,y,fgmade\nTeam A,NaN,5,1\n";
        assert!(read_shots(csv.as_bytes(), LoadMode::Strict).is_err());
    }
}
