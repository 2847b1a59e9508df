use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::source::ParseStats;

/// Provenance of one comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Input CSV path as given
    pub input: String,
    /// SHA256 of the input file (hex)
    pub input_checksum: String,
    /// Generation time (RFC3339)
    pub created_at: String,
    pub rows: u32,
    pub parsed: u32,
    pub failed: u32,
    /// Shots that matched no zone, both teams
    pub unclassified: u32,
    pub charts: u32,
    /// Charts skipped because a team had no attempts in the zone
    pub undefined_charts: u32,
}

impl RunMetadata {
    pub fn new(input: &Path, input_checksum: String, stats: &ParseStats) -> Self {
        Self {
            input: input.display().to_string(),
            input_checksum,
            created_at: chrono::Utc::now().to_rfc3339(),
            rows: stats.total_rows,
            parsed: stats.parsed,
            failed: stats.failed,
            unclassified: 0,
            charts: 0,
            undefined_charts: 0,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write metadata file: {}", path.display()))
    }
}

pub fn file_checksum(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_checksum() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"abc")?;
        assert_eq!(
            file_checksum(file.path())?,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        Ok(())
    }

    #[test]
    fn test_metadata_roundtrip_through_file() -> Result<()> {
        let stats = ParseStats {
            total_rows: 10,
            parsed: 9,
            failed: 1,
            ..ParseStats::default()
        };
        let meta = RunMetadata::new(Path::new("shots.csv"), "00".to_string(), &stats);
        let out = NamedTempFile::new()?;
        meta.save(out.path())?;

        let loaded: RunMetadata = serde_json::from_str(&fs::read_to_string(out.path())?)?;
        assert_eq!(loaded.input, "shots.csv");
        assert_eq!(loaded.failed, 1);
        assert!(chrono::DateTime::parse_from_rfc3339(&loaded.created_at).is_ok());
        Ok(())
    }
}
