//! Saving and loading the persisted arcade counters
//!
//! The counters live outside the simulation core: they are read once at
//! startup and written back whenever a game ends.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Counters that survive across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub high_score: u32,
    pub games_played: u32,
    pub best_streak: u32,
}

/// Load counters from `path`
///
/// A missing file means a fresh player and yields default counters; an
/// unreadable or malformed file is an error.
pub fn load_stats(path: &Path) -> Result<StatsRecord> {
    if !path.exists() {
        return Ok(StatsRecord::default());
    }

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read stats from {:?}", path))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse stats in {:?}", path))
}

/// Write counters to `path`, creating parent directories as needed
pub fn save_stats(record: &StatsRecord, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    let json = serde_json::to_string_pretty(record).context("Failed to serialize stats")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write stats to {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stats.json");

        let record = StatsRecord {
            high_score: 120,
            games_played: 9,
            best_streak: 4,
        };

        save_stats(&record, &path).unwrap();
        let loaded = load_stats(&path).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let loaded = load_stats(&path).unwrap();
        assert_eq!(loaded, StatsRecord::default());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_stats(&path).is_err());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("stats.json");

        save_stats(&StatsRecord::default(), &path).unwrap();
        assert!(path.exists());
    }
}
