//! High score persistence: a single integer under a fixed key in a small
//! JSON file. Storage trouble never reaches the simulation: an unreadable
//! file reads as 0, a failed write is skipped and the in-memory best still
//! advances.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk shape of the store.
#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    #[serde(rename = "snake-highscore")]
    best: u32,
}

/// The session's best score, mirrored to disk whenever it is beaten.
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    /// Open the store, reading the saved best once. Missing or corrupt
    /// files yield a best of 0.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = Self::read(&path).unwrap_or(0);
        Self { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a score. When it beats the stored best, the best is updated
    /// and written through; returns true in that case. Write failures are
    /// swallowed, so re-recording the same score retries the write.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.write().ok();
        true
    }

    fn read(path: &Path) -> Option<u32> {
        let raw = std::fs::read_to_string(path).ok()?;
        serde_json::from_str::<HighScoreFile>(&raw)
            .ok()
            .map(|file| file.best)
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }
        let json = serde_json::to_string_pretty(&HighScoreFile { best: self.best })
            .context("Failed to serialize high score")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "neon-snake-{}-{}-highscore.json",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        let store = HighScoreStore::open(&path);
        assert_eq!(store.best(), 0);
    }

    #[test]
    fn test_corrupt_file_reads_zero() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json at all").unwrap();
        let store = HighScoreStore::open(&path);
        assert_eq!(store.best(), 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_record_and_reload() {
        let path = temp_path("reload");
        let _ = std::fs::remove_file(&path);

        let mut store = HighScoreStore::open(&path);
        assert!(store.record(120));
        assert_eq!(store.best(), 120);

        let reopened = HighScoreStore::open(&path);
        assert_eq!(reopened.best(), 120);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_best_is_monotonic() {
        let path = temp_path("monotonic");
        let _ = std::fs::remove_file(&path);

        let mut store = HighScoreStore::open(&path);
        assert!(store.record(50));
        assert!(!store.record(30));
        assert_eq!(store.best(), 50);
        assert!(!store.record(50));
        assert!(store.record(70));
        assert_eq!(store.best(), 70);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_uses_fixed_key() {
        let path = temp_path("key");
        let _ = std::fs::remove_file(&path);

        let mut store = HighScoreStore::open(&path);
        store.record(40);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("snake-highscore"));
        let _ = std::fs::remove_file(&path);
    }
}
