//! Persistent high score
//!
//! A single best survival time (whole seconds) stored as a decimal integer
//! in a plain-text file. A missing or garbled file is the same as no score
//! yet; the file is only written when a session beats the stored value.

use std::fs;
use std::path::{Path, PathBuf};

/// Best survival time across sessions, backed by a text file
#[derive(Debug, Clone)]
pub struct HighScore {
    best: u64,
    path: PathBuf,
}

impl HighScore {
    /// File name under the data directory
    pub const FILE_NAME: &'static str = "score.txt";

    /// Load the stored high score, defaulting to 0 on any failure
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = read_score(&path);
        if best > 0 {
            log::info!("Loaded high score: {}s", best);
        } else {
            log::info!("No high score on record yet");
        }
        Self { best, path }
    }

    /// Current best survival time in seconds
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record a completed session's score
    ///
    /// Persists and returns true only when `score` strictly beats the
    /// stored best. A write failure keeps the new best in memory and is
    /// logged rather than surfaced.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(err) = fs::write(&self.path, self.best.to_string()) {
            log::warn!("Failed to save high score to {:?}: {}", self.path, err);
        } else {
            log::info!("New high score: {}s", self.best);
        }
        true
    }
}

fn read_score(path: &Path) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_score_path(tag: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("cubefall-test-{}-{}.txt", tag, std::process::id()));
        path
    }

    #[test]
    fn missing_file_means_zero() {
        let path = temp_score_path("missing");
        let _ = fs::remove_file(&path);
        let hs = HighScore::load(&path);
        assert_eq!(hs.best(), 0);
    }

    #[test]
    fn garbled_file_means_zero() {
        let path = temp_score_path("garbled");
        fs::write(&path, "not a number").unwrap();
        let hs = HighScore::load(&path);
        assert_eq!(hs.best(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn stored_score_round_trips() {
        let path = temp_score_path("roundtrip");
        fs::write(&path, "10").unwrap();

        let mut hs = HighScore::load(&path);
        assert_eq!(hs.best(), 10);

        // Beating the stored score overwrites the file
        assert!(hs.record(42));
        assert_eq!(fs::read_to_string(&path).unwrap(), "42");

        // A worse run leaves it alone
        assert!(!hs.record(5));
        assert_eq!(hs.best(), 42);
        assert_eq!(fs::read_to_string(&path).unwrap(), "42");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn equal_score_does_not_count() {
        let path = temp_score_path("equal");
        fs::write(&path, "42").unwrap();
        let mut hs = HighScore::load(&path);
        assert!(!hs.record(42));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn whitespace_is_tolerated() {
        let path = temp_score_path("whitespace");
        fs::write(&path, "  17\n").unwrap();
        let hs = HighScore::load(&path);
        assert_eq!(hs.best(), 17);
        let _ = fs::remove_file(&path);
    }
}
