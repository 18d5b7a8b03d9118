//! Game settings and preferences
//!
//! Stored as JSON next to the high-score file. Loaded leniently: a missing
//! or unreadable file just yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Colored output (disable for monochrome terminals)
    pub color: bool,
    /// Show the tick/frame counter in the HUD
    pub show_fps: bool,
    /// Fixed session seed; 0 means seed from the clock each run
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            show_fps: false,
            seed: 0,
        }
    }
}

impl Settings {
    /// File name under the data directory
    pub const FILE_NAME: &'static str = "settings.json";

    /// Load settings, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        if let Ok(s) = fs::read_to_string(path) {
            if let Ok(settings) = serde_json::from_str(&s) {
                log::info!("Loaded settings from {:?}", path);
                return settings;
            }
            log::warn!("Ignoring unreadable settings file {:?}", path);
        }
        Self::default()
    }

    /// Persist settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}

/// Where the settings and high-score files live
pub struct Paths {
    pub settings_path: PathBuf,
    pub score_path: PathBuf,
}

/// Resolve the per-user data directory, falling back to the working
/// directory when no home is available.
pub fn project_paths() -> Paths {
    let dir = ProjectDirs::from("", "", "cubefall")
        .map(|proj| proj.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let _ = fs::create_dir_all(&dir);
    Paths {
        settings_path: dir.join(Settings::FILE_NAME),
        score_path: dir.join(crate::HighScore::FILE_NAME),
    }
}
