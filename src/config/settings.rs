//! User settings for tally
//!
//! Manages user preferences: the previous-month baseline used by the
//! analytics comparison and the output filename prefix. The baseline is an
//! injected value rather than a literal so the comparison logic can be
//! exercised against arbitrary baselines.

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;

fn default_baseline() -> f64 {
    3000.0
}

/// User settings for tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Previous-month spending baseline each category total is compared to
    #[serde(default = "default_baseline")]
    pub baseline: f64,

    /// Prefix prepended to the output filename
    #[serde(default)]
    pub filename_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            filename_prefix: String::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let settings_file = paths.settings_file();

        if settings_file.exists() {
            let contents = std::fs::read_to_string(&settings_file)
                .map_err(|e| TallyError::Config(format!("Failed to read settings: {}", e)))?;
            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| TallyError::Config(format!("Failed to parse settings: {}", e)))?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TallyError::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}
