//! Path management for tally
//!
//! Provides XDG-compliant path resolution for the settings file and desktop
//! detection for the output spreadsheet.
//!
//! ## Path Resolution Order
//!
//! 1. `TALLY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/tally-cli` or `~/.config/tally-cli`
//! 3. Windows: `%APPDATA%\tally-cli`

use std::path::PathBuf;

use directories::UserDirs;

use crate::error::TallyError;

/// Manages the configuration paths used by tally
#[derive(Debug, Clone)]
pub struct TallyPaths {
    /// Base directory for all tally configuration
    base_dir: PathBuf,
}

impl TallyPaths {
    /// Create a new TallyPaths instance
    ///
    /// Path resolution:
    /// 1. `TALLY_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/tally-cli` or `~/.config/tally-cli`
    /// 3. Windows: `%APPDATA%\tally-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TallyError> {
        let base_dir = if let Ok(custom) = std::env::var("TALLY_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TallyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/tally-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TallyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TallyError::Io(format!("Failed to create config directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default configuration directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TallyError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| TallyError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("tally-cli"))
}

/// Resolve the default configuration directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TallyError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TallyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("tally-cli"))
}

/// Resolve the directory the spreadsheet is written into
///
/// The user's desktop folder if it exists, otherwise the current working
/// directory.
pub fn resolve_output_dir() -> PathBuf {
    output_dir_from(desktop_dir())
}

/// Locate the desktop folder from the user's home directory
fn desktop_dir() -> Option<PathBuf> {
    UserDirs::new().and_then(|dirs| dirs.desktop_dir().map(PathBuf::from))
}

fn output_dir_from(desktop: Option<PathBuf>) -> PathBuf {
    match desktop {
        Some(dir) if dir.exists() => dir,
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
