//! Path management for quit-tracker
//!
//! Every file the tracker touches lives under a single base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `QUIT_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `quit-tracker`
//!    (`~/.config/quit-tracker` on Linux, `%APPDATA%\quit-tracker\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "QUIT_TRACKER_DATA_DIR";

/// Manages all paths used by quit-tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from the environment override or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the daily entry history
    pub fn history_file(&self) -> PathBuf {
        self.base_dir.join("progress.json")
    }

    /// Path to the user settings
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("user_settings.json")
    }

    /// Path to the language-keyed quote table
    pub fn quotes_file(&self) -> PathBuf {
        self.base_dir.join("quotes.json")
    }

    /// Path to the language-keyed label table
    pub fn translations_file(&self) -> PathBuf {
        self.base_dir.join("translations.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been saved
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    ProjectDirs::from("", "", "quit-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TrackerError::Config("Could not determine home directory".into()))
}
