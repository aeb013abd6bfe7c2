//! Path management for Tally
//!
//! ## Path Resolution Order
//!
//! 1. `TALLY_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory for "tally", as reported by `directories`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TallyError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TALLY_CONFIG_DIR";

/// Manages the paths used by Tally
#[derive(Debug, Clone)]
pub struct TallyPaths {
    base_dir: PathBuf,
}

impl TallyPaths {
    /// Resolve the config directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TallyError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "tally")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    TallyError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create TallyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), TallyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TallyError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if Tally has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
