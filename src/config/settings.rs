//! User settings for Tally
//!
//! Settings hold the category registry offered to the user and the defaults
//! used when a new transaction is entered.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::{Category, CategoryRegistry, TransactionType, DEFAULT_CATEGORIES};

/// User settings for Tally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Categories offered for entry and filtering
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Reject categories missing from `categories` at the prompt
    #[serde(default = "default_true")]
    pub strict_categories: bool,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Type preselected for new transactions
    #[serde(default)]
    pub default_type: TransactionType,

    /// Category preselected for new transactions; unset means the first
    /// configured category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<Category>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            categories: default_categories(),
            strict_categories: true,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_type: TransactionType::default(),
            default_category: None,
        }
    }
}

impl Settings {
    /// The configured category registry
    pub fn registry(&self) -> CategoryRegistry {
        CategoryRegistry::new(&self.categories)
    }

    /// The category a new transaction gets when none is given
    pub fn entry_category(&self) -> Category {
        self.default_category
            .clone()
            .or_else(|| self.registry().iter().next().cloned())
            .unwrap_or_default()
    }

    /// Check values that serde alone cannot
    pub fn validate(&self) -> Result<(), TallyError> {
        // An unusable pattern makes chrono's formatter fail at display time.
        let probe_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
        let mut rendered = String::new();
        if write!(rendered, "{}", probe_date.format(&self.date_format)).is_err() {
            return Err(TallyError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TallyError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TallyError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;

        tracing::debug!(path = %settings_path.display(), "Settings loaded");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TallyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
