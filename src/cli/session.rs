//! State shared by every command of a CLI run
//!
//! The session owns the ledger for the lifetime of the process together with
//! the settings-derived registry and display options.

use std::path::Path;

use crate::config::Settings;
use crate::display::DisplayOptions;
use crate::error::{TallyError, TallyResult};
use crate::export::import_transactions_json;
use crate::models::{Category, CategoryRegistry};
use crate::services::Ledger;

/// A ledger together with the configuration the CLI presents it with
#[derive(Debug, Clone)]
pub struct Session {
    pub ledger: Ledger,
    pub settings: Settings,
    pub registry: CategoryRegistry,
    pub display: DisplayOptions,
}

impl Session {
    pub fn new(ledger: Ledger, settings: Settings) -> Self {
        Self {
            ledger,
            registry: settings.registry(),
            display: DisplayOptions::from(&settings),
            settings,
        }
    }

    /// Start from the transactions in a JSON export
    pub fn from_export_file(path: &Path, settings: Settings) -> TallyResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TallyError::Import(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let transactions = import_transactions_json(&contents)?;
        tracing::info!(path = %path.display(), count = transactions.len(), "Seeded from export");

        Ok(Self::new(Ledger::from_transactions(transactions)?, settings))
    }

    /// Reject categories outside the registry when strict checking is on
    pub fn check_category(&self, category: &Category) -> TallyResult<()> {
        if self.settings.strict_categories && !self.registry.contains(category) {
            return Err(TallyError::Validation(format!(
                "Unknown category '{}': expected one of {}",
                category,
                self.registry.joined()
            )));
        }
        Ok(())
    }
}
