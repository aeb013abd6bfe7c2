//! Export module for Tally
//!
//! Serializes the whole ledger, unfiltered, in one of three formats:
//! - JSON: the canonical export, a bare array of transaction objects
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - YAML: human-readable variant of the JSON export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{
    export_transactions_json, import_transactions_json, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
};
pub use yaml::export_transactions_yaml;
