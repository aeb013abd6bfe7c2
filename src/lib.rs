//! Tally - a personal finance ledger
//!
//! This library provides the core of the Tally application: an in-memory
//! ledger of income and expense transactions with filtering, a running
//! balance and export, plus the CLI that presents it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, amounts, categories, filters)
//! - `services`: The ledger and its derived views
//! - `export`: JSON, CSV and YAML serialization of the ledger
//! - `display`: Terminal formatting
//! - `cli`: Command definitions, handlers and the interactive shell
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```
//! use tally::models::{FilterCriteria, TransactionInput, TransactionType};
//! use tally::services::Ledger;
//!
//! let mut ledger = Ledger::sample();
//! ledger.add(TransactionInput::new("2023-01-10", "50", TransactionType::Expense, "bills"))?;
//!
//! assert_eq!(ledger.total_balance().value(), 350.0);
//! assert_eq!(ledger.filter(&FilterCriteria::new().category("bills")).len(), 1);
//! # Ok::<(), tally::TallyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{TallyError, TallyResult};
pub use services::Ledger;
