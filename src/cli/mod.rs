//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod export;
pub mod session;
pub mod shell;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use session::Session;
pub use shell::run_shell;
pub use transaction::{handle_ledger_command, LedgerCommand};
