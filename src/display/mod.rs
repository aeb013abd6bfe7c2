//! Display formatting for terminal output
//!
//! Turns ledger data into text for the CLI: the transaction register, single
//! transaction details and the balance summary.

pub mod transaction;

pub use transaction::{
    format_balance_summary, format_category_list, format_transaction_details,
    format_transaction_line, format_transaction_register, DisplayOptions,
};
