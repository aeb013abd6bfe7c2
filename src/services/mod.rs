//! Service layer for Tally
//!
//! The service layer holds the ledger's business rules: validation, id
//! assignment and the derived views built on top of the models.

pub mod ledger;

pub use ledger::{BalanceSummary, Ledger};
