//! Core data models for Tally
//!
//! This module contains the data structures of the ledger domain:
//! transactions, their ids and amounts, categories and filter criteria.

pub mod category;
pub mod filter;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{Category, CategoryRegistry, DEFAULT_CATEGORIES};
pub use filter::FilterCriteria;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionInput, TransactionType, DATE_FORMAT};
