//! Transaction identifiers
//!
//! Ids are small positive integers handed out by the ledger. The newtype keeps
//! them from being confused with counts or amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a transaction within a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Wrap a raw id value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` once the id space is used up
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TransactionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    /// Accepts `3` as well as the `#3` form used in the register
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
