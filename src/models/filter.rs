//! Filter criteria for the transaction list view

use chrono::NaiveDate;

use super::category::Category;
use super::transaction::{Transaction, TransactionType};

/// Options for filtering transactions
///
/// Every field is optional; an unset field matches everything and the set
/// fields are combined with AND. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub kind: Option<TransactionType>,
    pub category: Option<Category>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Only transactions on or after `date`
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Only transactions on or before `date`
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Filter by date range
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from(start).to(end)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
            && self.category.as_ref().map_or(true, |c| &txn.category == c)
            && self.date_from.map_or(true, |from| txn.date >= from)
            && self.date_to.map_or(true, |to| txn.date <= to)
    }
}
