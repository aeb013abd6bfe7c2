//! The ledger: an ordered, owned collection of transactions
//!
//! Mutations go through `add`, `update` and `delete`. The filtered list and
//! the balance are derived on every read and never stored.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{TallyError, TallyResult};
use crate::export::json;
use crate::models::{
    FilterCriteria, Money, Transaction, TransactionId, TransactionInput, TransactionType,
    DATE_FORMAT,
};

/// Income, expense and net totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BalanceSummary {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

impl BalanceSummary {
    pub fn of<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut summary = Self::default();
        for txn in transactions {
            match txn.kind {
                TransactionType::Income => summary.income += txn.amount,
                TransactionType::Expense => summary.expense += txn.amount,
            }
        }
        summary.balance = summary.income - summary.expense;
        summary
    }
}

/// Validated field values ready to be stored
struct Fields {
    date: NaiveDate,
    amount: Money,
}

/// In-memory transaction ledger
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Insertion order is display order
    transactions: Vec<Transaction>,
    /// Highest id ever handed out, so deleted ids are never reused
    last_id: u64,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger holding existing transactions, in the given order
    pub fn from_transactions(transactions: Vec<Transaction>) -> TallyResult<Self> {
        let mut seen = HashSet::new();
        for txn in &transactions {
            if !seen.insert(txn.id) {
                return Err(TallyError::Validation(format!(
                    "Duplicate transaction id {}",
                    txn.id
                )));
            }
        }

        let last_id = transactions.iter().map(|t| t.id.value()).max().unwrap_or(0);
        debug!(count = transactions.len(), last_id, "Ledger seeded");

        Ok(Self {
            transactions,
            last_id,
        })
    }

    /// The two demo records the app starts with
    pub fn sample() -> Self {
        let record = |id: u64, date: NaiveDate, amount: f64, kind, category: &str| {
            Transaction::new(TransactionId::new(id), date, Money::new(amount), kind, category)
        };
        let jan = |day: u32| NaiveDate::from_ymd_opt(2023, 1, day).unwrap_or_default();

        Self {
            transactions: vec![
                record(1, jan(1), 500.0, TransactionType::Income, "salary"),
                record(2, jan(5), 100.0, TransactionType::Expense, "groceries"),
            ],
            last_id: 2,
        }
    }

    /// Record a new transaction
    ///
    /// Date and amount must be filled in. On success the transaction gets the
    /// next id and is appended at the end.
    pub fn add(&mut self, input: TransactionInput) -> TallyResult<Transaction> {
        let fields = Self::validate(&input).map_err(|e| {
            warn!(error = %e, "Rejected new transaction");
            e
        })?;

        let id = self.next_id()?;
        let txn = Transaction::new(id, fields.date, fields.amount, input.kind, input.category);

        self.last_id = id.value();
        self.transactions.push(txn.clone());
        debug!(id = %txn.id, kind = %txn.kind, amount = txn.amount.value(), "Transaction added");

        Ok(txn)
    }

    /// Replace every field of an existing transaction except its id
    pub fn update(&mut self, id: TransactionId, input: TransactionInput) -> TallyResult<Transaction> {
        let index = self
            .position(id)
            .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))?;

        let fields = Self::validate(&input).map_err(|e| {
            warn!(id = %id, error = %e, "Rejected transaction update");
            e
        })?;

        let txn = &mut self.transactions[index];
        txn.date = fields.date;
        txn.amount = fields.amount;
        txn.kind = input.kind;
        txn.category = input.category;
        debug!(id = %id, "Transaction updated");

        Ok(txn.clone())
    }

    /// Remove a transaction, returning it; an unknown id is ignored
    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        match self.position(id) {
            Some(index) => {
                let removed = self.transactions.remove(index);
                debug!(id = %id, "Transaction deleted");
                Some(removed)
            }
            None => {
                debug!(id = %id, "Delete ignored, no such transaction");
                None
            }
        }
    }

    /// Transactions matching the criteria, in ledger order
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| criteria.matches(txn))
            .collect()
    }

    /// Income minus expense over the whole ledger, regardless of any filter
    pub fn total_balance(&self) -> Money {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    pub fn summary(&self) -> BalanceSummary {
        BalanceSummary::of(&self.transactions)
    }

    /// The whole ledger as a compact JSON array
    pub fn export(&self) -> TallyResult<Vec<u8>> {
        let mut buffer = Vec::new();
        json::export_transactions_json(&self.transactions, &mut buffer, false)?;
        Ok(buffer)
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }

    /// `max(existing ids, 0) + 1`, bumped past any id already handed out
    fn next_id(&self) -> TallyResult<TransactionId> {
        let max_existing = self.transactions.iter().map(|t| t.id.value()).max().unwrap_or(0);
        TransactionId::new(max_existing.max(self.last_id))
            .next()
            .ok_or_else(|| {
                warn!("Transaction id space exhausted");
                TallyError::Validation("No transaction ids left to assign".into())
            })
    }

    fn validate(input: &TransactionInput) -> TallyResult<Fields> {
        let missing = input.missing_fields();
        if !missing.is_empty() {
            return Err(TallyError::missing_fields(&missing));
        }

        let date = NaiveDate::parse_from_str(input.date.trim(), DATE_FORMAT).map_err(|_| {
            TallyError::Validation(format!(
                "Invalid date '{}': expected YYYY-MM-DD",
                input.date.trim()
            ))
        })?;

        let amount = Money::parse(&input.amount).map_err(|e| {
            TallyError::Validation(format!("Invalid amount '{}': {}", input.amount.trim(), e))
        })?;

        if amount.is_negative() {
            return Err(TallyError::Validation(format!(
                "Amount cannot be negative: {}",
                input.amount.trim()
            )));
        }

        Ok(Fields { date, amount })
    }
}
