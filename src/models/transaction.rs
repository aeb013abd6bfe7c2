//! Transaction model
//!
//! A transaction is one dated income or expense, with a non-negative amount
//! and a category. Field order here is the field order of the JSON export.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Date format used for input and export
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    /// The original entry form preselects expense
    #[default]
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}': expected income or expense",
                other
            )),
        }
    }
}

/// A recorded financial event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    pub date: NaiveDate,

    /// Always non-negative; the sign comes from `kind`
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub category: Category,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        amount: Money,
        kind: TransactionType,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            kind,
            category: category.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Effect of this transaction on the balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Input values that reproduce this transaction, used to prefill an edit
    pub fn to_input(&self) -> TransactionInput {
        TransactionInput {
            date: self.date.format(DATE_FORMAT).to_string(),
            amount: self.amount.value().to_string(),
            kind: self.kind,
            category: self.category.clone(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} {}",
            self.id,
            self.date.format(DATE_FORMAT),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Raw field values for creating or replacing a transaction
///
/// `date` and `amount` arrive as text, exactly as entered, and are checked
/// by the ledger when the input is applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionInput {
    pub date: String,
    pub amount: String,
    pub kind: TransactionType,
    pub category: Category,
}

impl TransactionInput {
    pub fn new(
        date: impl Into<String>,
        amount: impl Into<String>,
        kind: TransactionType,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            kind,
            category: category.into(),
        }
    }

    /// Names of the required fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.date.trim().is_empty() {
            missing.push("date");
        }
        if self.amount.trim().is_empty() {
            missing.push("amount");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionId::new(1),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            Money::new(500.0),
            TransactionType::Income,
            "salary",
        )
    }

    #[test]
    fn test_signed_amount() {
        let mut txn = sample();
        assert_eq!(txn.signed_amount(), Money::new(500.0));
        txn.kind = TransactionType::Expense;
        assert_eq!(txn.signed_amount(), Money::new(-500.0));
        assert!(txn.is_expense());
    }

    #[test]
    fn test_type_parse() {
        assert_eq!("Income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("expense".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_serialization_field_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"date":"2023-01-01","amount":500,"type":"income","category":"salary"}"#
        );
    }

    #[test]
    fn test_deserialize_string_amount() {
        let txn: Transaction = serde_json::from_str(
            r#"{"id":3,"date":"2023-01-10","amount":"50","type":"expense","category":"bills"}"#,
        )
        .unwrap();
        assert_eq!(txn.amount, Money::new(50.0));
        assert_eq!(txn.kind, TransactionType::Expense);
    }

    #[test]
    fn test_to_input() {
        let input = sample().to_input();
        assert_eq!(input.date, "2023-01-01");
        assert_eq!(input.amount, "500");
        assert_eq!(input.kind, TransactionType::Income);
        assert_eq!(input.category, Category::new("salary"));
    }

    #[test]
    fn test_missing_fields() {
        let input = TransactionInput::default();
        assert_eq!(input.missing_fields(), vec!["date", "amount"]);
        assert_eq!(input.category, Category::new("groceries"));
        assert_eq!(input.kind, TransactionType::Expense);

        let input = TransactionInput::new("2023-01-10", " ", TransactionType::Expense, "bills");
        assert_eq!(input.missing_fields(), vec!["amount"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", sample()), "#1 2023-01-01 income salary $500.00");
    }
}
