//! YAML export functionality

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

/// Export transactions as a YAML sequence with a short comment header
pub fn export_transactions_yaml<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> TallyResult<()> {
    writeln!(writer, "# Tally transaction export")
        .and_then(|_| writeln!(writer, "# Transactions: {}", transactions.len()))
        .and_then(|_| writeln!(writer))
        .map_err(|e| TallyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, transactions).map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_round_trip() {
        let transactions = vec![Transaction::new(
            TransactionId::new(3),
            NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
            Money::new(50.0),
            TransactionType::Expense,
            "bills",
        )];

        let mut out = Vec::new();
        export_transactions_yaml(&transactions, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Tally transaction export"));
        assert!(text.contains("type: expense"));

        let parsed: Vec<Transaction> = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, transactions);
    }
}
