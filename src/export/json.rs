//! JSON export functionality
//!
//! The canonical export is a JSON array of `{id, date, amount, type, category}`
//! objects in ledger order, with no wrapper or metadata.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

/// File name offered for a saved export
pub const EXPORT_FILE_NAME: &str = "transactions.json";

/// MIME type of the canonical export
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Write transactions as a JSON array
pub fn export_transactions_json<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
    pretty: bool,
) -> TallyResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, transactions)
    } else {
        serde_json::to_writer(writer, transactions)
    }
    .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

/// Parse a JSON export back into transactions
pub fn import_transactions_json(json_str: &str) -> TallyResult<Vec<Transaction>> {
    serde_json::from_str(json_str).map_err(|e| TallyError::Import(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionType};
    use chrono::NaiveDate;

    fn transactions() -> Vec<Transaction> {
        vec![
            Transaction::new(
                TransactionId::new(1),
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                Money::new(500.0),
                TransactionType::Income,
                "salary",
            ),
            Transaction::new(
                TransactionId::new(4),
                NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
                Money::new(19.99),
                TransactionType::Expense,
                "entertainment",
            ),
        ]
    }

    #[test]
    fn test_compact_export() {
        let mut out = Vec::new();
        export_transactions_json(&transactions(), &mut out, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                r#"[{"id":1,"date":"2023-01-01","amount":500,"type":"income","category":"salary"},"#,
                r#"{"id":4,"date":"2023-01-05","amount":19.99,"type":"expense","category":"entertainment"}]"#
            )
        );
    }

    #[test]
    fn test_empty_export() {
        let mut out = Vec::new();
        export_transactions_json(&[], &mut out, false).unwrap();
        assert_eq!(out, b"[]");
    }

    #[test]
    fn test_pretty_export_round_trip() {
        let mut out = Vec::new();
        export_transactions_json(&transactions(), &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\n'));
        assert_eq!(import_transactions_json(&text).unwrap(), transactions());
    }

    #[test]
    fn test_import_rejects_bad_input() {
        let err = import_transactions_json(r#"{"transactions": []}"#).unwrap_err();
        assert!(matches!(err, TallyError::Import(_)));

        let err = import_transactions_json(
            r#"[{"id":1,"date":"01/01/2023","amount":5,"type":"income","category":"salary"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, TallyError::Import(_)));
    }
}
