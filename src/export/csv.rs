//! CSV export functionality
//!
//! Writes one row per transaction under an `id,date,amount,type,category` header.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> TallyResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(["id", "date", "amount", "type", "category"])
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .serialize(txn)
            .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}
