//! CLI command for data export
//!
//! The ledger produces the bytes; this module is the file-save side that
//! writes them to disk or stdout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use super::session::Session;
use crate::error::{TallyError, TallyResult};
use crate::export::{
    export_transactions_csv, export_transactions_json, export_transactions_yaml, EXPORT_FILE_NAME,
};
use crate::models::Transaction;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// JSON array of transactions (canonical)
    #[default]
    Json,
    /// CSV, one row per transaction
    Csv,
    /// YAML, human-readable
    Yaml,
}

impl ExportFormat {
    /// Default file name for this format
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Json => EXPORT_FILE_NAME,
            Self::Csv => "transactions.csv",
            Self::Yaml => "transactions.yaml",
        }
    }
}

/// Arguments of the export command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ExportArgs {
    /// Output file path (defaults to transactions.<format>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Handle the export command
pub fn handle_export_command(session: &Session, args: ExportArgs) -> TallyResult<()> {
    let transactions = session.ledger.transactions();

    if args.stdout {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        write_export(transactions, &mut writer, args.format, args.pretty)?;
        writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(args.format.default_file_name()));
    save_export(transactions, &output, args.format, args.pretty)?;

    println!(
        "Exported {} transactions to: {}",
        transactions.len(),
        output.display()
    );
    Ok(())
}

/// Write an export file, replacing any existing one
pub fn save_export(
    transactions: &[Transaction],
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> TallyResult<()> {
    let file = File::create(output).map_err(|e| {
        TallyError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    write_export(transactions, &mut writer, format, pretty)?;
    writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;

    tracing::info!(path = %output.display(), ?format, "Export written");
    Ok(())
}

fn write_export<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> TallyResult<()> {
    match format {
        ExportFormat::Json => export_transactions_json(transactions, writer, pretty),
        ExportFormat::Csv => export_transactions_csv(transactions, writer),
        ExportFormat::Yaml => export_transactions_yaml(transactions, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::import_transactions_json;
    use crate::services::Ledger;
    use tempfile::TempDir;

    #[test]
    fn test_save_json_export() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join(EXPORT_FILE_NAME);
        let ledger = Ledger::sample();

        save_export(ledger.transactions(), &output, ExportFormat::Json, false).unwrap();

        let written = std::fs::read(&output).unwrap();
        assert_eq!(written, ledger.export().unwrap());
        let restored = import_transactions_json(&String::from_utf8(written).unwrap()).unwrap();
        assert_eq!(restored, ledger.transactions());
    }

    #[test]
    fn test_save_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.csv");

        save_export(Ledger::sample().transactions(), &output, ExportFormat::Csv, false).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing").join("out.json");

        let err = save_export(&[], &output, ExportFormat::Json, false).unwrap_err();
        assert!(matches!(err, TallyError::Export(_)));
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(ExportFormat::Json.default_file_name(), "transactions.json");
        assert_eq!(ExportFormat::Csv.default_file_name(), "transactions.csv");
    }
}
