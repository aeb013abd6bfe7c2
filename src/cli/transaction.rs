//! Ledger CLI commands
//!
//! Implements the commands that read or change the session's ledger. The same
//! command set is used for one-shot invocations and inside the shell.

use chrono::NaiveDate;
use clap::Subcommand;

use super::export::{handle_export_command, ExportArgs};
use super::session::Session;
use crate::display::{
    format_balance_summary, format_category_list, format_transaction_details,
    format_transaction_line, format_transaction_register,
};
use crate::error::{TallyError, TallyResult};
use crate::models::{Category, FilterCriteria, TransactionId, TransactionInput, TransactionType};

/// Ledger subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    /// Add a new transaction
    Add {
        /// Transaction date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Amount (e.g. "50" or "12.99")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// income or expense (defaults to the configured type)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Category name (defaults to the configured category)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Edit a transaction; omitted fields keep their current values
    Edit {
        /// Transaction ID
        id: TransactionId,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: TransactionId,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: TransactionId,
    },
    /// List transactions, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Only income or only expense
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Start date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Show income, expense and total balance
    Balance,
    /// Export all transactions
    Export(ExportArgs),
    /// List the configured categories
    Categories,
}

/// Handle a ledger command
pub fn handle_ledger_command(session: &mut Session, cmd: LedgerCommand) -> TallyResult<()> {
    match cmd {
        LedgerCommand::Add {
            date,
            amount,
            kind,
            category,
        } => {
            let category = category
                .map(Category::from)
                .unwrap_or_else(|| session.settings.entry_category());
            session.check_category(&category)?;

            let input = TransactionInput {
                date: date.unwrap_or_default(),
                amount: amount.unwrap_or_default(),
                kind: kind.unwrap_or(session.settings.default_type),
                category,
            };

            let txn = session.ledger.add(input)?;
            println!(
                "Transaction added: {}",
                format_transaction_line(&txn, &session.display)
            );
        }
        LedgerCommand::Edit {
            id,
            date,
            amount,
            kind,
            category,
        } => {
            let mut input = session
                .ledger
                .get(id)
                .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))?
                .to_input();

            if let Some(date) = date {
                input.date = date;
            }
            if let Some(amount) = amount {
                input.amount = amount;
            }
            if let Some(kind) = kind {
                input.kind = kind;
            }
            if let Some(category) = category {
                let category = Category::from(category);
                session.check_category(&category)?;
                input.category = category;
            }

            let txn = session.ledger.update(id, input)?;
            println!(
                "Transaction updated: {}",
                format_transaction_line(&txn, &session.display)
            );
        }
        LedgerCommand::Delete { id } => match session.ledger.delete(id) {
            Some(txn) => println!(
                "Transaction deleted: {}",
                format_transaction_line(&txn, &session.display)
            ),
            None => println!("No transaction #{}; nothing deleted.", id),
        },
        LedgerCommand::Show { id } => {
            let txn = session
                .ledger
                .get(id)
                .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(txn, &session.display));
        }
        LedgerCommand::List {
            kind,
            category,
            from,
            to,
        } => {
            let criteria = FilterCriteria {
                kind,
                category: category.map(Category::from),
                date_from: from,
                date_to: to,
            };

            let matching = session.ledger.filter(&criteria);
            print!(
                "{}",
                format_transaction_register(&matching, &session.display)
            );
            if !criteria.is_empty() {
                println!(
                    "Showing {} of {} transactions",
                    matching.len(),
                    session.ledger.len()
                );
            }
            println!(
                "Total Balance: {}",
                session
                    .ledger
                    .total_balance()
                    .format_with_symbol(&session.display.currency_symbol)
            );
        }
        LedgerCommand::Balance => {
            print!(
                "{}",
                format_balance_summary(&session.ledger.summary(), &session.display)
            );
        }
        LedgerCommand::Export(args) => handle_export_command(session, args)?,
        LedgerCommand::Categories => {
            println!("Categories:");
            print!("{}", format_category_list(&session.registry));
        }
    }

    Ok(())
}
