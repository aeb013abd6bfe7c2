//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display,
//! including the register table and the balance summary.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{CategoryRegistry, Transaction};
use crate::services::BalanceSummary;

/// Currency and date presentation taken from settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl RegisterRow {
    fn new(txn: &Transaction, options: &DisplayOptions) -> Self {
        Self {
            id: format!("#{}", txn.id),
            date: txn.date.format(&options.date_format).to_string(),
            amount: txn.amount.format_with_symbol(&options.currency_symbol),
            kind: txn.kind.to_string(),
            category: txn.category.to_string(),
        }
    }
}

/// Format a list of transactions as a register table
pub fn format_transaction_register(
    transactions: &[&Transaction],
    options: &DisplayOptions,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| RegisterRow::new(txn, options));
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(2), Alignment::right());

    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Format a transaction as a single line, e.g. for notifications
pub fn format_transaction_line(txn: &Transaction, options: &DisplayOptions) -> String {
    format!(
        "#{} {} {} {} {}",
        txn.id,
        txn.date.format(&options.date_format),
        txn.kind,
        txn.category,
        txn.amount.format_with_symbol(&options.currency_symbol)
    )
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, options: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: #{}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date.format(&options.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&options.currency_symbol)
    ));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));

    output
}

/// Format income, expense and balance totals
pub fn format_balance_summary(summary: &BalanceSummary, options: &DisplayOptions) -> String {
    let symbol = &options.currency_symbol;
    format!(
        "Income:        {:>14}\nExpense:       {:>14}\nTotal Balance: {:>14}\n",
        summary.income.format_with_symbol(symbol),
        summary.expense.format_with_symbol(symbol),
        summary.balance.format_with_symbol(symbol),
    )
}

/// Format the category registry, one name per line
pub fn format_category_list(registry: &CategoryRegistry) -> String {
    if registry.is_empty() {
        return "No categories configured.\n".to_string();
    }

    registry.iter().map(|c| format!("  {}\n", c)).collect()
}
