//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display,
//! including the register view the shell prints for `list`.

use crate::models::{Amount, Transaction};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(index: usize, txn: &Transaction) -> String {
    format!(
        "{:<4} {:18} {:15} {:>10}",
        index,
        txn.timestamp(),
        txn.category().as_str(),
        txn.amount().to_string()
    )
}

/// Format a list of transactions as a register
pub fn format_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<4} {:18} {:15} {:>10}\n",
        "No", "Timestamp", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for (index, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(index, txn));
        output.push('\n');
    }

    let total: Amount = transactions.iter().map(|t| t.amount()).sum();
    output.push_str(&"-".repeat(50));
    output.push('\n');
    output.push_str(&format!("{:>39} {:>10}\n", "Total:", total.to_string()));

    output
}

/// Format a short transaction summary (one line)
pub fn format_transaction_short(txn: &Transaction) -> String {
    format!("{} {} {}", txn.timestamp(), txn.amount(), txn.category())
}
