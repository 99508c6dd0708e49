//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! tracking domain: amounts, categories, and transactions.

pub mod amount;
pub mod category;
pub mod transaction;

pub use amount::Amount;
pub use category::Category;
pub use transaction::Transaction;
