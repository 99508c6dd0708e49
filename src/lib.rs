//! spendlog - Personal expense tracker
//!
//! This library provides the core of a personal expense-tracking
//! application: an ordered in-memory store of validated transactions, pure
//! filters over them, and a controller that is the sole mutator of the
//! store. The binary wraps the core in a small interactive shell; any other
//! presentation layer can drive the same controller.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, categories, transactions)
//! - `filter`: Stateless transaction filters
//! - `store`: The ordered transaction collection
//! - `controller`: Validation, mutation, and query operations
//! - `display`: Terminal formatting
//! - `cli`: The interactive shell
//!
//! # Example
//!
//! ```
//! use spendlog::{Amount, ExpenseController};
//!
//! let mut controller = ExpenseController::new();
//! assert!(controller.add_transaction(Amount::from_cents(5000), "food"));
//! assert!(!controller.add_transaction(Amount::zero(), "food"));
//! assert_eq!(controller.total_cost(), Amount::from_cents(5000));
//! ```

pub mod cli;
pub mod controller;
pub mod display;
pub mod error;
pub mod filter;
pub mod models;
pub mod store;

pub use controller::ExpenseController;
pub use error::{SpendlogError, SpendlogResult};
pub use filter::{AmountFilter, CategoryFilter, Filter};
pub use models::{Amount, Category, Transaction};
pub use store::Store;
