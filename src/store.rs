//! In-memory transaction store
//!
//! The store is the authoritative ordered collection of transactions.
//! Insertion order is preserved, duplicates by value are permitted, and the
//! total cost is always recomputed from the current contents rather than
//! cached.

use crate::models::{Amount, Transaction};

/// Ordered collection of recorded transactions
#[derive(Debug, Default)]
pub struct Store {
    transactions: Vec<Transaction>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction
    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Remove the first occurrence equal to the given transaction
    ///
    /// A missing value is a silent no-op, not an error.
    pub fn remove(&mut self, transaction: &Transaction) {
        if let Some(pos) = self.transactions.iter().position(|t| t == transaction) {
            self.transactions.remove(pos);
        }
    }

    /// Remove the transaction at `index`, if the index is in range
    pub fn remove_at(&mut self, index: usize) -> Option<Transaction> {
        if index < self.transactions.len() {
            Some(self.transactions.remove(index))
        } else {
            None
        }
    }

    /// Current contents, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all stored amounts, recomputed on every call
    pub fn total_cost(&self) -> Amount {
        self.transactions.iter().map(|t| t.amount()).sum()
    }
}
