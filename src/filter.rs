//! Transaction filters
//!
//! Filters are stateless predicates: each one holds only its own matching
//! criterion and selects a subset of a transaction slice without mutating
//! it. Relative order of the matches is preserved.

use crate::models::{Amount, Category, Transaction};

/// A criterion for selecting a subset of transactions
pub trait Filter {
    /// Select the matching transactions, in input order
    fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction>;
}

/// Matches transactions with a given amount
///
/// Amounts are cent-precise, so equality here is exact to the cent, which
/// is what "equal within 0.01" means for this representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountFilter {
    target: Amount,
}

impl AmountFilter {
    /// Create a filter matching the given amount
    pub fn new(target: Amount) -> Self {
        Self { target }
    }

    /// The amount this filter matches
    pub fn target(&self) -> Amount {
        self.target
    }
}

impl Filter for AmountFilter {
    fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| t.amount() == self.target)
            .cloned()
            .collect()
    }
}

/// Matches transactions with a given category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter {
    target: Category,
}

impl CategoryFilter {
    /// Create a filter matching the given category
    pub fn new(target: Category) -> Self {
        Self { target }
    }

    /// The category this filter matches
    pub fn target(&self) -> Category {
        self.target
    }
}

impl Filter for CategoryFilter {
    fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| t.category() == self.target)
            .cloned()
            .collect()
    }
}
