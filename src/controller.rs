//! Expense controller
//!
//! The controller is the sole mutator of the store: it validates input
//! before any transaction is constructed, applies mutations, answers
//! queries, and tracks the currently active filter. Callers (a view layer,
//! the interactive shell) only issue operation requests and read derived
//! views.

use crate::error::{SpendlogError, SpendlogResult};
use crate::filter::Filter;
use crate::models::{Amount, Category, Transaction};
use crate::store::Store;

/// Owns the transaction store and the active filter
#[derive(Default)]
pub struct ExpenseController {
    store: Store,
    active_filter: Option<Box<dyn Filter>>,
}

impl ExpenseController {
    /// Create a controller with an empty store and no active filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Validated add. Returns whether the transaction was accepted.
    ///
    /// Invalid input (non-positive amount, unknown category) is a reported
    /// condition, not a fatal one: the store is left unchanged and the
    /// method returns `false`. Use [`try_add_transaction`] when the caller
    /// needs the rejection reason.
    ///
    /// [`try_add_transaction`]: Self::try_add_transaction
    pub fn add_transaction(&mut self, amount: Amount, category: &str) -> bool {
        self.try_add_transaction(amount, category).is_ok()
    }

    /// Validated add, reporting the rejection reason on failure
    ///
    /// On success the transaction is constructed, appended to the store,
    /// and returned by reference.
    pub fn try_add_transaction(
        &mut self,
        amount: Amount,
        category: &str,
    ) -> SpendlogResult<&Transaction> {
        if !amount.is_positive() {
            return Err(SpendlogError::Validation(format!(
                "amount must be greater than zero, got {}",
                amount
            )));
        }
        let category: Category = category.parse()?;

        // Validation passed; construction is unconditional from here.
        self.store.add(Transaction::new(amount, category));
        Ok(self.store.transactions().last().expect("just added"))
    }

    /// Direct insertion path: append an already-constructed transaction
    /// without re-validating it
    pub fn insert_transaction(&mut self, transaction: Transaction) {
        self.store.add(transaction);
    }

    /// Remove the first occurrence equal to the given transaction
    ///
    /// A missing value is a silent no-op.
    pub fn remove_transaction(&mut self, transaction: &Transaction) {
        self.store.remove(transaction);
    }

    /// Remove the transaction at the selected index
    ///
    /// Fail-fast policy: an out-of-range index (including any index on an
    /// empty store) is an [`SpendlogError::InvalidSelection`] and the store
    /// is left untouched.
    pub fn remove_selected_transaction(&mut self, index: usize) -> SpendlogResult<Transaction> {
        let len = self.store.len();
        self.store
            .remove_at(index)
            .ok_or(SpendlogError::InvalidSelection { index, len })
    }

    /// Current store contents, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    /// Set the active filter
    ///
    /// Setting a filter does not apply it; filtering happens on demand via
    /// [`filtered_transactions`](Self::filtered_transactions).
    pub fn set_filter(&mut self, filter: Box<dyn Filter>) {
        self.active_filter = Some(filter);
    }

    /// Clear the active filter
    pub fn clear_filter(&mut self) {
        self.active_filter = None;
    }

    /// The currently active filter, if any
    pub fn filter(&self) -> Option<&dyn Filter> {
        self.active_filter.as_deref()
    }

    /// Apply the active filter to the current contents
    ///
    /// With no filter set this is the identity: every transaction, in store
    /// order.
    pub fn filtered_transactions(&self) -> Vec<Transaction> {
        match &self.active_filter {
            Some(filter) => filter.filter(self.store.transactions()),
            None => self.store.transactions().to_vec(),
        }
    }

    /// Sum of all stored amounts, recomputed on every call
    pub fn total_cost(&self) -> Amount {
        self.store.total_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{AmountFilter, CategoryFilter};

    fn check_transaction(amount: Amount, category: Category, transaction: &Transaction) {
        assert_eq!(transaction.amount(), amount);
        assert_eq!(transaction.category(), category);

        // The formatted timestamp parses back to (nearly) now
        let parsed = Transaction::parse_timestamp(&transaction.timestamp()).unwrap();
        let elapsed = chrono::Utc::now() - parsed;
        assert!(elapsed.num_seconds() < 60);
    }

    #[test]
    fn test_fresh_controller_is_empty() {
        let controller = ExpenseController::new();
        assert_eq!(controller.transactions().len(), 0);
        assert_eq!(controller.total_cost(), Amount::zero());
        assert!(controller.filter().is_none());
    }

    #[test]
    fn test_add_transaction() {
        let mut controller = ExpenseController::new();
        assert_eq!(controller.transactions().len(), 0);

        let amount = Amount::from_cents(5000);
        assert!(controller.add_transaction(amount, "food"));

        assert_eq!(controller.transactions().len(), 1);
        check_transaction(amount, Category::Food, &controller.transactions()[0]);
        assert_eq!(controller.total_cost(), amount);
    }

    #[test]
    fn test_invalid_input_is_rejected_without_mutation() {
        let mut controller = ExpenseController::new();

        // Negative amount and unknown category
        assert!(!controller.add_transaction(Amount::from_cents(-1000), "party"));
        // Unknown category alone
        assert!(!controller.add_transaction(Amount::from_cents(1000), "party"));
        // Zero amount alone
        assert!(!controller.add_transaction(Amount::zero(), "food"));

        assert_eq!(controller.transactions().len(), 0);
        assert_eq!(controller.total_cost(), Amount::zero());
    }

    #[test]
    fn test_try_add_reports_reason() {
        let mut controller = ExpenseController::new();

        let err = controller
            .try_add_transaction(Amount::zero(), "food")
            .unwrap_err();
        assert!(err.is_validation());

        let err = controller
            .try_add_transaction(Amount::from_cents(1000), "party")
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown category: party");
    }

    #[test]
    fn test_insert_and_remove_by_value() {
        let mut controller = ExpenseController::new();

        let amount = Amount::from_cents(5000);
        let added = Transaction::new(amount, Category::Food);
        controller.insert_transaction(added.clone());

        assert_eq!(controller.transactions().len(), 1);
        check_transaction(amount, Category::Food, &controller.transactions()[0]);
        assert_eq!(controller.total_cost(), amount);

        controller.remove_transaction(&added);
        assert_eq!(controller.transactions().len(), 0);
        assert_eq!(controller.total_cost(), Amount::zero());
    }

    #[test]
    fn test_remove_by_value_missing_is_noop() {
        let mut controller = ExpenseController::new();
        assert!(controller.add_transaction(Amount::from_cents(5000), "food"));

        let other = Transaction::new(Amount::from_cents(100), Category::Other);
        controller.remove_transaction(&other);
        assert_eq!(controller.transactions().len(), 1);
    }

    #[test]
    fn test_remove_selected_on_empty_store_fails() {
        let mut controller = ExpenseController::new();
        assert_eq!(controller.transactions().len(), 0);

        let err = controller.remove_selected_transaction(0).unwrap_err();
        assert!(err.is_invalid_selection());
        assert!(!err.to_string().is_empty());

        assert_eq!(controller.transactions().len(), 0);
        assert_eq!(controller.total_cost(), Amount::zero());
    }

    #[test]
    fn test_remove_selected() {
        let mut controller = ExpenseController::new();

        let amount = Amount::from_cents(55000);
        assert!(controller.add_transaction(amount, "bills"));
        assert_eq!(controller.transactions().len(), 1);
        check_transaction(amount, Category::Bills, &controller.transactions()[0]);
        assert_eq!(controller.total_cost(), amount);

        let removed = controller.remove_selected_transaction(0).unwrap();
        assert_eq!(removed.amount(), amount);

        assert_eq!(controller.transactions().len(), 0);
        assert_eq!(controller.total_cost(), Amount::zero());
    }

    #[test]
    fn test_remove_selected_out_of_range_leaves_store_intact() {
        let mut controller = ExpenseController::new();
        assert!(controller.add_transaction(Amount::from_cents(5000), "food"));

        let err = controller.remove_selected_transaction(1).unwrap_err();
        assert!(err.is_invalid_selection());
        assert_eq!(controller.transactions().len(), 1);
    }

    #[test]
    fn test_filter_by_amount() {
        let mut controller = ExpenseController::new();
        assert!(controller.add_transaction(Amount::from_cents(5000), "food"));
        assert!(controller.add_transaction(Amount::from_cents(8600), "entertainment"));
        assert!(controller.add_transaction(Amount::from_cents(5000), "bills"));

        let target = Amount::from_cents(5000);
        controller.set_filter(Box::new(AmountFilter::new(target)));

        let filtered = controller.filtered_transactions();
        assert_eq!(filtered.len(), 2);
        for transaction in &filtered {
            check_transaction(target, transaction.category(), transaction);
        }
        assert_eq!(filtered[0].category(), Category::Food);
        assert_eq!(filtered[1].category(), Category::Bills);
    }

    #[test]
    fn test_filter_by_category() {
        let mut controller = ExpenseController::new();
        assert!(controller.add_transaction(Amount::from_cents(4500), "food"));
        assert!(controller.add_transaction(Amount::from_cents(10600), "bills"));
        assert!(controller.add_transaction(Amount::from_cents(21500), "food"));

        controller.set_filter(Box::new(CategoryFilter::new(Category::Food)));

        let filtered = controller.filtered_transactions();
        assert_eq!(filtered.len(), 2);
        for transaction in &filtered {
            check_transaction(transaction.amount(), Category::Food, transaction);
        }
        assert_eq!(filtered[0].amount(), Amount::from_cents(4500));
        assert_eq!(filtered[1].amount(), Amount::from_cents(21500));
    }

    #[test]
    fn test_no_filter_is_identity() {
        let mut controller = ExpenseController::new();
        assert!(controller.add_transaction(Amount::from_cents(5000), "food"));
        assert!(controller.add_transaction(Amount::from_cents(8600), "bills"));

        let all = controller.filtered_transactions();
        assert_eq!(all.len(), 2);
        assert_eq!(all, controller.transactions().to_vec());

        controller.set_filter(Box::new(CategoryFilter::new(Category::Food)));
        assert_eq!(controller.filtered_transactions().len(), 1);

        controller.clear_filter();
        assert_eq!(controller.filtered_transactions().len(), 2);
    }

    #[test]
    fn test_filtering_never_mutates_store() {
        let mut controller = ExpenseController::new();
        assert!(controller.add_transaction(Amount::from_cents(5000), "food"));
        assert!(controller.add_transaction(Amount::from_cents(8600), "bills"));

        controller.set_filter(Box::new(AmountFilter::new(Amount::from_cents(8600))));
        let _ = controller.filtered_transactions();

        assert_eq!(controller.transactions().len(), 2);
        assert_eq!(controller.total_cost(), Amount::from_cents(13600));
    }
}
