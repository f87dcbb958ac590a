//! The in-memory expense store, the single source of truth for the running
//! session. Every mutation is written through to the storage adapter.

use crate::expense::{
    core::{Expense, ExpenseId},
    storage::ExpenseStorage,
};

/// Holds all expense records for the session.
///
/// The store is loaded once at startup via [ExpenseStore::load] and owns
/// the records exclusively from then on; the storage adapter never holds a
/// competing copy.
#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    storage: ExpenseStorage,
}

impl ExpenseStore {
    /// Create a store by restoring the persisted expenses from `storage`.
    pub fn load(storage: ExpenseStorage) -> Self {
        let expenses = storage.load();

        if !expenses.is_empty() {
            tracing::info!("Restored {} expense(s) from storage", expenses.len());
        }

        Self { expenses, storage }
    }

    /// Append a finalized expense and persist the collection.
    ///
    /// Validation and ID assignment happen in
    /// [ExpenseBuilder::finalize](crate::ExpenseBuilder::finalize), before
    /// the store is touched, so a rejected expense leaves the store
    /// unchanged.
    pub fn add(&mut self, expense: Expense) -> &Expense {
        let index = self.expenses.len();
        self.expenses.push(expense);
        self.storage.save(&self.expenses);

        &self.expenses[index]
    }

    /// Remove the expense with the matching `id` and persist the change.
    ///
    /// Returns whether a record was removed. An unknown id is a no-op, not
    /// an error.
    pub fn delete(&mut self, id: &ExpenseId) -> bool {
        let count_before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != *id);

        if self.expenses.len() == count_before {
            return false;
        }

        self.storage.save(&self.expenses);
        true
    }

    /// Remove all expenses and persist the change. No-op when the store is
    /// already empty.
    pub fn clear(&mut self) {
        if self.expenses.is_empty() {
            return;
        }

        self.expenses.clear();
        self.storage.save(&self.expenses);
    }

    /// All expenses currently in the store, in unspecified order. Callers
    /// sort for display.
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }
}
