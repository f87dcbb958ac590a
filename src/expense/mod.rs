//! The expense domain: the record model, the in-memory store, the
//! persistence adapter, derived totals, and the HTTP endpoints that mutate
//! the store.

mod api;
mod clear_endpoint;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod storage;
mod store;
pub mod summary;

pub use core::{CategoryName, Expense, ExpenseBuilder, ExpenseId, ExpenseName, DEFAULT_CATEGORY};
pub use storage::{ExpenseStorage, STORAGE_FILE_NAME};
pub use store::ExpenseStore;

pub(crate) use api::get_expenses_json;
pub(crate) use clear_endpoint::clear_expenses_endpoint;
pub(crate) use create_endpoint::create_expense_endpoint;
pub(crate) use delete_endpoint::delete_expense_endpoint;
pub(crate) use form::expense_form_view;
