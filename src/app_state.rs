//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::expense::{ExpenseStorage, ExpenseStore};

/// The state of the server.
///
/// The expense store is the only shared mutable resource. It sits behind a
/// mutex so each request's validate-mutate-save sequence happens under a
/// single lock acquisition.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to resolve "today" when an expense is created without a date.
    pub local_timezone: String,

    /// The in-memory expense store, restored from storage at startup.
    pub store: Arc<Mutex<ExpenseStore>>,
}

impl AppState {
    /// Create a new [AppState], restoring persisted expenses from `storage`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland". An unknown name falls back to UTC at the point
    /// of use.
    pub fn new(storage: ExpenseStorage, local_timezone: &str) -> Self {
        let store = ExpenseStore::load(storage);

        Self {
            local_timezone: local_timezone.to_owned(),
            store: Arc::new(Mutex::new(store)),
        }
    }
}
