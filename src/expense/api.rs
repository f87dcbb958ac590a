//! The JSON scripting handle.
//!
//! Exposes the current record collection for external inspection and
//! automation, mirroring the page's own data. This is a convenience hook,
//! not a stable contract.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, expense::ExpenseStore};

/// The state needed for the expenses JSON handle.
#[derive(Debug, Clone)]
pub struct ExpensesApiState {
    pub store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for ExpensesApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler that returns all expenses as JSON, in the same shape
/// the storage slot uses.
pub async fn get_expenses_json(State(state): State<ExpensesApiState>) -> Result<Response, Error> {
    let store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    Ok(Json(store.all().to_vec()).into_response())
}
