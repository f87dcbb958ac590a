//! Clear-all endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error, alert::Alert, expense::ExpenseStore, expenses_page::expenses_content,
};

/// The state needed for clearing all expenses.
#[derive(Debug, Clone)]
pub struct ClearExpensesEndpointState {
    pub store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for ClearExpensesEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for removing all expenses. No-op when the store is
/// already empty.
pub async fn clear_expenses_endpoint(
    State(state): State<ClearExpensesEndpointState>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    let count = store.all().len();
    store.clear();

    if count > 0 {
        tracing::info!("Cleared {count} expense(s)");
    }

    html! {
        (expenses_content(store.all(), ""))
        (Alert::success("All expenses cleared").into_html())
    }
    .into_response()
}
