//! Expense deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error,
    alert::Alert,
    expense::{ExpenseId, ExpenseStore},
    expenses_page::expenses_content,
};

/// The state needed for deleting an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseEndpointState {
    pub store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for DeleteExpenseEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting an expense.
///
/// Deleting an id that is not in the store is a no-op, not an error: the
/// record is gone either way, so the handler responds with the refreshed
/// content regardless.
pub async fn delete_expense_endpoint(
    Path(expense_id): Path<String>,
    State(state): State<DeleteExpenseEndpointState>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    let removed = store.delete(&ExpenseId::new_unchecked(&expense_id));

    if !removed {
        tracing::debug!("Expense {expense_id} was already gone");
    }

    html! {
        (expenses_content(store.all(), ""))
        (Alert::success("Expense deleted").into_html())
    }
    .into_response()
}

#[cfg(test)]
mod delete_expense_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use time::{UtcOffset, macros::date};

    use crate::{
        expense::{CategoryName, Expense, ExpenseName, ExpenseStorage, ExpenseStore},
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    use super::{DeleteExpenseEndpointState, delete_expense_endpoint};

    fn get_delete_state() -> (tempfile::TempDir, DeleteExpenseEndpointState) {
        let data_dir = tempfile::tempdir().expect("Could not create temp dir");
        let store = ExpenseStore::load(ExpenseStorage::new(data_dir.path()));

        (
            data_dir,
            DeleteExpenseEndpointState {
                store: Arc::new(Mutex::new(store)),
            },
        )
    }

    fn get_test_expense(name: &str) -> Expense {
        Expense::build(ExpenseName::new_unchecked(name), 3.5)
            .category(CategoryName::new("Food"))
            .date(date!(2024 - 01 - 01))
            .finalize(UtcOffset::UTC)
            .expect("Could not create test expense")
    }

    #[tokio::test]
    async fn delete_expense_endpoint_removes_expense() {
        let (_data_dir, state) = get_delete_state();
        let id = {
            let mut store = state.store.lock().unwrap();
            store.add(get_test_expense("Coffee")).id.clone()
        };

        let response = delete_expense_endpoint(Path(id.to_string()), State(state.clone()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.store.lock().unwrap().all().len(), 0);

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
    }

    #[tokio::test]
    async fn delete_expense_endpoint_with_unknown_id_is_a_noop() {
        let (_data_dir, state) = get_delete_state();
        {
            let mut store = state.store.lock().unwrap();
            store.add(get_test_expense("Coffee"));
        }

        let response = delete_expense_endpoint(
            Path("no-such-id".to_string()),
            State(state.clone()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.store.lock().unwrap().all().len(), 1);
    }
}
