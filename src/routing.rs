//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get},
};

use crate::{
    AppState, endpoints,
    expense::{
        clear_expenses_endpoint, create_expense_endpoint, delete_expense_endpoint,
        get_expenses_json,
    },
    expenses_page::get_expenses_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(
            endpoints::EXPENSES_API,
            get(get_expenses_json)
                .post(create_expense_endpoint)
                .delete(clear_expenses_endpoint),
        )
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}
