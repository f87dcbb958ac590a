//! Outlay is a web app for tracking your day-to-day expenses.
//!
//! This library provides an HTTP server that directly serves HTML pages:
//! expenses are recorded through a form, listed and totalled on a single
//! page, and persisted to a JSON file between sessions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod expense;
mod expenses_page;
mod html;
mod not_found;
mod routing;
#[cfg(test)]
mod test_utils;
mod timezone;

pub use app_state::AppState;
pub use expense::{
    CategoryName, DEFAULT_CATEGORY, Expense, ExpenseBuilder, ExpenseId, ExpenseName,
    ExpenseStorage, ExpenseStore, STORAGE_FILE_NAME,
};
pub use routing::build_router;

use crate::alert::Alert;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create an expense name.
    #[error("Name is required")]
    EmptyExpenseName,

    /// The amount field could not be parsed as a number.
    ///
    /// Callers should pass in the raw text the user submitted.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// A negative amount was used to create an expense.
    ///
    /// Expenses record money spent, so amounts must be zero or greater.
    #[error("Amount cannot be negative, got {0}")]
    NegativeAmount(f64),

    /// The date field was left empty.
    #[error("Date is required")]
    MissingDate,

    /// The date field could not be parsed as a calendar date.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// Could not acquire the lock on the expense store.
    #[error("could not acquire the store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.into_alert_response()
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::StoreLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
                .into_html(),
            )
                .into_response(),
            // Validation errors are normally rendered inline in the form, so
            // an alert only shows up when a request bypasses the form.
            error => (
                StatusCode::BAD_REQUEST,
                Alert::error("Invalid expense", &error.to_string()).into_html(),
            )
                .into_response(),
        }
    }
}
