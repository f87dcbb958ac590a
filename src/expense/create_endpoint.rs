//! Expense creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::html;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    alert::Alert,
    expense::{
        CategoryName, Expense, ExpenseName, ExpenseStore,
        core::{parse_amount, parse_iso_date},
    },
    expenses_page::expenses_content,
    timezone::local_offset_or_utc,
};

/// The state needed for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseEndpointState {
    pub store: Arc<Mutex<ExpenseStore>>,
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpenseEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The data submitted by the add-expense form.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseFormData {
    pub name: String,
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
}

/// A route handler for creating a new expense.
///
/// On success, responds with the refreshed page content and a success
/// alert. Validation failures re-render the content with the error shown
/// in the form and leave the store untouched.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseEndpointState>,
    Form(form_data): Form<ExpenseFormData>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    let expense = match build_expense(&form_data, &state.local_timezone) {
        Ok(expense) => expense,
        Err(error) => {
            return expenses_content(store.all(), &error.to_string()).into_response();
        }
    };

    let expense = store.add(expense);
    tracing::info!("Added expense {} ({})", expense.id, expense.name);

    let alert = Alert::success("Expense added successfully!");

    html! {
        (expenses_content(store.all(), ""))
        (alert.into_html())
    }
    .into_response()
}

/// Validate the form data and build the expense to append.
///
/// The date field is required at this boundary, matching the form's own
/// `required` attribute; the builder's today-default only applies to
/// records created without a form, e.g. through the scripting handle.
fn build_expense(form_data: &ExpenseFormData, local_timezone: &str) -> Result<Expense, Error> {
    let name = ExpenseName::new(&form_data.name)?;
    let amount = parse_amount(&form_data.amount)?;
    let date = parse_iso_date(&form_data.date)?;

    Expense::build(name, amount)
        .category(CategoryName::new(&form_data.category))
        .date(date)
        .finalize(local_offset_or_utc(local_timezone))
}
