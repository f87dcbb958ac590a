//! The expenses page: the list of recorded expenses, the spending summary,
//! and the add-expense form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    expense::{Expense, ExpenseStore, expense_form_view, summary},
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency, format_date, truncate_name,
    },
};

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    pub store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Route handler for the expenses page.
pub async fn get_expenses_page(State(state): State<ExpensesPageState>) -> Result<Response, Error> {
    let store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            (expenses_content(store.all(), ""))
        }
    };

    Ok(base("Expenses", &content).into_response())
}

/// Render the page content that changes when the store changes: the
/// summary, the add form, and the expense list.
///
/// Mutation endpoints return this fragment so htmx can swap it in place of
/// the previous one, which re-renders the list and totals in the same turn
/// as the mutation.
pub(crate) fn expenses_content(expenses: &[Expense], form_error: &str) -> Markup {
    html! {
        section id="expenses-content" class="w-full max-w-5xl space-y-8"
        {
            section class="grid gap-8 md:grid-cols-2"
            {
                div class="rounded bg-white dark:bg-gray-800 p-6 shadow"
                {
                    h2 class="text-xl font-bold mb-4" { "Add Expense" }

                    (expense_form_view(form_error))
                }

                div class="rounded bg-white dark:bg-gray-800 p-6 shadow"
                {
                    h2 class="text-xl font-bold mb-4" { "Summary" }

                    p class="text-3xl font-semibold mb-4" id="total"
                    {
                        (format_currency(summary::total(expenses)))
                    }

                    (summary_table(expenses))
                }
            }

            section class="rounded bg-white dark:bg-gray-800 shadow overflow-hidden"
            {
                header class="flex justify-between flex-wrap items-end p-6"
                {
                    h2 class="text-xl font-bold" { "Transactions" }

                    button
                        hx-delete=(endpoints::EXPENSES_API)
                        hx-confirm="Clear ALL expenses? This cannot be undone."
                        hx-target="#expenses-content"
                        hx-swap="outerHTML"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Clear All"
                    }
                }

                (expenses_table(expenses))
            }
        }
    }
}

fn summary_table(expenses: &[Expense]) -> Markup {
    let subtotals = summary::by_category(expenses);

    html! {
        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            id="by-category"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Subtotal" }
                }
            }

            tbody
            {
                @if subtotals.is_empty() {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td colspan="2" class={(TABLE_CELL_STYLE) " text-center"}
                        {
                            "No data available"
                        }
                    }
                }

                @for subtotal in &subtotals {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE)
                        {
                            span class=(CATEGORY_BADGE_STYLE) { (subtotal.category) }
                        }

                        td class=(TABLE_CELL_STYLE) { (format_currency(subtotal.subtotal)) }
                    }
                }
            }
        }
    }
}

fn expenses_table(expenses: &[Expense]) -> Markup {
    // Most recent first. The sort is stable, so expenses on the same date
    // keep their insertion order.
    let mut rows: Vec<&Expense> = expenses.iter().collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));

    let table_row = |expense: &Expense| {
        let delete_url = endpoints::format_endpoint(endpoints::DELETE_EXPENSE, expense.id.as_ref());

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) title=(expense.name)
                {
                    (truncate_name(expense.name.as_ref()))
                }

                td class=(TABLE_CELL_STYLE)
                {
                    span class=(CATEGORY_BADGE_STYLE) { (expense.category) }
                }

                td class=(TABLE_CELL_STYLE) { (format_date(expense.date)) }

                td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }

                td class=(TABLE_CELL_STYLE)
                {
                    button
                        hx-delete=(delete_url)
                        hx-confirm="Delete this expense?"
                        hx-target="#expenses-content"
                        hx-swap="outerHTML"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        )
    };

    html! {
        table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            id="transactions"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @if rows.is_empty() {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td colspan="5" class={(TABLE_CELL_STYLE) " text-center"}
                        {
                            "No transactions yet. Add your first expense!"
                        }
                    }
                }

                @for expense in rows {
                    (table_row(expense))
                }
            }
        }
    }
}
