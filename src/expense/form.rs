//! The add-expense form view.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The categories offered by the form's drop-down.
///
/// The first entry is the default selection.
pub(crate) const FORM_CATEGORIES: [&str; 7] = [
    "Other",
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
    "Health",
    "Shopping",
];

/// Render the add-expense form.
///
/// A non-empty `error_message` is shown beneath the fields; the submitted
/// values are not echoed back because a failed add leaves the page's state
/// untouched.
pub(crate) fn expense_form_view(error_message: &str) -> Markup {
    let create_expense_endpoint = endpoints::EXPENSES_API;

    html! {
        form
            hx-post=(create_expense_endpoint)
            hx-target="#expenses-content"
            hx-swap="outerHTML"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label
                    for="name"
                    class=(FORM_LABEL_STYLE)
                {
                    "Name"
                }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Coffee"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    placeholder="0.00"
                    step="0.01"
                    min="0"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                select
                    id="category"
                    name="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in FORM_CATEGORIES {
                        option value=(category) { (category) }
                    }
                }
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    id="date"
                    type="date"
                    name="date"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}

#[cfg(test)]
mod expense_form_tests {
    use scraper::Html;

    use crate::{
        endpoints,
        test_utils::{assert_form_input, assert_form_submit_button, assert_valid_html, must_get_form},
    };

    use super::expense_form_view;

    #[test]
    fn form_posts_to_expenses_api() {
        let markup = expense_form_view("");

        let html = Html::parse_fragment(&markup.into_string());
        assert_valid_html(&html);

        let form = must_get_form(&html);
        let hx_post = form
            .value()
            .attr("hx-post")
            .expect("hx-post attribute missing");
        assert_eq!(hx_post, endpoints::EXPENSES_API);
    }

    #[test]
    fn form_has_all_fields() {
        let markup = expense_form_view("");

        let html = Html::parse_fragment(&markup.into_string());
        let form = must_get_form(&html);

        assert_form_input(&form, "name", "text");
        assert_form_input(&form, "amount", "number");
        assert_form_input(&form, "date", "date");
        assert_form_submit_button(&form);
    }

    #[test]
    fn form_shows_error_message() {
        let markup = expense_form_view("Name is required");

        let html = Html::parse_fragment(&markup.into_string());
        let form = must_get_form(&html);

        let p = scraper::Selector::parse("p").unwrap();
        let error_message: String = form
            .select(&p)
            .next()
            .expect("No error message found")
            .text()
            .collect();
        assert_eq!(error_message.trim(), "Name is required");
    }
}
