//! Transient alert messages shown after user actions.
//!
//! Alerts render as an htmx out-of-band fragment that replaces the
//! `#alert-container` element in the page shell, so they can ride along
//! with any response. A timer empties the container again after a couple
//! of seconds.

use axum::response::{IntoResponse, Response};
use maud::{Markup, PreEscaped, html};

/// How long an alert stays on screen before it dismisses itself.
const ALERT_DISMISS_MS: u32 = 2000;

const ALERT_SUCCESS_STYLE: &str = "flex items-center gap-3 p-4 rounded-lg shadow-lg \
    text-green-800 bg-green-100 dark:bg-green-900 dark:text-green-200";

const ALERT_ERROR_STYLE: &str = "flex items-center gap-3 p-4 rounded-lg shadow-lg \
    text-red-800 bg-red-100 dark:bg-red-900 dark:text-red-200";

/// An alert message to display to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The action succeeded.
    Success {
        /// The message to display.
        message: String,
    },
    /// The action failed.
    Error {
        /// A short description of what went wrong.
        message: String,
        /// An optional longer explanation.
        details: String,
    },
}

impl Alert {
    /// Create a success alert.
    pub fn success(message: &str) -> Self {
        Self::Success {
            message: message.to_owned(),
        }
    }

    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as an out-of-band swap for `#alert-container`.
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message } => (ALERT_SUCCESS_STYLE, message, String::new()),
            Alert::Error { message, details } => (ALERT_ERROR_STYLE, message, details),
        };

        html! {
            div
                id="alert-container"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                hx-swap-oob="true"
            {
                div class=(style) role="alert"
                {
                    div
                    {
                        p class="font-medium" { (message) }

                        @if !details.is_empty() {
                            p class="text-sm" { (details) }
                        }
                    }
                }

                script
                {
                    (PreEscaped(format!(
                        "setTimeout(() => document.getElementById('alert-container').replaceChildren(), {ALERT_DISMISS_MS});"
                    )))
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
