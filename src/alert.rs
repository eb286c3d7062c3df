//! Alert system for displaying error messages to users.
//!
//! Alerts are rendered as an out-of-band htmx swap targeting the
//! `#alert-container` div that [crate::html::base] puts on every page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// Renders an error alert with appropriate styling
pub struct AlertView<'a> {
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> AlertView<'a> {
    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_markup(self) -> Markup {
        let container_style = "flex items-center p-4 mb-4 text-sm text-red-800 rounded-lg \
            bg-red-50 dark:bg-gray-800 dark:text-red-400 shadow";

        html! {
            div id="alert-container" hx-swap-oob="true" class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div class=(container_style) role="alert"
                {
                    span class="me-2" { "⚠" }

                    div
                    {
                        span class="font-medium" { (self.message) }

                        @if !self.details.is_empty() {
                            " " (self.details)
                        }
                    }
                }
            }
        }
    }

    /// Render the alert as an HTTP response with the given status code.
    pub fn into_response(self, status_code: StatusCode) -> Response {
        (status_code, self.into_markup()).into_response()
    }
}
