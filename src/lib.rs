//! Pocketbook is a small web app for tracking personal income and expenses.
//!
//! It serves server-rendered HTML backed by a single JSON ledger file: a
//! dashboard with summary statistics, charts and recent activity, a form for
//! recording transactions, and a CSV export of the full ledger.

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
mod dashboard;
mod endpoints;
mod export;
mod html;
mod internal_server_error;
mod money;
mod navigation;
mod not_found;
mod routing;
mod store;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use routing::build_router;
pub use store::JsonStore;

use crate::{
    alert::AlertView,
    html::error_view,
    internal_server_error::{InternalServerErrorPage, render_internal_server_error},
};

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
    /// The submitted transaction amount was zero, negative, or not a number.
    #[error("{0} is not a valid transaction amount")]
    InvalidAmount(f64),

    /// The ledger file could not be read or written.
    #[error("could not read or write the ledger file: {0}")]
    LedgerIo(String),

    /// The ledger file did not contain a valid transaction list.
    ///
    /// This covers syntactically broken JSON as well as records that fail
    /// validation on load, e.g. an unparseable date or a non-finite amount.
    /// Rejecting these when the ledger is loaded means the aggregation code
    /// only ever sees well-formed records.
    #[error("the ledger file contains invalid data: {0}")]
    InvalidData(String),

    /// Could not acquire the lock guarding the ledger store.
    #[error("could not acquire the ledger lock")]
    LedgerLock,

    /// A CSV export was requested while the ledger is empty.
    #[error("there are no transactions to export")]
    EmptyExport,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::EmptyExport => (
                StatusCode::BAD_REQUEST,
                error_view(
                    "Nothing to Export",
                    "400",
                    "There are no transactions to export.",
                    "Record a transaction first, then try the export again.",
                ),
            )
                .into_response(),
            Error::InvalidTimezone(timezone) => {
                render_internal_server_error(InternalServerErrorPage {
                    description: "Invalid Timezone Settings",
                    fix: &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings \
                    and ensure the timezone has been set to a valid, canonical timezone string"
                    ),
                })
            }
            Error::LedgerLock => render_internal_server_error(Default::default()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidAmount(amount) => AlertView::error(
                "Invalid transaction amount",
                &format!("{amount} is not a valid amount. Enter a positive number of dollars."),
            )
            .into_response(StatusCode::BAD_REQUEST),
            Error::InvalidTimezone(timezone) => AlertView::error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings \
                    and ensure the timezone has been set to a valid, canonical timezone string"
                ),
            )
            .into_response(StatusCode::INTERNAL_SERVER_ERROR),
            Error::EmptyExport => AlertView::error(
                "Nothing to export",
                "There are no transactions to export yet.",
            )
            .into_response(StatusCode::BAD_REQUEST),
            _ => AlertView::error(
                "Something went wrong",
                "An unexpected error occurred, check the server logs for more details.",
            )
            .into_response(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::LedgerIo(value.to_string())
    }
}
