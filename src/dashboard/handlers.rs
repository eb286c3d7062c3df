//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for rendering the dashboard UI

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use std::sync::{Arc, Mutex};

use crate::{
    AppState, Error,
    dashboard::{
        aggregation::{
            RECENT_TRANSACTION_LIMIT, category_totals, monthly_series, recent_transactions,
            summarize,
        },
        cards::summary_cards_view,
        charts::{DashboardChart, category_chart, charts_script, monthly_trend_chart},
        recent::recent_transactions_view,
    },
    endpoints,
    html::{HeadElement, base, link},
    navigation::NavBar,
    store::JsonStore,
    transaction::Transaction,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The ledger store holding the transaction list.
    pub store: Arc<Mutex<JsonStore>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display a page with an overview of the user's transactions.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLock)?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);
    let transactions = store.transactions();

    if transactions.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    Ok(dashboard_view(nav_bar, transactions).into_response())
}

/// Creates the array of dashboard charts from transaction data.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(transactions: &[Transaction]) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "monthly-trend-chart",
            options: monthly_trend_chart(&monthly_series(transactions)).to_string(),
        },
        DashboardChart {
            id: "category-chart",
            options: category_chart(&category_totals(transactions)).to_string(),
        },
    ]
}

/// Renders the dashboard page when no transaction data exists.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "recording a transaction");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Statistics and charts will show up here once you add some
                transactions. Start by " (new_transaction_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the main dashboard page with summary cards, charts and the recent
/// activity list.
fn dashboard_view(nav_bar: NavBar, transactions: &[Transaction]) -> Markup {
    let nav_bar = nav_bar.into_html();
    let summary = summarize(transactions);
    let charts = build_dashboard_charts(transactions);
    let recent = recent_transactions(transactions, RECENT_TRANSACTION_LIMIT);

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (summary_cards_view(&summary))

            section
                id="charts"
                class="w-full mx-auto mb-4"
            {
                div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
                {
                    @for chart in &charts {
                        div
                            id=(chart.id)
                            class="min-h-[380px] rounded dark:bg-gray-100"
                        {}
                    }
                }
            }

            (recent_transactions_view(&recent))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(
            "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js".to_owned(),
        ),
        charts_script(&charts),
    ];

    base("Dashboard", &scripts, &content)
}
