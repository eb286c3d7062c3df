//! Card components for the dashboard's headline statistics.
//!
//! Renders a row of four cards: total income, total expenses, net savings,
//! and the average amount spent per active day.

use maud::{Markup, html};

use crate::{dashboard::aggregation::LedgerSummary, money::format_currency};

/// Renders the summary statistic cards for the ledger.
pub(super) fn summary_cards_view(summary: &LedgerSummary) -> Markup {
    let net_savings_style = if summary.net_savings < 0 {
        "text-3xl font-bold text-red-600 dark:text-red-400"
    } else {
        "text-3xl font-bold text-green-600 dark:text-green-400"
    };

    html! {
        section class="w-full mx-auto mb-4" {
            div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4" {
                (summary_card(
                    "Total Income",
                    &format_currency(summary.total_income),
                    "text-3xl font-bold text-green-600 dark:text-green-400",
                ))

                (summary_card(
                    "Total Expenses",
                    &format_currency(summary.total_expense),
                    "text-3xl font-bold text-red-600 dark:text-red-400",
                ))

                (summary_card(
                    "Net Savings",
                    &format_currency(summary.net_savings),
                    net_savings_style,
                ))

                (summary_card(
                    "Daily Avg Expense",
                    &format_currency(summary.daily_average_expense),
                    "text-3xl font-bold",
                ))
            }
        }
    }
}

/// Renders a single statistic card.
fn summary_card(title: &str, value: &str, value_style: &str) -> Markup {
    html! {
        div
            class="bg-white dark:bg-gray-800 border border-gray-200
                   dark:border-gray-700 rounded-lg p-4 shadow-md"
        {
            h4 class="text-sm font-medium text-gray-600 dark:text-gray-400 mb-2" {
                (title)
            }

            div class=(value_style) {
                (value)
            }
        }
    }
}
