//! Dashboard module
//!
//! Provides an overview page showing summary statistics, charts of income and
//! spending, and the most recent transactions.

mod aggregation;
mod cards;
mod charts;
mod handlers;
mod recent;

pub use handlers::get_dashboard_page;
