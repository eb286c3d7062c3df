//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for ledger data:
//! - **Monthly Trend Chart**: Income and expense totals for each month
//! - **Expense Categories Chart**: Doughnut breakdown of spending by category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use std::collections::HashMap;

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisType, JsFunction, Tooltip, Trigger},
    series::{Line, Pie},
};
use maud::PreEscaped;

use crate::{
    dashboard::aggregation::{MonthlyTotals, format_month_label},
    html::HeadElement,
    money::{Cents, dollars_from_cents},
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

pub(super) fn monthly_trend_chart(series: &[MonthlyTotals]) -> Chart {
    let labels: Vec<String> = series
        .iter()
        .map(|totals| format_month_label(totals.month))
        .collect();
    let income: Vec<f64> = series
        .iter()
        .map(|totals| dollars_from_cents(totals.income))
        .collect();
    let expenses: Vec<f64> = series
        .iter()
        .map(|totals| dollars_from_cents(totals.expense))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Monthly Trend")
                .subtext("Income and expenses by month"),
        )
        .tooltip(currency_tooltip(Trigger::Axis))
        .legend(Legend::new().top("bottom"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("10%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Income").data(income))
        .series(Line::new().name("Expenses").data(expenses))
}

pub(super) fn category_chart(category_totals: &HashMap<String, Cents>) -> Chart {
    // Sort by category name so the chart is stable across page loads.
    let mut sorted_totals: Vec<(&String, &Cents)> = category_totals.iter().collect();
    sorted_totals.sort_by(|a, b| a.0.cmp(b.0));

    let data: Vec<(f64, &str)> = sorted_totals
        .into_iter()
        .map(|(category, &total)| (dollars_from_cents(total), category.as_str()))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Expense Categories")
                .subtext("Where the money went"),
        )
        .tooltip(currency_tooltip(Trigger::Item))
        .legend(Legend::new().top("bottom"))
        .series(
            Pie::new()
                .name("Expenses")
                .radius(vec!["50%", "75%"])
                .data(data),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip(trigger: Trigger) -> Tooltip {
    Tooltip::new()
        .trigger(trigger)
        .value_formatter(currency_formatter())
}
