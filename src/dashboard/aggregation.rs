//! Transaction data aggregation for the dashboard and its charts.
//!
//! Provides functions to compute the ledger summary statistics, select recent
//! activity, and bucket income and expense totals by month and by category.

use std::collections::{HashMap, HashSet};

use time::Date;

use crate::{
    money::Cents,
    transaction::{Transaction, TransactionKind},
};

/// The number of transactions shown in the recent activity list.
pub(super) const RECENT_TRANSACTION_LIMIT: usize = 5;

/// The headline statistics for the whole ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct LedgerSummary {
    /// The sum of all income amounts.
    pub total_income: Cents,
    /// The sum of all expense amounts.
    pub total_expense: Cents,
    /// Income minus expenses. Negative when spending exceeds earnings.
    pub net_savings: Cents,
    /// Total expenses divided by the number of distinct dates that have at
    /// least one transaction of either kind.
    pub daily_average_expense: Cents,
}

/// The income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct MonthlyTotals {
    /// The month, as a date with the day set to 1.
    pub month: Date,
    pub income: Cents,
    pub expense: Cents,
}

/// Computes the headline statistics for the ledger.
///
/// The daily average divides by the number of distinct transaction dates, not
/// only dates with expenses: a day of pure income still counts as a day the
/// ledger was active. The division truncates to whole cents.
pub(super) fn summarize(transactions: &[Transaction]) -> LedgerSummary {
    let mut total_income = 0;
    let mut total_expense = 0;
    let mut days = HashSet::new();

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => total_income += transaction.amount,
            TransactionKind::Expense => total_expense += transaction.amount,
        }

        days.insert(transaction.date);
    }

    let day_count = days.len().max(1) as Cents;

    LedgerSummary {
        total_income,
        total_expense,
        net_savings: total_income - total_expense,
        daily_average_expense: total_expense / day_count,
    }
}

/// Selects the `limit` most recent transactions, newest first.
///
/// Transactions sharing a date are ordered by descending ID so the list is
/// stable across requests and the latest entry for a day shows first.
pub(super) fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    recent.sort_unstable_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    recent.truncate(limit);
    recent
}

/// Buckets income and expense totals by calendar month, in chronological order.
///
/// Every month that has at least one transaction appears in the output, with
/// an explicit zero for the kind that had none that month. Months with no
/// transactions at all are omitted.
pub(super) fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut totals: HashMap<Date, (Cents, Cents)> = HashMap::new();

    for transaction in transactions {
        let month = transaction.date.replace_day(1).unwrap();
        let entry = totals.entry(month).or_insert((0, 0));

        match transaction.kind {
            TransactionKind::Income => entry.0 += transaction.amount,
            TransactionKind::Expense => entry.1 += transaction.amount,
        }
    }

    let mut months: Vec<Date> = totals.keys().copied().collect();
    months.sort();

    months
        .into_iter()
        .map(|month| {
            let (income, expense) = totals[&month];
            MonthlyTotals {
                month,
                income,
                expense,
            }
        })
        .collect()
}

/// Sums expense amounts by category. Income is excluded.
pub(super) fn category_totals(transactions: &[Transaction]) -> HashMap<String, Cents> {
    let mut totals = HashMap::new();

    for transaction in transactions {
        if transaction.kind == TransactionKind::Expense {
            *totals.entry(transaction.category.clone()).or_insert(0) += transaction.amount;
        }
    }

    totals
}

/// Formats a month as a short label, e.g. "Jan 2024".
pub(super) fn format_month_label(month: Date) -> String {
    use time::Month;

    let name = match month.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{name} {}", month.year())
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::transaction::{Transaction, TransactionKind};

    use super::{
        LedgerSummary, RECENT_TRANSACTION_LIMIT, category_totals, format_month_label,
        monthly_series, recent_transactions, summarize,
    };

    fn create_test_transaction(
        id: i64,
        kind: TransactionKind,
        amount: i64,
        date: Date,
        category: &str,
    ) -> Transaction {
        Transaction::build(kind, amount, date)
            .category(category)
            .finalize(id)
    }

    #[test]
    fn summarize_computes_totals_and_daily_average() {
        let transactions = vec![
            create_test_transaction(
                1,
                TransactionKind::Income,
                10000,
                date!(2024 - 01 - 05),
                "Salary",
            ),
            create_test_transaction(
                2,
                TransactionKind::Expense,
                4000,
                date!(2024 - 01 - 05),
                "Food",
            ),
            create_test_transaction(
                3,
                TransactionKind::Expense,
                1000,
                date!(2024 - 02 - 01),
                "Transport",
            ),
        ];

        let summary = summarize(&transactions);

        assert_eq!(
            summary,
            LedgerSummary {
                total_income: 10000,
                total_expense: 5000,
                net_savings: 5000,
                // Two distinct dates, so 5000 / 2.
                daily_average_expense: 2500,
            }
        );
    }

    #[test]
    fn summarize_counts_income_only_days_in_the_average() {
        let transactions = vec![
            create_test_transaction(
                1,
                TransactionKind::Expense,
                3000,
                date!(2024 - 01 - 01),
                "Food",
            ),
            create_test_transaction(
                2,
                TransactionKind::Income,
                10000,
                date!(2024 - 01 - 02),
                "Salary",
            ),
        ];

        let summary = summarize(&transactions);

        assert_eq!(summary.daily_average_expense, 1500);
    }

    #[test]
    fn summarize_handles_empty_ledger() {
        let summary = summarize(&[]);

        assert_eq!(
            summary,
            LedgerSummary {
                total_income: 0,
                total_expense: 0,
                net_savings: 0,
                daily_average_expense: 0,
            }
        );
    }

    #[test]
    fn summarize_reports_negative_net_savings() {
        let transactions = vec![
            create_test_transaction(
                1,
                TransactionKind::Income,
                1000,
                date!(2024 - 01 - 01),
                "Salary",
            ),
            create_test_transaction(
                2,
                TransactionKind::Expense,
                2500,
                date!(2024 - 01 - 02),
                "Food",
            ),
        ];

        let summary = summarize(&transactions);

        assert_eq!(summary.net_savings, -1500);
    }

    #[test]
    fn recent_transactions_sorts_newest_first_and_truncates() {
        let mut transactions = Vec::new();
        for day in 1..=7 {
            transactions.push(create_test_transaction(
                day,
                TransactionKind::Expense,
                100,
                Date::from_calendar_date(2024, time::Month::January, day as u8).unwrap(),
                "Food",
            ));
        }

        let recent = recent_transactions(&transactions, RECENT_TRANSACTION_LIMIT);

        assert_eq!(recent.len(), RECENT_TRANSACTION_LIMIT);
        assert_eq!(recent[0].date, date!(2024 - 01 - 07));
        assert_eq!(recent[4].date, date!(2024 - 01 - 03));
    }

    #[test]
    fn recent_transactions_breaks_date_ties_by_descending_id() {
        let transactions = vec![
            create_test_transaction(
                1,
                TransactionKind::Expense,
                100,
                date!(2024 - 01 - 05),
                "Food",
            ),
            create_test_transaction(
                2,
                TransactionKind::Expense,
                200,
                date!(2024 - 01 - 05),
                "Food",
            ),
            create_test_transaction(
                3,
                TransactionKind::Expense,
                300,
                date!(2024 - 01 - 04),
                "Food",
            ),
        ];

        let recent = recent_transactions(&transactions, RECENT_TRANSACTION_LIMIT);

        let ids: Vec<i64> = recent.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn monthly_series_reports_zero_not_absent() {
        let transactions = vec![
            create_test_transaction(
                1,
                TransactionKind::Income,
                10000,
                date!(2024 - 01 - 05),
                "Salary",
            ),
            create_test_transaction(
                2,
                TransactionKind::Expense,
                4000,
                date!(2024 - 01 - 05),
                "Food",
            ),
            create_test_transaction(
                3,
                TransactionKind::Expense,
                1000,
                date!(2024 - 02 - 01),
                "Transport",
            ),
        ];

        let series = monthly_series(&transactions);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month, date!(2024 - 01 - 01));
        assert_eq!(series[0].income, 10000);
        assert_eq!(series[0].expense, 4000);
        assert_eq!(series[1].month, date!(2024 - 02 - 01));
        assert_eq!(series[1].income, 0);
        assert_eq!(series[1].expense, 1000);
    }

    #[test]
    fn monthly_series_is_chronological_regardless_of_insertion_order() {
        let transactions = vec![
            create_test_transaction(
                1,
                TransactionKind::Expense,
                100,
                date!(2024 - 03 - 15),
                "Food",
            ),
            create_test_transaction(
                2,
                TransactionKind::Expense,
                200,
                date!(2023 - 11 - 20),
                "Food",
            ),
            create_test_transaction(
                3,
                TransactionKind::Expense,
                300,
                date!(2024 - 01 - 10),
                "Food",
            ),
        ];

        let series = monthly_series(&transactions);

        let months: Vec<Date> = series.iter().map(|totals| totals.month).collect();
        assert_eq!(
            months,
            vec![
                date!(2023 - 11 - 01),
                date!(2024 - 01 - 01),
                date!(2024 - 03 - 01),
            ]
        );
    }

    #[test]
    fn category_totals_only_counts_expenses() {
        let transactions = vec![
            create_test_transaction(
                1,
                TransactionKind::Expense,
                4000,
                date!(2024 - 01 - 05),
                "Food",
            ),
            create_test_transaction(
                2,
                TransactionKind::Expense,
                1500,
                date!(2024 - 01 - 10),
                "Food",
            ),
            create_test_transaction(
                3,
                TransactionKind::Expense,
                2000,
                date!(2024 - 01 - 12),
                "Transport",
            ),
            create_test_transaction(
                4,
                TransactionKind::Income,
                10000,
                date!(2024 - 01 - 05),
                "Other",
            ),
        ];

        let totals = category_totals(&transactions);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Food"], 5500);
        assert_eq!(totals["Transport"], 2000);
    }

    #[test]
    fn format_month_label_includes_the_year() {
        assert_eq!(format_month_label(date!(2024 - 01 - 01)), "Jan 2024");
        assert_eq!(format_month_label(date!(2023 - 12 - 01)), "Dec 2023");
    }
}
