//! The recent activity list for the dashboard.

use maud::{Markup, html};

use crate::{
    money::format_currency,
    transaction::{Transaction, TransactionKind},
};

/// Renders the list of the most recent transactions, newest first.
pub(super) fn recent_transactions_view(transactions: &[Transaction]) -> Markup {
    html! {
        section class="w-full mx-auto mb-4" {
            div class="flex justify-between items-baseline mb-4" {
                h3 class="text-xl font-semibold" {
                    "Recent Transactions"
                }
            }

            ul class="bg-white dark:bg-gray-800 border border-gray-200
                      dark:border-gray-700 rounded-lg shadow-md divide-y
                      divide-gray-200 dark:divide-gray-700"
            {
                @for transaction in transactions {
                    li class="flex justify-between items-center px-4 py-3" {
                        div class="min-w-0" {
                            div class="font-medium truncate" {
                                @if transaction.description.is_empty() {
                                    (transaction.category)
                                } @else {
                                    (transaction.description)
                                }
                            }

                            div class="text-sm text-gray-600 dark:text-gray-400" {
                                (transaction.category) " · " (transaction.date)
                            }
                        }

                        (amount_view(transaction))
                    }
                }
            }
        }
    }
}

fn amount_view(transaction: &Transaction) -> Markup {
    let (sign, style) = match transaction.kind {
        TransactionKind::Income => ("+", "font-semibold text-green-600 dark:text-green-400"),
        TransactionKind::Expense => ("-", "font-semibold text-red-600 dark:text-red-400"),
    };

    html! {
        span class=(style) {
            (sign) (format_currency(transaction.amount))
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::transaction::{Transaction, TransactionKind};

    use super::recent_transactions_view;

    #[test]
    fn renders_one_list_item_per_transaction() {
        let transactions = vec![
            Transaction::build(TransactionKind::Expense, 1250, date!(2024 - 03 - 01))
                .description("lunch")
                .category("Food")
                .finalize(1),
            Transaction::build(TransactionKind::Income, 10000, date!(2024 - 01 - 05))
                .category("Salary")
                .finalize(2),
        ];

        let markup = recent_transactions_view(&transactions);
        let document = Html::parse_fragment(&markup.into_string());

        let selector = Selector::parse("li").unwrap();
        assert_eq!(document.select(&selector).count(), 2);

        let text = document.root_element().text().collect::<String>();
        assert!(text.contains("lunch"));
        assert!(text.contains("-$12.50"));
        assert!(text.contains("+$100.00"));
        // A transaction without a description falls back to its category.
        assert!(text.contains("Salary"));
    }
}
