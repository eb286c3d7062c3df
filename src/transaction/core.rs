//! Defines the core data model for transactions.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::money::Cents;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// Whether a transaction brought money in or sent money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. a grocery run.
    Expense,
}

impl TransactionKind {
    /// The human-readable label used in tables and the CSV export.
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

/// The categories offered for income transactions.
pub const INCOME_CATEGORIES: [&str; 4] = ["Salary", "Freelance", "Investment", "Other"];

/// The categories offered for expense transactions.
pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Housing",
    "Entertainment",
    "Health",
    "Shopping",
    "Utilities",
    "Other",
];

/// An income or expense, i.e. an event where money was either earned or spent.
///
/// To create a new `Transaction`, use [Transaction::build].
///
/// The serialized form is the ledger file's wire format: `kind` appears under
/// the field name `type` as `"income"`/`"expense"`, `amount` as a decimal
/// dollar number, and `date` as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction. Unique within a ledger.
    pub id: TransactionId,
    /// Whether this transaction is an income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// A text description of what the transaction was for. May be empty.
    pub description: String,
    /// The amount of money earned or spent, in whole cents. Never negative.
    #[serde(with = "crate::money::dollars")]
    pub amount: Cents,
    /// The category the transaction belongs to, e.g. "Food", "Salary".
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(kind: TransactionKind, amount: Cents, date: Date) -> TransactionBuilder {
        TransactionBuilder {
            kind,
            amount,
            date,
            description: String::new(),
            category: "Other".to_owned(),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The ID is not set here: it is assigned by the ledger store when the
/// transaction is appended, so that IDs stay unique within the ledger.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// Whether this transaction is an income or an expense.
    pub kind: TransactionKind,
    /// The amount of money earned or spent, in whole cents.
    pub amount: Cents,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The category the transaction belongs to.
    pub category: String,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Attach an ID, producing the final [Transaction].
    pub(crate) fn finalize(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod serialization_tests {
    use time::macros::date;

    use super::{Transaction, TransactionKind};

    #[test]
    fn serializes_to_the_ledger_wire_format() {
        let transaction = Transaction::build(TransactionKind::Expense, 1250, date!(2024 - 03 - 01))
            .description("lunch, dinner")
            .category("Food")
            .finalize(7);

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "type": "expense",
                "description": "lunch, dinner",
                "amount": 12.5,
                "category": "Food",
                "date": "2024-03-01",
            })
        );
    }

    #[test]
    fn deserializes_from_the_ledger_wire_format() {
        let json = r#"{
            "id": 1,
            "type": "income",
            "description": "",
            "amount": 100.0,
            "category": "Salary",
            "date": "2024-01-05"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.kind, TransactionKind::Income);
        assert_eq!(transaction.amount, 10000);
        assert_eq!(transaction.category, "Salary");
        assert_eq!(transaction.date, date!(2024 - 01 - 05));
    }

    #[test]
    fn rejects_non_finite_amounts() {
        let json = r#"{
            "id": 1,
            "type": "income",
            "description": "",
            "amount": 1e999,
            "category": "Salary",
            "date": "2024-01-05"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn rejects_negative_amounts() {
        let json = r#"{
            "id": 1,
            "type": "expense",
            "description": "",
            "amount": -5.0,
            "category": "Food",
            "date": "2024-01-05"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn rejects_unparseable_dates() {
        let json = r#"{
            "id": 1,
            "type": "expense",
            "description": "",
            "amount": 5.0,
            "category": "Food",
            "date": "not a date"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
