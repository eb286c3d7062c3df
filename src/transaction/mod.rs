//! Transaction management for the money tracking application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The shared form fields for recording a transaction
//! - View handlers for transaction-related web pages

mod core;
mod create_endpoint;
mod form;
mod new_transaction_page;

pub use core::{
    EXPENSE_CATEGORIES, INCOME_CATEGORIES, Transaction, TransactionBuilder, TransactionId,
    TransactionKind,
};
pub use create_endpoint::create_transaction_endpoint;
pub use new_transaction_page::get_new_transaction_page;
