//! CSV export of the transaction ledger.
//!
//! Produces a five column report (Date, Type, Category, Description, Amount)
//! with transactions in ledger order. The description column is always quoted
//! since it is free text, the other columns only ever hold values that cannot
//! contain commas or quotes.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    money::format_plain,
    store::JsonStore,
    timezone::get_local_date,
    transaction::Transaction,
};

/// The header row of the CSV report.
pub const CSV_HEADER: &str = "Date,Type,Category,Description,Amount";

/// Renders the transactions as CSV text, in the order given.
///
/// An empty ledger yields just the header row. Amounts are written as plain
/// decimal dollars with no trailing zeros, e.g. `12.5` for $12.50.
pub fn to_csv(transactions: &[Transaction]) -> String {
    let mut lines = Vec::with_capacity(transactions.len() + 1);
    lines.push(CSV_HEADER.to_owned());

    for transaction in transactions {
        let description = transaction.description.replace('"', "\"\"");

        lines.push(format!(
            "{},{},{},\"{}\",{}",
            transaction.date,
            transaction.kind.label(),
            transaction.category,
            description,
            format_plain(transaction.amount),
        ));
    }

    lines.join("\n")
}

/// The state needed to export the ledger.
#[derive(Debug, Clone)]
pub struct ExportState {
    /// The ledger store holding the transaction list.
    pub store: Arc<Mutex<JsonStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler that downloads the ledger as a CSV file.
///
/// The file is named after the local date, e.g. `finance_report_2024-03-01.csv`,
/// and starts with a UTF-8 byte order mark so spreadsheet applications detect
/// the encoding. Exporting an empty ledger is refused.
pub async fn export_transactions(State(state): State<ExportState>) -> Response {
    let Some(today) = get_local_date(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezone(state.local_timezone).into_response();
    };

    let csv = {
        let store = match state.store.lock() {
            Ok(store) => store,
            Err(error) => {
                tracing::error!("could not acquire ledger lock: {error}");
                return Error::LedgerLock.into_response();
            }
        };

        if store.transactions().is_empty() {
            return Error::EmptyExport.into_response();
        }

        to_csv(store.transactions())
    };

    let file_name = format!("finance_report_{today}.csv");
    let body = format!("\u{feff}{csv}");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        http::{StatusCode, header},
    };
    use time::macros::date;

    use crate::{
        store::JsonStore,
        transaction::{Transaction, TransactionKind},
    };

    use super::{CSV_HEADER, ExportState, export_transactions, to_csv};

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::build(TransactionKind::Expense, 1250, date!(2024 - 03 - 01))
                .description("lunch, dinner")
                .category("Food")
                .finalize(1),
            Transaction::build(TransactionKind::Income, 10000, date!(2024 - 01 - 05))
                .description("pay day")
                .category("Salary")
                .finalize(2),
        ]
    }

    #[test]
    fn to_csv_renders_header_only_for_empty_ledger() {
        assert_eq!(to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn to_csv_quotes_descriptions_and_preserves_ledger_order() {
        let csv = to_csv(&sample_transactions());

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "2024-03-01,Expense,Food,\"lunch, dinner\",12.5");
        assert_eq!(lines[2], "2024-01-05,Income,Salary,\"pay day\",100");
    }

    #[test]
    fn to_csv_doubles_embedded_quotes() {
        let transactions = vec![
            Transaction::build(TransactionKind::Expense, 500, date!(2024 - 03 - 01))
                .description("the \"good\" coffee")
                .category("Food")
                .finalize(1),
        ];

        let csv = to_csv(&transactions);

        assert!(csv.contains("\"the \"\"good\"\" coffee\""));
    }

    #[test]
    fn to_csv_output_parses_as_csv() {
        let csv = to_csv(&sample_transactions());

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][3], "lunch, dinner");
        assert_eq!(&records[0][4], "12.5");
        assert_eq!(&records[1][1], "Income");
    }

    #[tokio::test]
    async fn export_downloads_csv_with_byte_order_mark() {
        let mut store = JsonStore::ephemeral();
        store
            .append(
                Transaction::build(TransactionKind::Expense, 1250, date!(2024 - 03 - 01))
                    .description("lunch")
                    .category("Food"),
            )
            .unwrap();

        let state = ExportState {
            store: Arc::new(Mutex::new(store)),
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response = export_transactions(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );

        let content_disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        assert!(content_disposition.starts_with("attachment; filename=\"finance_report_"));
        assert!(content_disposition.ends_with(".csv\""));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with('\u{feff}'));
        assert!(text.contains(CSV_HEADER));
    }

    #[tokio::test]
    async fn export_refuses_empty_ledger() {
        let state = ExportState {
            store: Arc::new(Mutex::new(JsonStore::ephemeral())),
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response = export_transactions(State(state)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
