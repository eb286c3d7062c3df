//! JSON-file persistence for the transaction ledger.
//!
//! The whole ledger is stored as one JSON array of transaction objects. The
//! store loads it once at startup, keeps the canonical list in memory, and
//! rewrites the file after every append. Appending is the only mutation:
//! transactions are never edited or deleted.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    Error,
    transaction::{Transaction, TransactionBuilder},
};

/// The ledger store: the transaction list plus its backing JSON file.
#[derive(Debug)]
pub struct JsonStore {
    path: Option<PathBuf>,
    transactions: Vec<Transaction>,
}

impl JsonStore {
    /// Open the ledger file at `path`, creating an empty ledger if the file
    /// does not exist yet.
    ///
    /// # Errors
    /// Returns [Error::LedgerIo] if the file cannot be read, or
    /// [Error::InvalidData] if it does not contain a valid transaction list.
    /// Records with an unparseable date or a non-finite or negative amount
    /// fail the load rather than silently poisoning later aggregates.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();

        let transactions = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|error| Error::InvalidData(error.to_string()))?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(error) => return Err(error.into()),
        };

        Ok(Self {
            path: Some(path),
            transactions,
        })
    }

    /// Create a store with no backing file.
    ///
    /// Appends are kept in memory only. This is the test fixture equivalent
    /// of an in-memory database connection.
    pub fn ephemeral() -> Self {
        Self {
            path: None,
            transactions: Vec::new(),
        }
    }

    /// The transactions in the ledger, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append a new transaction to the ledger and save the file.
    ///
    /// The transaction is assigned the next ID above the current maximum, so
    /// IDs are unique and increase monotonically within a ledger.
    ///
    /// # Errors
    /// Returns [Error::LedgerIo] if the ledger file cannot be written. The
    /// in-memory list is not modified when the save fails.
    pub fn append(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let id = self
            .transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or(0)
            + 1;

        let transaction = builder.finalize(id);

        self.transactions.push(transaction.clone());

        if let Err(error) = self.save() {
            self.transactions.pop();
            return Err(error);
        }

        Ok(transaction)
    }

    /// Write the whole ledger to the backing file, if there is one.
    ///
    /// The file is written to a sibling temp file first and then renamed into
    /// place, so an interrupted save cannot leave a truncated ledger behind.
    fn save(&self) -> Result<(), Error> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let text = serde_json::to_string_pretty(&self.transactions)
            .map_err(|error| Error::InvalidData(error.to_string()))?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, text)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}
