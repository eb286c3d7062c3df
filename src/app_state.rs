//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::store::JsonStore;

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The ledger store guarding the transaction list and its backing file.
    pub store: Arc<Mutex<JsonStore>>,
}

impl AppState {
    /// Create a new [AppState] from an opened ledger store.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(store: JsonStore, local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
            store: Arc::new(Mutex::new(store)),
        }
    }
}
