//! One-shot dataset store
//!
//! The store is filled exactly once from a [`DatasetSource`]. A failed fetch
//! is logged and leaves the store empty; callers never see the error.

use std::sync::Arc;

use serde::Serialize;

use crate::core::error::Result;
use crate::data::client::DatasetSource;
use crate::data::record::PopulationRecord;

/// Outcome of the one-shot load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

/// Immutable record set shared between snapshots
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Arc<[PopulationRecord]>,
    state: LoadState,
}

impl DatasetStore {
    /// Empty store awaiting its load
    pub fn pending() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            state: LoadState::Pending,
        }
    }

    /// Build the store from a fetch outcome, logging and swallowing failures
    pub fn from_fetch(result: Result<Vec<PopulationRecord>>) -> Self {
        match result {
            Ok(records) => {
                tracing::info!("Loaded {} population records", records.len());
                Self {
                    records: Arc::from(records),
                    state: LoadState::Loaded,
                }
            }
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                Self {
                    records: Arc::from(Vec::new()),
                    state: LoadState::Failed,
                }
            }
        }
    }

    /// Fetch once from `source`; never retries
    pub async fn load<S: DatasetSource>(source: &S) -> Self {
        tracing::debug!("Fetching population dataset");
        Self::from_fetch(source.fetch().await)
    }

    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    pub fn shared(&self) -> Arc<[PopulationRecord]> {
        Arc::clone(&self.records)
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::pending()
    }
}
