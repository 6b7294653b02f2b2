//! Dataset retrieval, storage and per-year filtering

pub mod client;
pub mod filter;
pub mod record;
pub mod store;

pub use client::{DatasetSource, PopulationClient};
pub use filter::{filter_year, FilteredView};
pub use record::PopulationRecord;
pub use store::{DatasetStore, LoadState};
