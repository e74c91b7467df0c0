//! Storage module for persisting pipeline artifacts
//!
//! This module handles reading and writing:
//! - The crawl graph (the hand-off between crawler and extractor)
//! - The visited path list
//! - The article catalog consumed by the search UI

mod json;
mod traits;

pub use json::JsonStorage;
pub use traits::{Storage, StorageError, StorageResult};

use crate::config::OutputConfig;

/// Opens JSON storage at the configured artifact paths
pub fn open_storage(config: &OutputConfig) -> JsonStorage {
    JsonStorage::from_config(config)
}
