//! Output module for crawl and extraction reporting
//!
//! This module handles:
//! - Counting page outcomes and links during a crawl
//! - Counting extraction successes and failures
//! - Summarizing persisted artifacts for `--stats`

pub mod stats;

pub use stats::{
    print_catalog_statistics, print_crawl_statistics, print_extraction_statistics,
    CatalogStatistics, CrawlStatistics, ExtractionStatistics,
};

use crate::storage::{Storage, StorageError};

/// Statistics derived from whatever artifacts have been persisted
#[derive(Debug, Clone, Default)]
pub struct PersistedStatistics {
    /// Present once a crawl graph has been saved
    pub crawl: Option<CrawlStatistics>,

    /// Present once a catalog has been saved
    pub catalog: Option<CatalogStatistics>,
}

/// Loads statistics from storage
///
/// Missing artifacts are reported as `None`; unreadable ones are errors.
pub fn load_statistics(storage: &dyn Storage) -> Result<PersistedStatistics, StorageError> {
    let crawl = match storage.load_graph() {
        Ok(graph) => Some(CrawlStatistics::from_graph(&graph)),
        Err(StorageError::NotFound(_)) => None,
        Err(e) => return Err(e),
    };

    let catalog = match storage.load_catalog() {
        Ok(catalog) => Some(CatalogStatistics::from_catalog(&catalog)),
        Err(StorageError::NotFound(_)) => None,
        Err(e) => return Err(e),
    };

    Ok(PersistedStatistics { crawl, catalog })
}
