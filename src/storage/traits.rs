//! Storage traits and error types
//!
//! This module defines the trait interface for artifact persistence and
//! associated error types.

use crate::crawler::{CrawlGraph, CrawlOutput, VisitedPaths};
use crate::extractor::ArticleCatalog;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for artifact storage implementations
///
/// The crawl graph is the only hand-off between the two pipeline stages: the
/// extractor reads it back and ignores the visited paths.
pub trait Storage {
    // ===== Crawl Artifacts =====

    /// Persists the crawl graph, replacing any previous one
    fn save_graph(&mut self, graph: &CrawlGraph) -> StorageResult<()>;

    /// Loads the persisted crawl graph
    ///
    /// # Errors
    ///
    /// `StorageError::NotFound` if no crawl has been persisted yet.
    fn load_graph(&self) -> StorageResult<CrawlGraph>;

    /// Persists the visited paths, replacing any previous list
    fn save_visited(&mut self, visited: &VisitedPaths) -> StorageResult<()>;

    /// Loads the persisted visited paths
    fn load_visited(&self) -> StorageResult<VisitedPaths>;

    /// Persists both artifacts of a finished crawl
    fn save_crawl(&mut self, output: &CrawlOutput) -> StorageResult<()> {
        self.save_graph(&output.graph)?;
        self.save_visited(&output.visited)
    }

    // ===== Extraction Artifacts =====

    /// Persists the article catalog, replacing any previous one
    fn save_catalog(&mut self, catalog: &ArticleCatalog) -> StorageResult<()>;

    /// Loads the persisted article catalog
    fn load_catalog(&self) -> StorageResult<ArticleCatalog>;
}
