//! Crawler module for scoped breadth-first traversal
//!
//! This module contains the core crawling logic, including:
//! - Single-attempt HTTP fetching with Content-Type checks
//! - HTML link extraction
//! - The FIFO frontier with visited-set deduplication
//! - The crawl loop producing the link graph and visited paths

mod coordinator;
mod fetcher;
mod frontier;
mod graph;
mod parser;

pub use coordinator::{run_crawl, Coordinator, CrawlOutput};
pub use fetcher::{build_http_client, fetch_url, is_html, FetchResult};
pub use frontier::Frontier;
pub use graph::{CrawlGraph, VisitedPaths};
pub use parser::extract_links;

use crate::config::Config;
use crate::IndexerError;

/// Runs a complete crawl operation
///
/// This is the main entry point for the first pipeline stage. It will:
/// 1. Derive the scope host and prefix from the root URL
/// 2. Build the HTTP client
/// 3. Visit pages breadth-first until the frontier is empty
/// 4. Return the link graph, visited paths, and statistics
///
/// Nothing is persisted here; see [`crate::storage`].
pub async fn crawl(config: &Config) -> Result<CrawlOutput, IndexerError> {
    run_crawl(config).await
}
