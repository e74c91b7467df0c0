//! Extractor module turning article pages into structured records
//!
//! This module contains the second pipeline stage:
//! - Selecting article detail pages from the crawl graph
//! - Fetching each article once, sequentially, with a fixed delay
//! - Pulling fields out of the HTML through selector fallback chains
//! - Building article records with tags and keywords

mod fields;
mod pipeline;
mod record;
mod selection;

pub use fields::{
    extract_fields, normalize_whitespace, visible_text, ExtractedFields, DEFAULT_TYPE,
    UNKNOWN_DATE, UNTITLED,
};
pub use pipeline::{run_extraction, ExtractionOutput, Extractor};
pub use record::{describe, ArticleCatalog, ArticleRecord, DESCRIPTION_CHARS};
pub use selection::{select_article_urls, ArticleFilter, Selection};

use crate::config::{ExtractorConfig, UserAgentConfig};
use crate::crawler::CrawlGraph;
use crate::IndexerError;

/// Runs a complete extraction operation
///
/// This is the main entry point for the second pipeline stage. Per-article
/// failures are counted in the returned statistics, never returned as errors;
/// only an unusable HTTP client configuration fails the whole call.
pub async fn extract(
    graph: &CrawlGraph,
    config: &ExtractorConfig,
    user_agent: &UserAgentConfig,
) -> Result<ExtractionOutput, IndexerError> {
    run_extraction(graph, config, user_agent).await
}
