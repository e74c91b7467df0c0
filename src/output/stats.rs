//! Statistics for crawl and extraction runs
//!
//! This module provides the counters kept while the pipeline runs, the same
//! figures derived from persisted artifacts, and their console rendering.

use crate::crawler::CrawlGraph;
use crate::extractor::ArticleCatalog;
use crate::state::PageState;
use std::collections::BTreeMap;
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of pages fetched (keys of the crawl graph)
    pub pages_visited: u64,

    /// Total number of in-scope edges recorded, duplicates included
    pub total_links: u64,

    /// Number of distinct edge targets
    pub unique_links: u64,

    /// Count of visited pages by fetch outcome (empty when derived from a persisted graph)
    pub pages_by_state: BTreeMap<PageState, u64>,
}

impl CrawlStatistics {
    /// Derives the graph-level figures from a crawl graph
    pub fn from_graph(graph: &CrawlGraph) -> Self {
        Self {
            pages_visited: graph.len() as u64,
            total_links: graph.edge_count() as u64,
            unique_links: graph.unique_targets().len() as u64,
            pages_by_state: BTreeMap::new(),
        }
    }

    /// Records the outcome of one visited page
    pub fn record(&mut self, state: PageState) {
        *self.pages_by_state.entry(state).or_insert(0) += 1;
    }

    /// Number of visited pages whose fetch failed
    pub fn errors(&self) -> u64 {
        self.pages_by_state
            .iter()
            .filter(|(state, _)| state.is_error())
            .map(|(_, count)| count)
            .sum()
    }
}

/// Extraction statistics summary
///
/// `succeeded + failed` always equals `candidates_processed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStatistics {
    /// Article URLs that passed the selection filter
    pub candidates_found: u64,

    /// Article URLs attempted after truncation to the configured maximum
    pub candidates_processed: u64,

    /// Articles extracted into the catalog
    pub succeeded: u64,

    /// Articles dropped because their fetch or extraction failed
    pub failed: u64,
}

impl ExtractionStatistics {
    pub fn new(candidates_found: usize, candidates_processed: usize) -> Self {
        Self {
            candidates_found: candidates_found as u64,
            candidates_processed: candidates_processed as u64,
            ..Self::default()
        }
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Rough wall-clock estimate in minutes, counting only the politeness delay
    pub fn estimated_minutes(&self, delay: Duration) -> f64 {
        self.candidates_processed as f64 * delay.as_secs_f64() / 60.0
    }
}

/// Catalog statistics derived from a persisted article catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStatistics {
    /// Number of article records
    pub articles: u64,

    /// Records whose date fell back to "Unknown"
    pub undated: u64,

    /// Records whose title fell back to "Untitled"
    pub untitled: u64,

    /// Count of records per article type
    pub by_type: BTreeMap<String, u64>,
}

impl CatalogStatistics {
    pub fn from_catalog(catalog: &ArticleCatalog) -> Self {
        let mut stats = Self::default();
        for record in catalog.iter() {
            stats.articles += 1;
            if record.date == crate::extractor::UNKNOWN_DATE {
                stats.undated += 1;
            }
            if record.title == crate::extractor::UNTITLED {
                stats.untitled += 1;
            }
            *stats.by_type.entry(record.article_type.clone()).or_insert(0) += 1;
        }
        stats
    }
}

/// Prints crawl statistics to stdout in a formatted manner
pub fn print_crawl_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages visited: {}", stats.pages_visited);
    println!("  In-scope links recorded: {}", stats.total_links);
    println!("  Distinct link targets: {}", stats.unique_links);
    println!();

    if !stats.pages_by_state.is_empty() {
        println!("Pages by Outcome:");
        let mut state_counts: Vec<_> = stats.pages_by_state.iter().collect();
        state_counts.sort_by(|a, b| b.1.cmp(a.1));

        for (state, count) in state_counts {
            let percentage = if stats.pages_visited > 0 {
                (*count as f64 / stats.pages_visited as f64) * 100.0
            } else {
                0.0
            };
            println!("  {}: {} ({:.1}%)", state, count, percentage);
        }
        println!();
        println!("Fetch errors: {}", stats.errors());
    }
}

/// Prints extraction statistics to stdout
pub fn print_extraction_statistics(stats: &ExtractionStatistics) {
    println!("=== Extraction Statistics ===\n");
    println!("  Article URLs found: {}", stats.candidates_found);
    println!("  Article URLs processed: {}", stats.candidates_processed);
    println!("Success: {} | Failed: {}", stats.succeeded, stats.failed);
}

/// Prints catalog statistics to stdout
pub fn print_catalog_statistics(stats: &CatalogStatistics) {
    println!("=== Catalog Statistics ===\n");
    println!("  Articles: {}", stats.articles);
    println!("  Without date: {}", stats.undated);
    println!("  Without title: {}", stats.untitled);

    if !stats.by_type.is_empty() {
        println!("\nArticles by Type:");
        for (article_type, count) in &stats.by_type {
            println!("  {}: {}", article_type, count);
        }
    }
}
