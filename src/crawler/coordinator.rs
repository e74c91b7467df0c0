//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop:
//! - Draining the FIFO frontier one URL at a time
//! - Fetching pages and extracting their links
//! - Filtering links against the crawl scope
//! - Recording the link graph and visited paths

use crate::config::Config;
use crate::crawler::frontier::Frontier;
use crate::crawler::graph::{CrawlGraph, VisitedPaths};
use crate::crawler::parser::extract_links;
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::output::CrawlStatistics;
use crate::url::CrawlScope;
use crate::IndexerError;
use reqwest::Client;
use url::Url;

/// Everything a finished crawl produces
#[derive(Debug, Clone, Default)]
pub struct CrawlOutput {
    /// Visited URL to accepted outgoing links
    pub graph: CrawlGraph,

    /// Root-relative paths in first-visit order
    pub visited: VisitedPaths,

    /// Counters gathered during the crawl
    pub stats: CrawlStatistics,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    scope: CrawlScope,
    frontier: Frontier,
    client: Client,
    output: CrawlOutput,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The indexer configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to crawl from the configured root
    /// * `Err(IndexerError)` - The root URL is unusable or the HTTP client failed to build
    pub fn new(config: &Config) -> Result<Self, IndexerError> {
        let scope = CrawlScope::new(&config.crawler.root_url)?;
        let client = build_http_client(&config.user_agent, config.crawler.timeout())?;
        Ok(Self::with_client(scope, client))
    }

    /// Creates a coordinator around an existing scope and client
    pub fn with_client(scope: CrawlScope, client: Client) -> Self {
        let frontier = Frontier::new(scope.root());
        Self {
            scope,
            frontier,
            client,
            output: CrawlOutput::default(),
        }
    }

    /// Runs the crawl loop until the frontier is empty
    ///
    /// Fetch failures never abort the crawl: the failing URL stays visited
    /// and contributes an empty edge list.
    pub async fn run(mut self) -> CrawlOutput {
        tracing::info!(
            "Starting crawl at {} (scope host: {})",
            self.scope.root(),
            self.scope.host()
        );
        let start_time = std::time::Instant::now();

        while let Some(url) = self.frontier.next_url() {
            self.process_url(&url).await;

            let pages_crawled = self.frontier.visited_count();
            if pages_crawled % 25 == 0 {
                tracing::info!(
                    "Progress: {} pages crawled, {} in frontier",
                    pages_crawled,
                    self.frontier.len()
                );
            }
        }

        let graph = &self.output.graph;
        self.output.stats.pages_visited = graph.len() as u64;
        self.output.stats.total_links = graph.edge_count() as u64;
        self.output.stats.unique_links = graph.unique_targets().len() as u64;

        tracing::info!(
            "Crawl completed: {} pages visited, {} links recorded in {:?}",
            self.output.stats.pages_visited,
            self.output.stats.total_links,
            start_time.elapsed()
        );

        self.output
    }

    /// Visits a single URL
    ///
    /// This method:
    /// 1. Records the root-relative path and an empty edge list
    /// 2. Fetches the page
    /// 3. Extracts links and hands them to the scope filter
    async fn process_url(&mut self, url: &str) {
        tracing::info!("Crawling: {}", url);

        self.output.visited.push(self.scope.relative_path(url));
        self.output.graph.insert_page(url);

        let links = self.fetch_links(url).await;
        self.handle_discovered_links(url, &links);
    }

    /// Fetches a page and returns every link on it
    ///
    /// Non-HTML responses and failures yield no links.
    async fn fetch_links(&mut self, url: &str) -> Vec<String> {
        let fetch_result = fetch_url(&self.client, url).await;
        self.output.stats.record(fetch_result.state());

        match fetch_result {
            FetchResult::Success {
                final_url, body, ..
            } => {
                if final_url != url {
                    tracing::debug!("{} redirected to {}", url, final_url);
                }
                match Url::parse(url) {
                    Ok(base_url) => extract_links(&body, &base_url),
                    Err(e) => {
                        tracing::warn!("Cannot resolve links on {}: {}", url, e);
                        Vec::new()
                    }
                }
            }

            FetchResult::ContentMismatch { content_type } => {
                tracing::debug!("Skipping non-HTML page {} ({})", url, content_type);
                Vec::new()
            }

            FetchResult::HttpError { status_code, state } => {
                tracing::warn!("Error fetching {}: HTTP {} ({})", url, status_code, state);
                Vec::new()
            }

            FetchResult::NetworkError { error, state } => {
                tracing::warn!("Error fetching {}: {} ({})", url, error, state);
                Vec::new()
            }
        }
    }

    /// Records in-scope links as edges and enqueues the unseen ones
    fn handle_discovered_links(&mut self, from: &str, links: &[String]) {
        for link in links {
            if !self.scope.contains(link) {
                tracing::trace!("Out of scope: {}", link);
                continue;
            }

            self.output.graph.push_edge(from, link);
            tracing::debug!("  Found relevant link: {}", link);

            if !self.frontier.is_visited(link) {
                self.frontier.enqueue(link);
            }
        }
    }
}

/// Runs a complete crawl for the configured root URL
///
/// # Example
///
/// ```no_run
/// use museum_indexer::config::load_config;
/// use museum_indexer::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("indexer.toml"))?;
/// let output = run_crawl(&config).await?;
/// println!("Visited {} pages", output.graph.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<CrawlOutput, IndexerError> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run().await)
}
