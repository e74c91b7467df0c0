use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Museum-Indexer
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub extractor: ExtractorConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Root URL of the crawl; its host and path bound the traversal
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// Request timeout for a single page fetch (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CrawlerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Article extraction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum number of article pages to extract
    #[serde(rename = "max-articles", default = "default_max_articles")]
    pub max_articles: usize,

    /// Fixed delay between consecutive article requests (milliseconds)
    #[serde(rename = "delay-ms", default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Request timeout for a single article fetch (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Origin prepended to relative article URLs (e.g. "https://mchistory.org")
    #[serde(rename = "canonical-origin")]
    pub canonical_origin: String,

    /// Path segment that marks article pages
    #[serde(rename = "article-section", default = "default_article_section")]
    pub article_section: String,

    /// Path segment that marks topic listing pages
    #[serde(rename = "excluded-section", default = "default_excluded_section")]
    pub excluded_section: String,
}

impl ExtractorConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_max_articles() -> usize {
    155
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_article_section() -> String {
    "articles".to_string()
}

fn default_excluded_section() -> String {
    "topics".to_string()
}

/// Outbound client identification
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Full User-Agent header value sent with every request
    pub identifier: String,
}

/// Output artifact locations
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the crawl graph JSON file
    #[serde(rename = "graph-path")]
    pub graph_path: String,

    /// Path to the visited paths JSON file
    #[serde(rename = "visited-path")]
    pub visited_path: String,

    /// Path to the article catalog JSON file read by the search UI
    #[serde(rename = "catalog-path")]
    pub catalog_path: String,
}
