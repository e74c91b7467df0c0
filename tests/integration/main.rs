//! End-to-end tests against mock HTTP servers

mod crawl_tests;
mod extract_tests;

use museum_indexer::config::{
    Config, CrawlerConfig, ExtractorConfig, OutputConfig, UserAgentConfig,
};
use std::path::Path;

/// Creates a test configuration rooted at `root_url`, writing artifacts under `dir`
pub fn create_test_config(root_url: &str, origin: &str, dir: &Path) -> Config {
    let path = |name: &str| dir.join(name).to_string_lossy().into_owned();

    Config {
        crawler: CrawlerConfig {
            root_url: root_url.to_string(),
            timeout_secs: 5,
        },
        extractor: ExtractorConfig {
            max_articles: 155,
            delay_ms: 0,
            timeout_secs: 5,
            canonical_origin: origin.to_string(),
            article_section: "articles".to_string(),
            excluded_section: "topics".to_string(),
        },
        user_agent: UserAgentConfig {
            identifier: "TestBot/1.0".to_string(),
        },
        output: OutputConfig {
            graph_path: path("crawler_with_found_links_new_.json"),
            visited_path: path("crawler_only_urls_new.json"),
            catalog_path: path("src/data/articles.json"),
        },
    }
}
