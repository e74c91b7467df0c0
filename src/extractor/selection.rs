//! Article URL selection from the crawl graph
//!
//! Listing pages, topic pages, and fragment anchors share the article section
//! with real article pages; this filter keeps only the detail pages.

use crate::config::ExtractorConfig;
use crate::crawler::CrawlGraph;

/// Filter deciding which crawled URLs are article detail pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilter {
    /// `/<section>/`, which an article URL must contain
    section_dir: String,

    /// `/<section>`, which an article URL must not end with
    listing_suffix: String,

    /// `/<excluded>`, which an article URL must not contain
    excluded_marker: String,
}

impl ArticleFilter {
    /// Builds a filter for an article section and an excluded sub-section
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_indexer::extractor::ArticleFilter;
    ///
    /// let filter = ArticleFilter::new("articles", "topics");
    /// assert!(filter.is_article("https://mchistory.org/research/articles/1857-founding"));
    /// assert!(!filter.is_article("https://mchistory.org/research/articles/topics/war"));
    /// ```
    pub fn new(section: &str, excluded: &str) -> Self {
        Self {
            section_dir: format!("/{}/", section),
            listing_suffix: format!("/{}", section),
            excluded_marker: format!("/{}", excluded),
        }
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(&config.article_section, &config.excluded_section)
    }

    /// Returns true if the URL is an article detail page
    pub fn is_article(&self, url: &str) -> bool {
        url.contains(&self.section_dir)
            && !url.contains(&self.excluded_marker)
            && !url.ends_with(&self.listing_suffix)
            && !url.contains('#')
    }
}

/// Article URLs chosen for extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Number of distinct article URLs in the graph
    pub total_found: usize,

    /// URLs to process, sorted and truncated to the configured maximum
    pub urls: Vec<String>,
}

/// Selects article URLs from every edge list of the graph
///
/// Edge targets are deduplicated across the whole graph and ordered
/// lexicographically, so the same graph always yields the same selection.
/// Keys of the graph are not considered, only edge targets.
pub fn select_article_urls(
    graph: &CrawlGraph,
    filter: &ArticleFilter,
    max_articles: usize,
) -> Selection {
    let candidates: Vec<&str> = graph
        .unique_targets()
        .into_iter()
        .filter(|url| filter.is_article(url))
        .collect();

    Selection {
        total_found: candidates.len(),
        urls: candidates
            .into_iter()
            .take(max_articles)
            .map(str::to_string)
            .collect(),
    }
}
