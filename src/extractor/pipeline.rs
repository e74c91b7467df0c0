//! Sequential article extraction
//!
//! Article URLs are fetched one at a time, in selection order, with a fixed
//! politeness delay between requests. A failed article is logged and left out
//! of the catalog; the run always continues.

use crate::config::{ExtractorConfig, UserAgentConfig};
use crate::crawler::{build_http_client, CrawlGraph};
use crate::extractor::fields::extract_fields;
use crate::extractor::record::{ArticleCatalog, ArticleRecord};
use crate::extractor::selection::{select_article_urls, ArticleFilter};
use crate::output::ExtractionStatistics;
use crate::url::absolutize;
use crate::IndexerError;
use reqwest::Client;

/// Everything a finished extraction produces
#[derive(Debug, Clone, Default)]
pub struct ExtractionOutput {
    /// One record per successfully extracted article, in processing order
    pub catalog: ArticleCatalog,

    /// Success and failure counters
    pub stats: ExtractionStatistics,
}

/// Article extractor bound to one HTTP client and configuration
pub struct Extractor {
    client: Client,
    config: ExtractorConfig,
    filter: ArticleFilter,
}

impl Extractor {
    /// Creates an extractor with a client built from the configuration
    pub fn new(
        config: &ExtractorConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, IndexerError> {
        let client = build_http_client(user_agent, config.timeout())?;
        Ok(Self::with_client(config.clone(), client))
    }

    /// Creates an extractor around an existing client
    pub fn with_client(config: ExtractorConfig, client: Client) -> Self {
        let filter = ArticleFilter::from_config(&config);
        Self {
            client,
            config,
            filter,
        }
    }

    /// Selects article URLs from the graph and extracts each of them
    pub async fn run(&self, graph: &CrawlGraph) -> ExtractionOutput {
        let selection = select_article_urls(graph, &self.filter, self.config.max_articles);
        let total = selection.urls.len();
        let mut output = ExtractionOutput {
            catalog: ArticleCatalog::new(),
            stats: ExtractionStatistics::new(selection.total_found, total),
        };

        tracing::info!(
            "Found {} article URLs, processing {}",
            selection.total_found,
            total
        );
        tracing::info!(
            "Estimated: ~{:.1} min",
            output.stats.estimated_minutes(self.config.delay())
        );

        for (index, url) in selection.urls.iter().enumerate() {
            let id = index + 1;
            tracing::info!("[{}/{}] {}", id, total, url);

            match self.extract_article(url, id).await {
                Ok(record) => {
                    tracing::info!("Extracted: {}", record.title);
                    output.catalog.push(record);
                    output.stats.record_success();
                }
                Err(e) => {
                    tracing::warn!("Error extracting {}: {}", url, e);
                    output.stats.record_failure();
                }
            }

            if id < total {
                tokio::time::sleep(self.config.delay()).await;
            }
        }

        tracing::info!(
            "Success: {} | Failed: {}",
            output.stats.succeeded,
            output.stats.failed
        );

        output
    }

    /// Fetches one article page and builds its record
    ///
    /// # Errors
    ///
    /// Fails on unresolvable URLs, network errors, timeouts, and non-2xx statuses.
    /// Missing fields are never errors; they take their defaults.
    pub async fn extract_article(
        &self,
        url: &str,
        id: usize,
    ) -> Result<ArticleRecord, IndexerError> {
        let url = absolutize(url, &self.config.canonical_origin)?;

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| IndexerError::from_request(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IndexerError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| IndexerError::from_request(&url, e))?;

        let fields = extract_fields(&body);
        Ok(ArticleRecord::new(
            id,
            fields.title,
            url,
            fields.date,
            fields.article_type,
            fields.content,
        ))
    }
}

/// Runs a complete extraction over a crawl graph
pub async fn run_extraction(
    graph: &CrawlGraph,
    config: &ExtractorConfig,
    user_agent: &UserAgentConfig,
) -> Result<ExtractionOutput, IndexerError> {
    let extractor = Extractor::new(config, user_agent)?;
    Ok(extractor.run(graph).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(origin: &str) -> ExtractorConfig {
        ExtractorConfig {
            max_articles: 10,
            delay_ms: 0,
            timeout_secs: 5,
            canonical_origin: origin.to_string(),
            article_section: "articles".to_string(),
            excluded_section: "topics".to_string(),
        }
    }

    fn extractor(origin: &str) -> Extractor {
        let user_agent = UserAgentConfig {
            identifier: "TestBot/1.0".to_string(),
        };
        let client = build_http_client(&user_agent, Duration::from_secs(5)).unwrap();
        Extractor::with_client(config(origin), client)
    }

    #[tokio::test]
    async fn test_extract_article_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/research/articles/1857-founding"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<html><head><title>Founding | MCHM</title></head><body>
                <h1>The Founding of Illinois State Normal</h1>
                <time datetime="1857-02-18">February 18, 1857</time>
                <span class="category">Education</span>
                <article><p>Illinois State Normal University was founded in 1857.</p></article>
                </body></html>"#,
            ))
            .mount(&server)
            .await;

        let extractor = extractor(&server.uri());
        let record = extractor
            .extract_article("/research/articles/1857-founding", 7)
            .await
            .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.url, format!("{}/research/articles/1857-founding", server.uri()));
        assert_eq!(record.title, "The Founding of Illinois State Normal");
        assert_eq!(record.date, "1857-02-18");
        assert_eq!(record.article_type, "Education");
        assert_eq!(
            record.content,
            "Illinois State Normal University was founded in 1857."
        );
        assert_eq!(record.description, record.content);
        assert_eq!(record.keywords, record.tags.join(" "));
    }

    #[tokio::test]
    async fn test_extract_article_non_2xx_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let extractor = extractor(&server.uri());
        let result = extractor
            .extract_article(&format!("{}/research/articles/x", server.uri()), 1)
            .await;

        assert!(matches!(
            result,
            Err(IndexerError::Status { status: 503, .. })
        ));
    }
}
