//! Integration tests for article extraction
//!
//! A crawl graph is built by hand (or by a real crawl against a mock
//! server) and the extractor is run against wiremock article pages.

use crate::create_test_config;
use museum_indexer::crawler::{crawl, CrawlGraph};
use museum_indexer::extractor::extract;
use museum_indexer::storage::{open_storage, Storage};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn article_page(title: &str, date: &str, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!(
            r#"<html><head><title>{title} | MCHM</title></head><body>
            <h1>{title}</h1>
            <time datetime="{date}">{date}</time>
            <article>{body}</article>
            </body></html>"#
        ),
        "text/html",
    )
}

fn graph_with_links(root: &str, links: &[String]) -> CrawlGraph {
    let mut graph = CrawlGraph::new();
    graph.insert_page(root);
    for link in links {
        graph.push_edge(root, link);
    }
    graph
}

#[tokio::test]
async fn test_crawl_then_extract() {
    let server = MockServer::start().await;
    let root = format!("{}/research/articles", server.uri());

    Mock::given(method("GET"))
        .and(path("/research/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r##"<html><body>
            <a href="/research/articles/route-66">Route 66</a>
            <a href="/research/articles/1857-founding">Founding</a>
            <a href="/research/articles/topics/transportation">Transportation</a>
            <a href="/research/articles/route-66#sources">Sources</a>
            </body></html>"##,
            "text/html",
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/research/articles/route-66"))
        .respond_with(article_page(
            "Route 66 in McLean County",
            "1926-11-11",
            "<p>The Mother Road crossed Bloomington and Normal.</p>",
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/research/articles/1857-founding"))
        .respond_with(article_page(
            "Founding of Illinois State Normal",
            "1857-02-18",
            "<p>Teachers trained on the prairie.</p>",
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/research/articles/topics/transportation"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<html><body><p>Topic listing</p></body></html>",
            "text/html",
        ))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&root, &server.uri(), temp_dir.path());

    let crawl_output = crawl(&config).await.unwrap();
    let mut storage = open_storage(&config.output);
    storage.save_crawl(&crawl_output).unwrap();

    let graph = storage.load_graph().unwrap();
    let output = extract(&graph, &config.extractor, &config.user_agent)
        .await
        .unwrap();

    // Topic pages and fragment links are never extracted; order is lexicographic
    assert_eq!(output.stats.candidates_found, 2);
    assert_eq!(output.catalog.len(), 2);

    let records = output.catalog.as_slice();
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].url, format!("{}/1857-founding", root));
    assert_eq!(records[0].title, "Founding of Illinois State Normal");
    assert_eq!(records[0].date, "1857-02-18");
    assert_eq!(records[0].article_type, "Article");

    assert_eq!(records[1].id, 2);
    assert_eq!(records[1].url, format!("{}/route-66", root));
    assert_eq!(
        records[1].content,
        "The Mother Road crossed Bloomington and Normal."
    );
    assert_eq!(
        records[1].tags,
        vec!["route", "mclean", "county", "mother", "road", "crossed", "bloomington", "normal"]
    );

    storage.save_catalog(&output.catalog).unwrap();
    assert_eq!(storage.load_catalog().unwrap(), output.catalog);
}

#[tokio::test]
async fn test_failed_article_is_skipped() {
    let server = MockServer::start().await;
    let root = format!("{}/research/articles", server.uri());

    Mock::given(method("GET"))
        .and(path("/research/articles/a-fast"))
        .respond_with(article_page("Fast", "1900", "<p>Quick response</p>"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/research/articles/b-slow"))
        .respond_with(
            article_page("Slow", "1901", "<p>Never arrives</p>")
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/research/articles/c-gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/research/articles/d-last"))
        .respond_with(article_page("Last", "1902", "<p>Still processed</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let graph = graph_with_links(
        &root,
        &[
            format!("{}/d-last", root),
            format!("{}/c-gone", root),
            format!("{}/b-slow", root),
            format!("{}/a-fast", root),
        ],
    );

    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&root, &server.uri(), temp_dir.path());
    config.extractor.timeout_secs = 1;

    let output = extract(&graph, &config.extractor, &config.user_agent)
        .await
        .unwrap();

    assert_eq!(output.stats.candidates_processed, 4);
    assert_eq!(output.stats.succeeded, 2);
    assert_eq!(output.stats.failed, 2);
    assert_eq!(
        output.stats.succeeded + output.stats.failed,
        output.stats.candidates_processed
    );

    // Ids follow processing order, so failures leave gaps
    let ids: Vec<usize> = output.catalog.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 4]);
    let titles: Vec<&str> = output.catalog.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Fast", "Last"]);
}

#[tokio::test]
async fn test_max_articles_truncates_selection() {
    let server = MockServer::start().await;
    let root = format!("{}/research/articles", server.uri());

    for slug in ["alpha", "bravo"] {
        Mock::given(method("GET"))
            .and(path(format!("/research/articles/{}", slug)))
            .respond_with(article_page(slug, "Unknown", "<p>Body</p>"))
            .expect(1)
            .mount(&server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/research/articles/charlie"))
        .respond_with(article_page("charlie", "Unknown", "<p>Body</p>"))
        .expect(0)
        .mount(&server)
        .await;

    let graph = graph_with_links(
        &root,
        &[
            format!("{}/charlie", root),
            format!("{}/alpha", root),
            format!("{}/bravo", root),
        ],
    );

    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&root, &server.uri(), temp_dir.path());
    config.extractor.max_articles = 2;

    let output = extract(&graph, &config.extractor, &config.user_agent)
        .await
        .unwrap();

    assert_eq!(output.stats.candidates_found, 3);
    assert_eq!(output.stats.candidates_processed, 2);
    assert_eq!(output.catalog.len(), 2);
}

#[tokio::test]
async fn test_relative_article_urls_use_canonical_origin() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/research/articles/quilts"))
        .respond_with(article_page("Quilts", "1890", "<p>Stitched history</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let graph = graph_with_links(
        "/research/articles",
        &["/research/articles/quilts".to_string()],
    );

    let temp_dir = TempDir::new().unwrap();
    let root = format!("{}/research/articles", server.uri());
    let config = create_test_config(&root, &server.uri(), temp_dir.path());

    let output = extract(&graph, &config.extractor, &config.user_agent)
        .await
        .unwrap();

    assert_eq!(output.catalog.len(), 1);
    assert_eq!(
        output.catalog.as_slice()[0].url,
        format!("{}/research/articles/quilts", server.uri())
    );
}

#[tokio::test]
async fn test_empty_graph_produces_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(
        "http://127.0.0.1:9/research/articles",
        "http://127.0.0.1:9",
        temp_dir.path(),
    );

    let output = extract(&CrawlGraph::new(), &config.extractor, &config.user_agent)
        .await
        .unwrap();

    assert!(output.catalog.is_empty());
    assert_eq!(output.stats.candidates_found, 0);

    let mut storage = open_storage(&config.output);
    storage.save_catalog(&output.catalog).unwrap();
    let text = std::fs::read_to_string(&config.output.catalog_path).unwrap();
    assert_eq!(text, "[]");
}
