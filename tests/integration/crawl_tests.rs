//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use crate::create_test_config;
use museum_indexer::crawler::crawl;
use museum_indexer::state::PageState;
use museum_indexer::storage::{open_storage, Storage};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_raw(
            format!("<html><body>{}</body></html>", body),
            "text/html; charset=utf-8",
        )
}

async fn mount_page(server: &MockServer, page_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts a small article archive:
///
/// ```text
/// /research/articles        -> a, b, doc.pdf, missing, plus off-site links
/// /research/articles/a      -> b, c, root
/// /research/articles/b      -> (nothing)
/// /research/articles/c      -> a
/// /research/articles/doc.pdf   (application/pdf)
/// /research/articles/missing   (404)
/// ```
async fn mount_archive(server: &MockServer) {
    let other_host = server.uri().replace("127.0.0.1", "localhost");

    mount_page(
        server,
        "/research/articles",
        html_page(&format!(
            r#"<a href="/research/articles/a">A</a>
               <a href="/research/articles/b">B</a>
               <a href="{}/research/articles/elsewhere">Mirror</a>
               <a href="/visit">Visit</a>
               <a href="mailto:info@example.org">Mail</a>
               <a href="/research/articles/doc.pdf">PDF</a>
               <a href="/research/articles/missing">Gone</a>"#,
            other_host
        )),
    )
    .await;

    mount_page(
        server,
        "/research/articles/a",
        html_page(
            r#"<a href="b">B</a><a href="/research/articles/c">C</a>
               <a href="/research/articles">Back</a>"#,
        ),
    )
    .await;

    mount_page(server, "/research/articles/b", html_page("<p>Leaf</p>")).await;

    mount_page(
        server,
        "/research/articles/c",
        html_page(r#"<a href="/research/articles/a">A</a>"#),
    )
    .await;

    mount_page(
        server,
        "/research/articles/doc.pdf",
        ResponseTemplate::new(200)
            .set_body_raw(b"%PDF-1.4".to_vec(), "application/pdf"),
    )
    .await;

    mount_page(
        server,
        "/research/articles/missing",
        ResponseTemplate::new(404),
    )
    .await;
}

#[tokio::test]
async fn test_full_crawl_breadth_first() {
    let server = MockServer::start().await;
    mount_archive(&server).await;

    let temp_dir = TempDir::new().unwrap();
    let root = format!("{}/research/articles", server.uri());
    let config = create_test_config(&root, &server.uri(), temp_dir.path());

    let output = crawl(&config).await.unwrap();
    let url = |p: &str| format!("{}{}", root, p);

    // Pages appear in first-visit order
    let pages: Vec<&String> = output.graph.pages().collect();
    assert_eq!(
        pages,
        vec![
            &root,
            &url("/a"),
            &url("/b"),
            &url("/doc.pdf"),
            &url("/missing"),
            &url("/c"),
        ]
    );

    assert_eq!(
        output.visited.as_slice(),
        &["/", "/a", "/b", "/doc.pdf", "/missing", "/c"]
    );

    assert_eq!(
        output.graph.edges(&root).unwrap(),
        &[url("/a"), url("/b"), url("/doc.pdf"), url("/missing")]
    );
    assert_eq!(
        output.graph.edges(&url("/a")).unwrap(),
        &[url("/b"), url("/c"), root.clone()]
    );
    assert_eq!(output.graph.edges(&url("/c")).unwrap(), &[url("/a")]);
    assert!(output.graph.edges(&url("/b")).unwrap().is_empty());
    assert!(output.graph.edges(&url("/doc.pdf")).unwrap().is_empty());
    assert!(output.graph.edges(&url("/missing")).unwrap().is_empty());
}

#[tokio::test]
async fn test_every_edge_target_is_in_scope() {
    let server = MockServer::start().await;
    mount_archive(&server).await;

    let temp_dir = TempDir::new().unwrap();
    let root = format!("{}/research/articles", server.uri());
    let config = create_test_config(&root, &server.uri(), temp_dir.path());

    let output = crawl(&config).await.unwrap();

    for target in output.graph.targets() {
        assert!(target.starts_with(&root), "out of scope: {}", target);
    }
    assert!(!output.graph.targets().any(|t| t.contains("localhost")));
    assert!(!output.graph.targets().any(|t| t.ends_with("/visit")));
    assert!(!output.graph.targets().any(|t| t.starts_with("mailto:")));
}

#[tokio::test]
async fn test_visited_paths_match_graph_keys() {
    let server = MockServer::start().await;
    mount_archive(&server).await;

    let temp_dir = TempDir::new().unwrap();
    let root = format!("{}/research/articles", server.uri());
    let config = create_test_config(&root, &server.uri(), temp_dir.path());

    let output = crawl(&config).await.unwrap();

    assert_eq!(output.visited.len(), output.graph.len());
    let projected: Vec<String> = output
        .graph
        .pages()
        .map(|page| page.replacen(&root, "", 1))
        .map(|p| if p.is_empty() { "/".to_string() } else { p })
        .collect();
    assert_eq!(output.visited.as_slice(), projected.as_slice());
}

#[tokio::test]
async fn test_crawl_statistics_by_outcome() {
    let server = MockServer::start().await;
    mount_archive(&server).await;

    let temp_dir = TempDir::new().unwrap();
    let root = format!("{}/research/articles", server.uri());
    let config = create_test_config(&root, &server.uri(), temp_dir.path());

    let output = crawl(&config).await.unwrap();
    let stats = &output.stats;

    assert_eq!(stats.pages_visited, 6);
    assert_eq!(stats.total_links, 8);
    assert_eq!(stats.unique_links, 6);
    assert_eq!(stats.pages_by_state.get(&PageState::Processed), Some(&4));
    assert_eq!(
        stats.pages_by_state.get(&PageState::ContentMismatch),
        Some(&1)
    );
    assert_eq!(stats.pages_by_state.get(&PageState::DeadLink), Some(&1));
    assert_eq!(stats.errors(), 1);
}

#[tokio::test]
async fn test_crawl_artifacts_persisted() {
    let server = MockServer::start().await;
    mount_archive(&server).await;

    let temp_dir = TempDir::new().unwrap();
    let root = format!("{}/research/articles", server.uri());
    let config = create_test_config(&root, &server.uri(), temp_dir.path());

    let output = crawl(&config).await.unwrap();
    let mut storage = open_storage(&config.output);
    storage.save_crawl(&output).unwrap();

    assert_eq!(storage.load_graph().unwrap(), output.graph);
    assert_eq!(storage.load_visited().unwrap(), output.visited);

    let text = std::fs::read_to_string(&config.output.visited_path).unwrap();
    assert!(text.starts_with("[\n    \"/\","));
}

#[tokio::test]
async fn test_unreachable_root_yields_single_empty_page() {
    let temp_dir = TempDir::new().unwrap();
    let root = "http://127.0.0.1:9/research/articles";
    let mut config = create_test_config(root, "http://127.0.0.1:9", temp_dir.path());
    config.crawler.timeout_secs = 1;

    let output = crawl(&config).await.unwrap();

    assert_eq!(output.graph.len(), 1);
    assert!(output.graph.edges(root).unwrap().is_empty());
    assert_eq!(output.visited.as_slice(), &["/"]);
}
