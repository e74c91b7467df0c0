//! HTML parser for extracting links
//!
//! Every `<a href>` on the page is resolved against the page URL. Scope
//! filtering happens later in the coordinator, so this module keeps same-page
//! anchors, duplicates, and off-site links alike.

use scraper::{Html, Selector};
use url::Url;

/// Extracts all anchor targets from an HTML page as absolute URLs
///
/// # Link Extraction Rules
///
/// **Include:** every `<a href="...">`, in document order, duplicates kept,
/// including fragment links (`#section` resolves to `page#section`).
///
/// **Exclude:**
/// - hrefs the URL parser cannot join onto the base
/// - non-HTTP(S) targets after resolution (`mailto:`, `javascript:`, `tel:`, `data:`)
///
/// # Example
///
/// ```
/// use museum_indexer::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/research/articles/1857-founding">Founding</a></body></html>"#;
/// let base_url = Url::parse("https://mchistory.org/research/articles").unwrap();
/// let links = extract_links(html, &base_url);
/// assert_eq!(links, vec!["https://mchistory.org/research/articles/1857-founding"]);
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .collect()
}

/// Resolves a link href to an absolute HTTP(S) URL
///
/// Returns None if the href cannot be joined or resolves to another scheme.
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let absolute_url = base_url.join(href).ok()?;

    match absolute_url.scheme() {
        "http" | "https" => Some(absolute_url.to_string()),
        _ => None,
    }
}
