//! Field extraction with selector fallback chains
//!
//! Each field is described by an ordered list of strategies. The first strategy
//! that yields non-empty text wins; when all of them fail the field takes its
//! default value.

use scraper::{ElementRef, Html, Selector};

/// Title used when no heading or title element has text
pub const UNTITLED: &str = "Untitled";

/// Date used when no time or date element has text
pub const UNKNOWN_DATE: &str = "Unknown";

/// Article type used when no category element has text
pub const DEFAULT_TYPE: &str = "Article";

/// Elements whose text is never part of the visible content
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// One way of pulling a field out of a document
type Strategy = fn(&Html) -> Option<String>;

const TITLE_CHAIN: &[Strategy] = &[title_from_heading, title_from_class, title_from_head];
const DATE_CHAIN: &[Strategy] = &[date_from_time_element, date_from_class];
const CONTENT_CHAIN: &[Strategy] = &[content_from_article, content_from_class, content_from_main];
const TYPE_CHAIN: &[Strategy] = &[type_from_class];

/// Fields pulled out of one article page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: String,
    pub date: String,
    pub article_type: String,

    /// Visible text of the content container, whitespace collapsed
    pub content: String,
}

/// Extracts title, date, type, and content from an article page
///
/// # Fallback Chains
///
/// | Field | Strategies, in order | Default |
/// |-------|----------------------|---------|
/// | title | `h1`, `.title`, `<title>` | `Untitled` |
/// | date | `time` (its `datetime` attribute, else its text), `.date` / `.published` | `Unknown` |
/// | content | `article`, `.content` / `.entry-content`, `main` | empty |
/// | type | `.category` / `.type` | `Article` |
///
/// # Example
///
/// ```
/// use museum_indexer::extractor::extract_fields;
///
/// let html = r#"<html><body><h1>Route 66</h1><article><p>The Mother Road.</p></article></body></html>"#;
/// let fields = extract_fields(html);
/// assert_eq!(fields.title, "Route 66");
/// assert_eq!(fields.date, "Unknown");
/// assert_eq!(fields.content, "The Mother Road.");
/// ```
pub fn extract_fields(html: &str) -> ExtractedFields {
    let document = Html::parse_document(html);

    ExtractedFields {
        title: first_of(&document, TITLE_CHAIN).unwrap_or_else(|| UNTITLED.to_string()),
        date: first_of(&document, DATE_CHAIN).unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        article_type: first_of(&document, TYPE_CHAIN).unwrap_or_else(|| DEFAULT_TYPE.to_string()),
        content: first_of(&document, CONTENT_CHAIN).unwrap_or_default(),
    }
}

/// Runs strategies in order until one yields
fn first_of(document: &Html, chain: &[Strategy]) -> Option<String> {
    chain.iter().find_map(|strategy| strategy(document))
}

fn title_from_heading(document: &Html) -> Option<String> {
    first_text(document, "h1")
}

fn title_from_class(document: &Html) -> Option<String> {
    first_text(document, ".title")
}

fn title_from_head(document: &Html) -> Option<String> {
    first_text(document, "title")
}

/// Prefers the machine-readable `datetime` attribute of the first `<time>`
fn date_from_time_element(document: &Html) -> Option<String> {
    let element = first_element(document, "time")?;

    element
        .value()
        .attr("datetime")
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| non_empty(visible_text(element)))
}

fn date_from_class(document: &Html) -> Option<String> {
    first_text(document, ".date, .published")
}

fn content_from_article(document: &Html) -> Option<String> {
    first_text(document, "article")
}

fn content_from_class(document: &Html) -> Option<String> {
    first_text(document, ".content, .entry-content")
}

fn content_from_main(document: &Html) -> Option<String> {
    first_text(document, "main")
}

fn type_from_class(document: &Html) -> Option<String> {
    first_text(document, ".category, .type")
}

/// First element matching the selector, in document order
fn first_element<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = match Selector::parse(selector) {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!("Invalid selector '{}': {}", selector, e);
            return None;
        }
    };
    document.select(&selector).next()
}

/// Visible text of the first element matching the selector, if non-empty
fn first_text(document: &Html, selector: &str) -> Option<String> {
    first_element(document, selector).and_then(|element| non_empty(visible_text(element)))
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Joins an element's visible text nodes with spaces and collapses whitespace
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    collect_text(element, &mut parts);
    normalize_whitespace(&parts.join(" "))
}

fn collect_text<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if !HIDDEN_ELEMENTS.contains(&child_element.value().name()) {
                collect_text(child_element, parts);
            }
        } else if let Some(text) = child.value().as_text() {
            parts.push(text);
        }
    }
}

/// Collapses every whitespace run to a single space and trims both ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
