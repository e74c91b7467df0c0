use crate::tags::{generate_tags, keywords_from_tags};
use serde::{Deserialize, Serialize};

/// Number of content characters kept in a description
pub const DESCRIPTION_CHARS: usize = 200;

/// Marker appended to truncated descriptions
const ELLIPSIS: &str = "...";

/// A single structured article extracted from one article page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Position of the article's URL in the processing order, starting at 1
    pub id: usize,
    pub title: String,
    pub url: String,
    pub date: String,
    #[serde(rename = "type")]
    pub article_type: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
    pub keywords: String,
}

impl ArticleRecord {
    /// Builds a record, deriving description, tags, and keywords from the text fields
    ///
    /// Tags come from `title + " " + content`; keywords are the tags joined by spaces.
    pub fn new(
        id: usize,
        title: String,
        url: String,
        date: String,
        article_type: String,
        content: String,
    ) -> Self {
        let description = describe(&content);
        let tags = generate_tags(&format!("{} {}", title, content));
        let keywords = keywords_from_tags(&tags);

        Self {
            id,
            title,
            url,
            date,
            article_type,
            description,
            content,
            tags,
            keywords,
        }
    }
}

/// Shortens content to a description
///
/// Content longer than 200 characters is cut to its first 200 characters and
/// followed by `...`; shorter content is returned unchanged.
pub fn describe(content: &str) -> String {
    match content.char_indices().nth(DESCRIPTION_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

/// Ordered list of extracted articles, serialized as a plain JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleCatalog(Vec<ArticleRecord>);

impl ArticleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ArticleRecord) {
        self.0.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArticleRecord> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ArticleRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ArticleRecord> for ArticleCatalog {
    fn from_iter<I: IntoIterator<Item = ArticleRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ArticleCatalog {
    type Item = &'a ArticleRecord;
    type IntoIter = std::slice::Iter<'a, ArticleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
