use crate::url::extract_authority;
use crate::{UrlError, UrlResult};
use url::Url;

/// The boundary of a crawl: the root's authority and its path prefix
///
/// A link is in scope only when its authority equals the root's authority **and**
/// its absolute string starts with the root URL minus trailing slashes. The
/// prefix test is a plain string comparison, so `/research/articles-old` is in
/// scope of `/research/articles` and `?page=2` variants of a page are distinct URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlScope {
    /// Root URL exactly as configured; the first frontier entry
    root: String,

    /// Root URL with trailing slashes trimmed
    prefix: String,

    /// Authority of the root URL
    host: String,
}

impl CrawlScope {
    /// Builds the scope for a root URL
    ///
    /// # Errors
    ///
    /// Fails when the root is not an absolute HTTP(S) URL with a host.
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_indexer::url::CrawlScope;
    ///
    /// let scope = CrawlScope::new("https://mchistory.org/research/articles/").unwrap();
    /// assert_eq!(scope.prefix(), "https://mchistory.org/research/articles");
    /// assert!(scope.contains("https://mchistory.org/research/articles/1857-founding"));
    /// assert!(!scope.contains("https://mchistory.org/visit"));
    /// ```
    pub fn new(root_url: &str) -> UrlResult<Self> {
        let parsed = Url::parse(root_url).map_err(|e| UrlError::Parse(e.to_string()))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(UrlError::InvalidScheme(parsed.scheme().to_string()));
        }

        let host =
            extract_authority(&parsed).ok_or_else(|| UrlError::MissingHost(root_url.to_string()))?;

        Ok(Self {
            root: root_url.to_string(),
            prefix: root_url.trim_end_matches('/').to_string(),
            host,
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns true if the absolute link is eligible for traversal
    pub fn contains(&self, link: &str) -> bool {
        let same_host = Url::parse(link)
            .ok()
            .and_then(|url| extract_authority(&url))
            .is_some_and(|host| host == self.host);

        same_host && link.starts_with(&self.prefix)
    }

    /// Projects a visited URL onto its root-relative path
    ///
    /// The first occurrence of the prefix is removed; the root itself maps to `/`.
    pub fn relative_path(&self, url: &str) -> String {
        let reduced = url.replacen(&self.prefix, "", 1);
        if reduced.is_empty() {
            "/".to_string()
        } else {
            reduced
        }
    }
}
