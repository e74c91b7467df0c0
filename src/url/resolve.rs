use crate::{UrlError, UrlResult};
use url::Url;

/// Resolves an article URL to absolute form
///
/// Absolute HTTP(S) URLs pass through untouched; anything else is joined onto
/// the site's canonical origin.
///
/// # Examples
///
/// ```
/// use museum_indexer::url::absolutize;
///
/// let url = absolutize("/research/articles/1857-founding", "https://mchistory.org").unwrap();
/// assert_eq!(url, "https://mchistory.org/research/articles/1857-founding");
/// ```
pub fn absolutize(url: &str, origin: &str) -> UrlResult<String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(url.to_string());
    }

    let base = Url::parse(origin).map_err(|e| UrlError::Parse(e.to_string()))?;
    base.join(url)
        .map(|joined| joined.to_string())
        .map_err(|e| UrlError::Parse(format!("{}: {}", url, e)))
}
