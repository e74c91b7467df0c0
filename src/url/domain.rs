use url::Url;

/// Extracts the network authority (host plus explicit port) from a URL
///
/// Two URLs belong to the same scope host only when both host and port agree,
/// so `example.com:8080` and `example.com` are different authorities. Default
/// ports are dropped by the parser and never appear in the result.
///
/// # Arguments
///
/// * `url` - The URL to extract the authority from
///
/// # Returns
///
/// * `Some(String)` - The lowercase host, with `:port` when one is explicit
/// * `None` - If the URL has no host (e.g. `mailto:` links)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use museum_indexer::url::extract_authority;
///
/// let url = Url::parse("https://mchistory.org/research/articles").unwrap();
/// assert_eq!(extract_authority(&url), Some("mchistory.org".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/research").unwrap();
/// assert_eq!(extract_authority(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn extract_authority(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    })
}
