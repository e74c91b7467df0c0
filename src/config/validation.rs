use crate::config::types::{Config, CrawlerConfig, ExtractorConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound on the per-request timeout (seconds)
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_extractor_config(&config.extractor)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    validate_http_url("root-url", &config.root_url)?;
    validate_timeout(config.timeout_secs)?;
    Ok(())
}

/// Validates extractor configuration
fn validate_extractor_config(config: &ExtractorConfig) -> Result<(), ConfigError> {
    if config.max_articles < 1 {
        return Err(ConfigError::Validation(format!(
            "max-articles must be >= 1, got {}",
            config.max_articles
        )));
    }

    validate_timeout(config.timeout_secs)?;

    let origin = validate_http_url("canonical-origin", &config.canonical_origin)?;
    if origin.path() != "/" || origin.query().is_some() || origin.fragment().is_some() {
        return Err(ConfigError::Validation(format!(
            "canonical-origin must be a bare origin without path or query, got '{}'",
            config.canonical_origin
        )));
    }

    validate_section("article-section", &config.article_section)?;
    validate_section("excluded-section", &config.excluded_section)?;

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.identifier.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent identifier cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    for (name, path) in [
        ("graph-path", &config.graph_path),
        ("visited-path", &config.visited_path),
        ("catalog-path", &config.catalog_path),
    ] {
        if path.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    Ok(())
}

fn validate_timeout(timeout_secs: u64) -> Result<(), ConfigError> {
    if !(1..=MAX_TIMEOUT_SECS).contains(&timeout_secs) {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, timeout_secs
        )));
    }
    Ok(())
}

/// Parses an absolute HTTP(S) URL that must carry a host
fn validate_http_url(field: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must use HTTP or HTTPS",
            field, value
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' has no host",
            field, value
        )));
    }

    Ok(url)
}

/// Validates a single path segment name
fn validate_section(field: &str, section: &str) -> Result<(), ConfigError> {
    if section.is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", field)));
    }

    if section.contains('/') || section.contains('#') {
        return Err(ConfigError::Validation(format!(
            "{} must be a single path segment, got '{}'",
            field, section
        )));
    }

    Ok(())
}
