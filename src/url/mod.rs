//! URL handling module for Museum-Indexer
//!
//! This module provides crawl scoping, authority extraction, and resolution of
//! relative article URLs against the site's canonical origin.
//!
//! URLs are compared as the strings the parser produces. No further
//! normalization happens: trailing-slash and query-string variants of one page
//! are treated as distinct URLs.

mod domain;
mod resolve;
mod scope;

// Re-export main functions
pub use domain::extract_authority;
pub use resolve::absolutize;
pub use scope::CrawlScope;
