//! Crawl artifacts: the link graph and the visited path list

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Mapping from each visited URL to the in-scope links found on it
///
/// Keys keep first-visit order. Edge lists keep discovery order and may hold
/// duplicates and links to pages visited earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrawlGraph {
    pages: IndexMap<String, Vec<String>>,
}

impl CrawlGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a visited page with an empty edge list
    ///
    /// Returns false if the page was already present; its edges are left intact.
    pub fn insert_page(&mut self, url: &str) -> bool {
        if self.pages.contains_key(url) {
            return false;
        }
        self.pages.insert(url.to_string(), Vec::new());
        true
    }

    /// Appends an accepted link to a page's edge list, registering the page if needed
    pub fn push_edge(&mut self, from: &str, to: &str) {
        self.pages
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
    }

    /// Edges recorded for one page
    pub fn edges(&self, url: &str) -> Option<&[String]> {
        self.pages.get(url).map(Vec::as_slice)
    }

    /// Visited pages with their edges, in first-visit order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.pages.iter()
    }

    /// Visited page URLs in first-visit order
    pub fn pages(&self) -> impl Iterator<Item = &String> {
        self.pages.keys()
    }

    /// Every recorded edge target across all pages, duplicates included
    pub fn targets(&self) -> impl Iterator<Item = &String> {
        self.pages.values().flatten()
    }

    /// Distinct edge targets, sorted
    pub fn unique_targets(&self) -> BTreeSet<&str> {
        self.targets().map(String::as_str).collect()
    }

    pub fn contains_page(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    /// Number of visited pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of recorded edges
    pub fn edge_count(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<String>)> for CrawlGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

/// Root-relative paths of visited URLs in first-visit order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitedPaths(Vec<String>);

impl VisitedPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: String) {
        self.0.push(path);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
