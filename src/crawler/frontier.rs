//! Frontier for breadth-first traversal
//!
//! This module handles:
//! - The FIFO queue of URLs waiting to be fetched
//! - Enqueue-time deduplication (a URL enters the queue at most once)
//! - The visited set consulted when a URL is dequeued

use std::collections::{HashSet, VecDeque};

/// FIFO frontier plus the sets that guarantee each URL is fetched at most once
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be fetched, in discovery order
    queue: VecDeque<String>,

    /// URLs that were ever enqueued or visited
    seen: HashSet<String>,

    /// URLs that have been dequeued for fetching
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding only the seed URL
    pub fn new(seed: &str) -> Self {
        let mut frontier = Self::default();
        frontier.enqueue(seed);
        frontier
    }

    /// Adds a URL to the back of the queue unless it was seen before
    ///
    /// Returns true if the URL was enqueued.
    pub fn enqueue(&mut self, url: &str) -> bool {
        if self.seen.contains(url) {
            return false;
        }
        self.seen.insert(url.to_string());
        self.queue.push_back(url.to_string());
        true
    }

    /// Pops the next unvisited URL and marks it visited
    ///
    /// Already-visited entries are skipped; with enqueue-time deduplication
    /// none should be present.
    pub fn next_url(&mut self) -> Option<String> {
        while let Some(url) = self.queue.pop_front() {
            if self.visited.insert(url.clone()) {
                return Some(url);
            }
            tracing::trace!("Skipping already visited URL: {}", url);
        }
        None
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of URLs still waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of URLs dequeued so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
