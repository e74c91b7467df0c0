//! State module for tracking crawl outcomes
//!
//! Every visited page ends in exactly one `PageState`, which feeds the crawl statistics.

mod page_state;

pub use page_state::PageState;
