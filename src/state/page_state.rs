/// Page state definitions for crawl outcomes
///
/// This module defines the terminal state a visited page ends up in.
use std::fmt;

/// Represents how the fetch of a visited page ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageState {
    /// Page was fetched as HTML and its links were extracted
    Processed,

    /// Page Content-Type is not HTML; visited but contributes no links
    ContentMismatch,

    /// Page returned HTTP 404 or 410
    DeadLink,

    /// Page could not be reached (timeout, connection refused, DNS failure)
    Unreachable,

    /// Page fetch failed for other reasons (non-2xx status, body read error)
    Failed,
}

impl PageState {
    /// Returns true if this represents a successful fetch
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Processed)
    }

    /// Returns true if this represents a fetch error
    ///
    /// A content mismatch is not an error: non-HTML assets are skipped on purpose.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::DeadLink | Self::Unreachable | Self::Failed)
    }

    /// Short machine-friendly name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::ContentMismatch => "content_mismatch",
            Self::DeadLink => "dead_link",
            Self::Unreachable => "unreachable",
            Self::Failed => "failed",
        }
    }

    /// Returns all possible page states
    pub fn all_states() -> [Self; 5] {
        [
            Self::Processed,
            Self::ContentMismatch,
            Self::DeadLink,
            Self::Unreachable,
            Self::Failed,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
