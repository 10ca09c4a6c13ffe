//! Per-run discovery counts.

use serde::Serialize;

/// Counts from a single discovery run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiscoverySummary {
    /// Number of repositories listed by the catalog.
    pub scanned: usize,

    /// Number of repositories that matched the pattern and were observed.
    pub matched: usize,
}

impl DiscoverySummary {
    /// Number of repositories skipped by the pattern.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.scanned.saturating_sub(self.matched)
    }
}
