//! Run summary types.

use super::DiscoverySummary;
use crate::observer::ObservationRecord;
use serde::Serialize;

/// Outcome of a complete run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Owner whose repositories were discovered.
    pub owner: String,

    /// Pattern used to filter repositories, if any.
    pub pattern: Option<String>,

    /// Discovery counts.
    pub discovery: DiscoverySummary,

    /// Everything the observer received.
    pub record: ObservationRecord,
}

impl RunSummary {
    /// Returns true if no repository matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.discovery.matched == 0
    }
}
