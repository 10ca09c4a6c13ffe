//! Discovery and run summary types.

mod discovery;
mod run_summary;

pub use discovery::DiscoverySummary;
pub use run_summary::RunSummary;
