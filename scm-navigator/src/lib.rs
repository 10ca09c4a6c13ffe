#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod catalog;
pub mod config;
pub mod filter;
pub mod navigator;
pub mod observer;
pub mod rate_limit;
pub mod runner;
pub mod summary;

pub use catalog::{
    CatalogError, RepositoryCatalog, RepositoryDescriptor, RepositoryType, StaticCatalog,
};
pub use config::{load_catalog, ConfigError, NavigatorConfig};
pub use filter::{PatternError, PatternFilter};
pub use navigator::{discover, BuildSourceDescriptor, Navigator, NavigatorError};
pub use observer::{
    AttributeKind, ObservationRecord, ObservedProject, ObserverError, ProjectObserver,
    RecordingObserver, RecordingProject, SourceObserver,
};
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, wait_if_needed, RateLimitInfo};
pub use runner::{CatalogSource, Runner, RunnerConfig, RunnerError};
pub use summary::{DiscoverySummary, RunSummary};
