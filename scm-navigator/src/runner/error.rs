//! Runner error types.

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration and catalog file loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Discovery errors.
    #[error(transparent)]
    Navigator(#[from] crate::navigator::NavigatorError),

    /// Remote catalog listing errors.
    #[error(transparent)]
    Catalog(#[from] crate::catalog::CatalogError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
