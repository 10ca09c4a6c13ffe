//! Runner configuration.

use crate::config::NavigatorConfig;
use std::path::{Path, PathBuf};

/// Where the repository listing comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// An offline `catalog.toml` file.
    File(PathBuf),

    /// The GitHub API, authenticated with a personal access token.
    GitHub {
        /// GitHub token used for API calls.
        token: String,
    },
}

/// Configuration for a discovery run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Team or organization to discover.
    owner: String,
    /// Repository name pattern, if any.
    pattern: Option<String>,
    /// Source of the repository listing.
    catalog: CatalogSource,
    /// GitHub API base URL override.
    api_url: Option<String>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(owner: impl Into<String>, catalog: CatalogSource) -> Self {
        Self {
            owner: owner.into(),
            pattern: None,
            catalog,
            api_url: None,
        }
    }

    /// Creates a configuration from a loaded `navigator.toml`.
    pub fn from_navigator_config(config: NavigatorConfig, catalog: CatalogSource) -> Self {
        Self {
            owner: config.owner,
            pattern: config.pattern,
            catalog,
            api_url: config.api_url,
        }
    }

    /// Sets the repository name pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets a custom GitHub API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Returns the owner to discover.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name pattern.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Returns the catalog source.
    pub fn catalog(&self) -> &CatalogSource {
        &self.catalog
    }

    /// Returns the catalog file path, if the catalog is file-backed.
    pub fn catalog_path(&self) -> Option<&Path> {
        match &self.catalog {
            CatalogSource::File(path) => Some(path),
            CatalogSource::GitHub { .. } => None,
        }
    }

    /// Returns the GitHub API base URL override.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}
