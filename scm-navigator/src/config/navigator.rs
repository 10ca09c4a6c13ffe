//! Navigator settings loaded from `navigator.toml`.

use crate::config::{read_toml, ConfigError};
use crate::filter::PatternFilter;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Parsed contents of a `navigator.toml` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NavigatorConfig {
    /// Team or organization whose repositories are discovered.
    pub owner: String,

    /// Full-match regular expression for repository names (optional).
    #[serde(default)]
    pub pattern: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise (optional).
    #[serde(default)]
    pub api_url: Option<String>,
}

impl NavigatorConfig {
    /// Loads and validates a `navigator.toml` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, malformed or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading navigator config");

        let config: NavigatorConfig = read_toml(path)?;
        config.validate(path)?;
        Ok(config)
    }

    /// Validates the settings.
    ///
    /// `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem
    /// found.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if self.owner.trim().is_empty() {
            return Err(invalid("owner must not be empty".to_string()));
        }

        if self.owner.contains('/') {
            return Err(invalid(format!(
                "owner must not contain '/': {}",
                self.owner
            )));
        }

        if let Err(e) = PatternFilter::new(self.pattern.as_deref()) {
            return Err(invalid(e.to_string()));
        }

        if let Some(api_url) = &self.api_url {
            if Url::parse(api_url).is_err() {
                return Err(invalid(format!("api-url is not a valid URL: {api_url}")));
            }
        }

        Ok(())
    }
}
