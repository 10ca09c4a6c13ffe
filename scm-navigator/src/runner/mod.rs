//! Orchestrates a discovery run.

mod config;
mod error;

pub use config::{CatalogSource, RunnerConfig};
pub use error::RunnerError;

use crate::catalog::{github, StaticCatalog};
use crate::config::load_catalog;
use crate::navigator::Navigator;
use crate::observer::RecordingObserver;
use crate::summary::RunSummary;
use octocrab::Octocrab;
use std::path::PathBuf;
use tracing::info;

/// Resolved repository listing backend.
enum Backend {
    File(PathBuf),
    GitHub(Octocrab),
}

/// Runs discovery for one owner and records the results.
pub struct Runner {
    navigator: Navigator,
    backend: Backend,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// The pattern is compiled here, before any catalog is read.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the owner or pattern is invalid or the
    /// GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let mut navigator = Navigator::new(config.owner())?;
        navigator
            .set_pattern(config.pattern())
            .map_err(crate::navigator::NavigatorError::from)?;

        let backend = match config.catalog() {
            CatalogSource::File(path) => Backend::File(path.clone()),
            CatalogSource::GitHub { token } => {
                let mut builder = Octocrab::builder().personal_token(token.clone());
                if let Some(api_url) = config.api_url() {
                    builder = builder.base_uri(api_url)?;
                }
                Backend::GitHub(builder.build()?)
            }
        };

        Ok(Self { navigator, backend })
    }

    /// Returns the configured navigator.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Loads the catalog and runs discovery.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the catalog cannot be loaded or discovery
    /// fails.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let catalog = self.fetch_catalog().await?;

        let mut observer = RecordingObserver::new().require_sources();
        let discovery = self.navigator.discover(&catalog, &mut observer)?;

        info!(
            owner = %self.navigator.owner(),
            matched = discovery.matched,
            "Run complete"
        );

        Ok(RunSummary {
            owner: self.navigator.owner().to_string(),
            pattern: self.navigator.pattern().map(str::to_string),
            discovery,
            record: observer.into_record(),
        })
    }

    async fn fetch_catalog(&self) -> Result<StaticCatalog, RunnerError> {
        match &self.backend {
            Backend::File(path) => {
                info!(path = %path.display(), "Loading catalog file");
                Ok(load_catalog(path)?)
            }
            Backend::GitHub(octocrab) => {
                Ok(github::fetch_repositories(octocrab, self.navigator.owner()).await?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::navigator::NavigatorError;
    use std::fs;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
[[repository]]
owner = "myteam"
name = "repo1"
pull-requests = true

[[repository]]
owner = "myteam"
name = "repo2"

[[repository]]
owner = "myteam"
name = "other"
"#,
        )
        .unwrap();
        path
    }

    #[tokio::test]
    async fn runs_against_catalog_file() {
        let temp = TempDir::new().unwrap();
        let config = RunnerConfig::new("myteam", CatalogSource::File(write_catalog(&temp)))
            .with_pattern("repo(.*)");

        let summary = Runner::new(config).unwrap().run().await.unwrap();

        assert_eq!(summary.owner, "myteam");
        assert_eq!(summary.pattern.as_deref(), Some("repo(.*)"));
        assert_eq!(summary.discovery.scanned, 3);
        assert_eq!(summary.discovery.matched, 2);
        assert_eq!(summary.record.names(), vec!["repo1", "repo2"]);
        assert!(summary.record.project("repo1").unwrap().sources[0].supports_pull_requests);
    }

    #[test]
    fn invalid_pattern_fails_at_construction() {
        let config = RunnerConfig::new(
            "myteam",
            CatalogSource::File(PathBuf::from("does-not-exist.toml")),
        )
        .with_pattern("repo(.*");

        let result = Runner::new(config);
        assert!(matches!(
            result,
            Err(RunnerError::Navigator(NavigatorError::Pattern(_)))
        ));
    }

    #[test]
    fn owner_override_with_slash_is_rejected() {
        let navigator = crate::config::NavigatorConfig {
            owner: "a/b".to_string(),
            pattern: None,
            api_url: None,
        };
        let config = RunnerConfig::from_navigator_config(
            navigator,
            CatalogSource::GitHub {
                token: "token".to_string(),
            },
        );

        let result = Runner::new(config);
        assert!(matches!(
            result,
            Err(RunnerError::Navigator(NavigatorError::InvalidOwner { .. }))
        ));
    }

    #[tokio::test]
    async fn missing_catalog_file_is_reported() {
        let config = RunnerConfig::new(
            "myteam",
            CatalogSource::File(PathBuf::from("does-not-exist.toml")),
        );

        let result = Runner::new(config).unwrap().run().await;
        assert!(matches!(
            result,
            Err(RunnerError::Config(ConfigError::MissingFile { .. }))
        ));
    }

    #[tokio::test]
    async fn unknown_owner_is_reported() {
        let temp = TempDir::new().unwrap();
        let config = RunnerConfig::new("ghost", CatalogSource::File(write_catalog(&temp)));

        let result = Runner::new(config).unwrap().run().await;
        assert!(matches!(
            result,
            Err(RunnerError::Navigator(NavigatorError::Catalog(_)))
        ));
    }
}
