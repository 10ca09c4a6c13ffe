//! Offline repository catalogs loaded from `catalog.toml`.
//!
//! ```toml
//! [[repository]]
//! owner = "myteam"
//! name = "repo1"
//! type = "git"
//! pull-requests = true
//! ```

use crate::catalog::{RepositoryDescriptor, RepositoryType, StaticCatalog};
use crate::config::{read_toml, ConfigError};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "repository")]
    repositories: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CatalogEntry {
    owner: String,
    name: String,
    #[serde(default, rename = "type")]
    repository_type: RepositoryType,
    #[serde(default)]
    pull_requests: bool,
}

/// Loads a [`StaticCatalog`] from a catalog file.
///
/// Repositories keep the order they appear in the file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing or malformed, if an entry
/// has an empty owner or name, or if a name repeats within an owner.
pub fn load_catalog(path: &Path) -> Result<StaticCatalog, ConfigError> {
    debug!(path = %path.display(), "Loading catalog file");

    let file: CatalogFile = read_toml(path)?;
    let mut catalog = StaticCatalog::new();

    for entry in file.repositories {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if entry.owner.trim().is_empty() {
            return Err(invalid(format!(
                "repository '{}' has an empty owner",
                entry.name
            )));
        }

        if entry.name.trim().is_empty() {
            return Err(invalid(format!(
                "repository of owner '{}' has an empty name",
                entry.owner
            )));
        }

        let duplicate = catalog
            .repositories(&entry.owner)
            .is_some_and(|repos| repos.iter().any(|repo| repo.name == entry.name));
        if duplicate {
            return Err(invalid(format!(
                "repository '{}/{}' is listed more than once",
                entry.owner, entry.name
            )));
        }

        catalog.insert(
            entry.owner,
            RepositoryDescriptor {
                name: entry.name,
                repository_type: entry.repository_type,
                supports_pull_requests: entry.pull_requests,
            },
        );
    }

    info!(path = %path.display(), "Loaded catalog file");
    Ok(catalog)
}
