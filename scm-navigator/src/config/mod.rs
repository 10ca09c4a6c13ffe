//! Configuration loading.
//!
//! This module handles parsing `navigator.toml` settings and offline
//! `catalog.toml` repository listings.

mod catalog;
mod error;
mod navigator;

pub use catalog::load_catalog;
pub use error::ConfigError;
pub use navigator::NavigatorConfig;

use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads and deserializes a TOML file.
fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("navigator.toml");

        let result = NavigatorConfig::load(&missing);
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn missing_catalog_is_reported() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("catalog.toml");

        let result = load_catalog(&missing);
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }
}
