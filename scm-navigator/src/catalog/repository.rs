//! Repository metadata supplied by a catalog.

use serde::{Deserialize, Serialize};

/// Version control system backing a repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryType {
    /// A git repository.
    #[default]
    Git,

    /// Any other version control system.
    Other,
}

impl RepositoryType {
    /// Returns the type as a lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Other => "other",
        }
    }
}

/// A repository listed by a [`RepositoryCatalog`](super::RepositoryCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    /// Repository name, unique within its owner.
    pub name: String,

    /// Version control system of the repository.
    pub repository_type: RepositoryType,

    /// Whether the repository accepts pull requests.
    pub supports_pull_requests: bool,
}

impl RepositoryDescriptor {
    /// Creates a descriptor for a git repository.
    pub fn git(name: impl Into<String>, supports_pull_requests: bool) -> Self {
        Self {
            name: name.into(),
            repository_type: RepositoryType::Git,
            supports_pull_requests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_repository_type_to_string() {
        assert_eq!(RepositoryType::Git.as_str(), "git");
        assert_eq!(RepositoryType::Other.as_str(), "other");
    }

    #[test]
    fn serializes_repository_type_lowercase() {
        let json = serde_json::to_string(&RepositoryType::Other).unwrap();
        assert_eq!(json, "\"other\"");
    }
}
