//! Build source descriptors proposed for discovered repositories.

use crate::catalog::{RepositoryDescriptor, RepositoryType};
use serde::Serialize;

/// A build source for one repository of an owner.
///
/// Carries enough metadata to later instantiate a concrete source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSourceDescriptor {
    /// Repository owner (team or organization).
    pub owner: String,

    /// Repository name.
    pub repository: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Version control system of the repository.
    pub repository_type: RepositoryType,

    /// Whether the repository accepts pull requests.
    pub supports_pull_requests: bool,
}

impl BuildSourceDescriptor {
    /// Creates the source descriptor for `repository` under `owner`.
    pub fn new(owner: &str, repository: &RepositoryDescriptor) -> Self {
        Self {
            owner: owner.to_string(),
            repository: repository.name.clone(),
            full_name: format!("{}/{}", owner, repository.name),
            repository_type: repository.repository_type,
            supports_pull_requests: repository.supports_pull_requests,
        }
    }
}
