//! Repository catalogs.
//!
//! A [`RepositoryCatalog`] enumerates the repositories of an owner. The
//! navigator only reads from it and propagates its failures unchanged.

mod error;
pub mod github;
mod repository;

pub use error::CatalogError;
pub use repository::{RepositoryDescriptor, RepositoryType};

use std::collections::HashMap;

/// Something which can list the repositories of an owner.
pub trait RepositoryCatalog {
    /// Lists the repositories of `owner` in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the listing fails.
    fn list_repositories(&self, owner: &str) -> Result<Vec<RepositoryDescriptor>, CatalogError>;
}

/// In-memory catalog holding an ordered repository list per owner.
///
/// Used for catalog files, GitHub snapshots and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    owners: HashMap<String, Vec<RepositoryDescriptor>>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a repository to the end of `owner`'s listing.
    pub fn insert(&mut self, owner: impl Into<String>, repository: RepositoryDescriptor) {
        self.owners.entry(owner.into()).or_default().push(repository);
    }

    /// Registers `owner` with no repositories.
    ///
    /// Listing a registered owner succeeds even when it has nothing to list.
    pub fn register_owner(&mut self, owner: impl Into<String>) {
        self.owners.entry(owner.into()).or_default();
    }

    /// Returns true if `owner` has a listing in this catalog.
    #[must_use]
    pub fn contains_owner(&self, owner: &str) -> bool {
        self.owners.contains_key(owner)
    }

    /// Returns the repositories of `owner`, if registered.
    #[must_use]
    pub fn repositories(&self, owner: &str) -> Option<&[RepositoryDescriptor]> {
        self.owners.get(owner).map(Vec::as_slice)
    }
}

impl RepositoryCatalog for StaticCatalog {
    fn list_repositories(&self, owner: &str) -> Result<Vec<RepositoryDescriptor>, CatalogError> {
        self.owners
            .get(owner)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownOwner {
                owner: owner.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut catalog = StaticCatalog::new();
        catalog.insert("myteam", RepositoryDescriptor::git("repo2", true));
        catalog.insert("myteam", RepositoryDescriptor::git("other", false));
        catalog.insert("myteam", RepositoryDescriptor::git("repo1", true));

        let names: Vec<String> = catalog
            .list_repositories("myteam")
            .unwrap()
            .into_iter()
            .map(|repo| repo.name)
            .collect();

        assert_eq!(names, vec!["repo2", "other", "repo1"]);
    }

    #[test]
    fn unknown_owner_is_an_error() {
        let catalog = StaticCatalog::new();

        let result = catalog.list_repositories("nobody");
        assert_eq!(
            result,
            Err(CatalogError::UnknownOwner {
                owner: "nobody".to_string()
            })
        );
    }

    #[test]
    fn registered_owner_without_repositories_lists_empty() {
        let mut catalog = StaticCatalog::new();
        catalog.register_owner("empty-team");

        assert!(catalog.contains_owner("empty-team"));
        assert!(catalog.list_repositories("empty-team").unwrap().is_empty());
    }

    #[test]
    fn keeps_owners_separate() {
        let mut catalog = StaticCatalog::new();
        catalog.insert("a", RepositoryDescriptor::git("one", true));
        catalog.insert("b", RepositoryDescriptor::git("two", true));

        assert_eq!(catalog.repositories("a").unwrap().len(), 1);
        assert_eq!(catalog.repositories("b").unwrap()[0].name, "two");
    }
}
