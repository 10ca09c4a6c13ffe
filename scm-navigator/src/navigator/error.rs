//! Navigator error types.

use crate::catalog::CatalogError;
use crate::filter::PatternError;
use crate::observer::ObserverError;
use thiserror::Error;

/// Errors that abort a discovery run.
#[derive(Debug, Error)]
pub enum NavigatorError {
    /// The navigator was configured without an owner.
    #[error("Repository owner must not be empty")]
    EmptyOwner,

    /// The owner is not a single team or organization name.
    #[error("Repository owner must not contain '/': {owner}")]
    InvalidOwner { owner: String },

    /// The repository pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The catalog failed to list repositories.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An observer rejected a notification.
    #[error(transparent)]
    Observer(#[from] ObserverError),
}
