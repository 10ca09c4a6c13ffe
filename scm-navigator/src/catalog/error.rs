//! Repository catalog error types.

use thiserror::Error;

/// Errors that can occur while listing an owner's repositories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog could not be reached or returned a malformed response.
    #[error("Catalog transport error: {message}")]
    Transport { message: String },

    /// The catalog rejected the supplied credentials.
    #[error("Catalog authentication error: {message}")]
    Auth { message: String },

    /// The catalog has no repositories registered for this owner.
    #[error("Unknown repository owner: {owner}")]
    UnknownOwner { owner: String },
}
