//! Observer protocol error types.

use thiserror::Error;

/// Errors raised by observers while receiving discovery results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserverError {
    /// A project was observed without a name.
    #[error("Project name must not be empty")]
    EmptyProjectName,

    /// The protocol was driven out of order.
    #[error("Illegal observer state: {message}")]
    IllegalState { message: String },

    /// An attribute key is not recognized by the observer.
    #[error("Unrecognized attribute '{key}'")]
    UnknownAttribute { key: String },

    /// An attribute value has the wrong type for its key.
    #[error("Attribute '{key}' expects a {expected} value")]
    AttributeType { key: String, expected: &'static str },
}
