//! Pattern filter error types.

use thiserror::Error;

/// Errors that can occur while compiling a repository name pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern is not a valid regular expression.
    #[error("Invalid repository pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
