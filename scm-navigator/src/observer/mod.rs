//! Two-level observer protocol for discovery results.
//!
//! The navigator reports each qualifying repository to a [`SourceObserver`],
//! which hands back a [`ProjectObserver`] for that repository. The project
//! observer receives the build sources proposed for the repository and is
//! then completed. Completion consumes the project observer, so it happens at
//! most once and no source can follow it.

mod attribute;
mod error;
mod recording;

pub use attribute::AttributeKind;
pub use error::ObserverError;
pub use recording::{ObservationRecord, ObservedProject, RecordingObserver, RecordingProject};

use crate::navigator::BuildSourceDescriptor;
use serde_json::Value;

/// Receives one notification per qualifying project.
pub trait SourceObserver {
    /// Observer for the sources of a single project.
    type Project<'a>: ProjectObserver
    where
        Self: 'a;

    /// Starts observing a project.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::EmptyProjectName`] if `project_name` is empty.
    fn observe(&mut self, project_name: &str) -> Result<Self::Project<'_>, ObserverError>;

    /// Attaches metadata to the whole observation. Ignored by default.
    ///
    /// # Errors
    ///
    /// Implementations may reject unknown keys or mistyped values.
    fn add_attribute(&mut self, _key: &str, _value: Value) -> Result<(), ObserverError> {
        Ok(())
    }
}

/// Receives the build sources of a single project.
pub trait ProjectObserver {
    /// Adds a build source proposed for this project.
    ///
    /// # Errors
    ///
    /// Implementations may reject sources they cannot accept.
    fn add_source(&mut self, source: BuildSourceDescriptor) -> Result<(), ObserverError>;

    /// Attaches metadata to this project. Ignored by default.
    ///
    /// # Errors
    ///
    /// Implementations may reject unknown keys or mistyped values.
    fn add_attribute(&mut self, _key: &str, _value: Value) -> Result<(), ObserverError> {
        Ok(())
    }

    /// Signals that no more sources will be added for this project.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::IllegalState`] if the implementation cannot
    /// complete in its current state.
    fn complete(self) -> Result<(), ObserverError>;
}
