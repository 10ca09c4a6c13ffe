//! In-memory observer that records every notification.

use super::attribute::{AttributeKind, AttributeSchema};
use super::{ObserverError, ProjectObserver, SourceObserver};
use crate::navigator::BuildSourceDescriptor;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A project seen during a discovery run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservedProject {
    /// Project (repository) name.
    pub name: String,

    /// Build sources added for the project, in order.
    pub sources: Vec<BuildSourceDescriptor>,

    /// Attributes attached to the project.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,

    /// Whether the project observer was completed.
    pub completed: bool,
}

impl ObservedProject {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sources: Vec::new(),
            attributes: BTreeMap::new(),
            completed: false,
        }
    }
}

/// Everything a [`RecordingObserver`] received, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObservationRecord {
    /// Observed projects in observation order.
    pub projects: Vec<ObservedProject>,

    /// Attributes attached to the whole observation.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,
}

impl ObservationRecord {
    /// Returns the observed project names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.name.as_str()).collect()
    }

    /// Looks up an observed project by name.
    #[must_use]
    pub fn project(&self, name: &str) -> Option<&ObservedProject> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Total number of sources across all projects.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.projects.iter().map(|p| p.sources.len()).sum()
    }
}

/// Observer that keeps an [`ObservationRecord`] of everything it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    record: ObservationRecord,
    schema: AttributeSchema,
    require_sources: bool,
}

impl RecordingObserver {
    /// Creates an observer that accepts any attribute and allows completing
    /// projects without sources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects completing a project that received no sources.
    #[must_use]
    pub fn require_sources(mut self) -> Self {
        self.require_sources = true;
        self
    }

    /// Declares a recognized attribute key.
    ///
    /// Once any key is declared, undeclared keys and mistyped values are
    /// rejected at both levels.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, kind: AttributeKind) -> Self {
        self.schema.declare(key, kind);
        self
    }

    /// Returns the record collected so far.
    #[must_use]
    pub fn record(&self) -> &ObservationRecord {
        &self.record
    }

    /// Consumes the observer, returning its record.
    #[must_use]
    pub fn into_record(self) -> ObservationRecord {
        self.record
    }
}

impl SourceObserver for RecordingObserver {
    type Project<'a> = RecordingProject<'a>;

    fn observe(&mut self, project_name: &str) -> Result<RecordingProject<'_>, ObserverError> {
        if project_name.trim().is_empty() {
            return Err(ObserverError::EmptyProjectName);
        }

        let index = self.record.projects.len();
        self.record.projects.push(ObservedProject::new(project_name));

        Ok(RecordingProject {
            project: &mut self.record.projects[index],
            schema: &self.schema,
            require_sources: self.require_sources,
        })
    }

    fn add_attribute(&mut self, key: &str, value: Value) -> Result<(), ObserverError> {
        self.schema.check(key, &value)?;
        self.record.attributes.insert(key.to_string(), value);
        Ok(())
    }
}

/// Project observer handed out by [`RecordingObserver`].
#[derive(Debug)]
pub struct RecordingProject<'a> {
    project: &'a mut ObservedProject,
    schema: &'a AttributeSchema,
    require_sources: bool,
}

impl ProjectObserver for RecordingProject<'_> {
    fn add_source(&mut self, source: BuildSourceDescriptor) -> Result<(), ObserverError> {
        self.project.sources.push(source);
        Ok(())
    }

    fn add_attribute(&mut self, key: &str, value: Value) -> Result<(), ObserverError> {
        self.schema.check(key, &value)?;
        self.project.attributes.insert(key.to_string(), value);
        Ok(())
    }

    fn complete(self) -> Result<(), ObserverError> {
        if self.require_sources && self.project.sources.is_empty() {
            return Err(ObserverError::IllegalState {
                message: format!("project '{}' completed without sources", self.project.name),
            });
        }

        self.project.completed = true;
        Ok(())
    }
}
