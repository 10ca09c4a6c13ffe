//! Repository discovery.
//!
//! The [`Navigator`] lists an owner's repositories, keeps those whose full
//! name matches the configured pattern and reports each of them to a
//! [`SourceObserver`] with exactly one [`BuildSourceDescriptor`].

mod error;
mod source;

pub use error::NavigatorError;
pub use source::BuildSourceDescriptor;

use crate::catalog::RepositoryCatalog;
use crate::filter::{PatternError, PatternFilter};
use crate::observer::{ProjectObserver, SourceObserver};
use crate::summary::DiscoverySummary;
use tracing::{debug, info, info_span};

/// Discovers the repositories of one owner.
///
/// Holds configuration only; each call to [`Navigator::discover`] is
/// independent. Reconfiguring takes `&mut self`, so the pattern cannot change
/// while a run borrows the navigator.
#[derive(Debug, Clone)]
pub struct Navigator {
    owner: String,
    filter: PatternFilter,
}

impl Navigator {
    /// Creates a navigator for `owner` that matches every repository.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::EmptyOwner`] if `owner` is blank and
    /// [`NavigatorError::InvalidOwner`] if it contains a `/`.
    pub fn new(owner: impl Into<String>) -> Result<Self, NavigatorError> {
        let owner = owner.into();
        if owner.trim().is_empty() {
            return Err(NavigatorError::EmptyOwner);
        }
        if owner.contains('/') {
            return Err(NavigatorError::InvalidOwner { owner });
        }

        Ok(Self {
            owner,
            filter: PatternFilter::any(),
        })
    }

    /// Restricts discovery to repositories whose full name matches `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the pattern does not compile.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, PatternError> {
        self.set_pattern(Some(pattern))?;
        Ok(self)
    }

    /// Replaces the pattern. `None` matches every repository.
    ///
    /// The previous pattern is kept if the new one fails to compile.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the pattern does not compile.
    pub fn set_pattern(&mut self, pattern: Option<&str>) -> Result<(), PatternError> {
        self.filter = PatternFilter::new(pattern)?;
        Ok(())
    }

    /// Returns the owner whose repositories are discovered.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the configured pattern, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.filter.pattern()
    }

    /// Runs discovery against `catalog`, reporting to `observer`.
    ///
    /// For every matching repository, in catalog order, the observer sees
    /// `observe`, one `add_source` and `complete`. Repositories that do not
    /// match are never shown to the observer.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::Catalog`] if the listing fails, before any
    /// observer call. Returns [`NavigatorError::Observer`] as soon as the
    /// observer rejects a call; repositories already reported stay reported.
    pub fn discover<C, O>(
        &self,
        catalog: &C,
        observer: &mut O,
    ) -> Result<DiscoverySummary, NavigatorError>
    where
        C: RepositoryCatalog + ?Sized,
        O: SourceObserver,
    {
        let span = info_span!(
            "discover",
            owner = %self.owner,
            pattern = self.pattern().unwrap_or("*")
        );
        let _guard = span.enter();

        info!("Looking up repositories");
        let repositories = catalog.list_repositories(&self.owner)?;

        let mut summary = DiscoverySummary {
            scanned: repositories.len(),
            matched: 0,
        };

        for repository in &repositories {
            if !self.filter.matches(&repository.name) {
                debug!(repo = %repository.name, "Skipping repository, pattern mismatch");
                continue;
            }

            debug!(repo = %repository.name, "Proposing repository");
            let mut project = observer.observe(&repository.name)?;
            project.add_source(BuildSourceDescriptor::new(&self.owner, repository))?;
            project.complete()?;
            summary.matched += 1;
        }

        info!(
            scanned = summary.scanned,
            matched = summary.matched,
            "Discovery complete"
        );
        Ok(summary)
    }
}

/// Runs a single discovery for `owner`, filtered by `pattern`.
///
/// The pattern is compiled before the catalog is queried.
///
/// # Errors
///
/// Returns [`NavigatorError`] if the owner or pattern is invalid, or if the
/// catalog or observer fails.
pub fn discover<C, O>(
    owner: &str,
    pattern: Option<&str>,
    catalog: &C,
    observer: &mut O,
) -> Result<DiscoverySummary, NavigatorError>
where
    C: RepositoryCatalog + ?Sized,
    O: SourceObserver,
{
    let mut navigator = Navigator::new(owner)?;
    navigator.set_pattern(pattern)?;
    navigator.discover(catalog, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, RepositoryDescriptor, StaticCatalog};
    use crate::observer::{ObserverError, RecordingObserver};
    use std::cell::Cell;

    fn team_catalog() -> StaticCatalog {
        let mut catalog = StaticCatalog::new();
        for name in ["repo1", "repo2", "other"] {
            catalog.insert("myteam", RepositoryDescriptor::git(name, true));
        }
        catalog
    }

    /// Catalog that counts queries and always fails.
    struct BrokenCatalog {
        calls: Cell<usize>,
    }

    impl RepositoryCatalog for BrokenCatalog {
        fn list_repositories(
            &self,
            _owner: &str,
        ) -> Result<Vec<RepositoryDescriptor>, CatalogError> {
            self.calls.set(self.calls.get() + 1);
            Err(CatalogError::Transport {
                message: "connection refused".to_string(),
            })
        }
    }

    #[derive(Debug, PartialEq)]
    enum Event {
        Observe(String),
        AddSource(String),
        Complete(String),
    }

    /// Observer that logs every protocol call.
    #[derive(Default)]
    struct EventLog {
        events: Vec<Event>,
        reject: Option<&'static str>,
    }

    struct EventProject<'a> {
        name: String,
        events: &'a mut Vec<Event>,
    }

    impl SourceObserver for EventLog {
        type Project<'a> = EventProject<'a>;

        fn observe(&mut self, project_name: &str) -> Result<EventProject<'_>, ObserverError> {
            if self.reject == Some(project_name) {
                return Err(ObserverError::IllegalState {
                    message: format!("rejected {project_name}"),
                });
            }
            self.events.push(Event::Observe(project_name.to_string()));
            Ok(EventProject {
                name: project_name.to_string(),
                events: &mut self.events,
            })
        }
    }

    impl ProjectObserver for EventProject<'_> {
        fn add_source(&mut self, source: BuildSourceDescriptor) -> Result<(), ObserverError> {
            self.events.push(Event::AddSource(source.full_name));
            Ok(())
        }

        fn complete(self) -> Result<(), ObserverError> {
            self.events.push(Event::Complete(self.name));
            Ok(())
        }
    }

    #[test]
    fn rejects_blank_owner() {
        assert!(matches!(
            Navigator::new("  "),
            Err(NavigatorError::EmptyOwner)
        ));
    }

    #[test]
    fn rejects_owner_with_slash() {
        match Navigator::new("myteam/repo1") {
            Err(NavigatorError::InvalidOwner { owner }) => assert_eq!(owner, "myteam/repo1"),
            other => panic!("expected invalid owner error, got {other:?}"),
        }
    }

    #[test]
    fn keeps_configuration() {
        let navigator = Navigator::new("myteam")
            .unwrap()
            .with_pattern("repo(.*)")
            .unwrap();

        assert_eq!(navigator.owner(), "myteam");
        assert_eq!(navigator.pattern(), Some("repo(.*)"));
    }

    #[test]
    fn failed_set_pattern_keeps_previous_pattern() {
        let mut navigator = Navigator::new("myteam")
            .unwrap()
            .with_pattern("repo(.*)")
            .unwrap();

        assert!(navigator.set_pattern(Some("(")).is_err());
        assert_eq!(navigator.pattern(), Some("repo(.*)"));
    }

    #[test]
    fn drives_protocol_in_order() {
        let navigator = Navigator::new("myteam")
            .unwrap()
            .with_pattern("repo(.*)")
            .unwrap();
        let mut observer = EventLog::default();

        let summary = navigator.discover(&team_catalog(), &mut observer).unwrap();

        assert_eq!(
            observer.events,
            vec![
                Event::Observe("repo1".to_string()),
                Event::AddSource("myteam/repo1".to_string()),
                Event::Complete("repo1".to_string()),
                Event::Observe("repo2".to_string()),
                Event::AddSource("myteam/repo2".to_string()),
                Event::Complete("repo2".to_string()),
            ]
        );
        assert_eq!(summary, DiscoverySummary { scanned: 3, matched: 2 });
    }

    #[test]
    fn absent_pattern_observes_everything() {
        let navigator = Navigator::new("myteam").unwrap();
        let mut observer = RecordingObserver::new();

        navigator.discover(&team_catalog(), &mut observer).unwrap();

        assert_eq!(observer.record().names(), vec!["repo1", "repo2", "other"]);
    }

    #[test]
    fn catalog_failure_skips_observer() {
        let navigator = Navigator::new("myteam").unwrap();
        let catalog = BrokenCatalog {
            calls: Cell::new(0),
        };
        let mut observer = EventLog::default();

        let result = navigator.discover(&catalog, &mut observer);

        assert!(matches!(
            result,
            Err(NavigatorError::Catalog(CatalogError::Transport { .. }))
        ));
        assert_eq!(catalog.calls.get(), 1);
        assert!(observer.events.is_empty());
    }

    #[test]
    fn invalid_pattern_fails_before_catalog_query() {
        let catalog = BrokenCatalog {
            calls: Cell::new(0),
        };
        let mut observer = EventLog::default();

        let result = discover("myteam", Some("repo(.*"), &catalog, &mut observer);

        assert!(matches!(result, Err(NavigatorError::Pattern(_))));
        assert_eq!(catalog.calls.get(), 0);
    }

    #[test]
    fn observer_failure_aborts_remaining_repositories() {
        let navigator = Navigator::new("myteam").unwrap();
        let mut observer = EventLog {
            reject: Some("repo2"),
            ..Default::default()
        };

        let result = navigator.discover(&team_catalog(), &mut observer);

        assert!(matches!(
            result,
            Err(NavigatorError::Observer(ObserverError::IllegalState { .. }))
        ));
        assert_eq!(
            observer.events,
            vec![
                Event::Observe("repo1".to_string()),
                Event::AddSource("myteam/repo1".to_string()),
                Event::Complete("repo1".to_string()),
            ]
        );
    }

    #[test]
    fn empty_repository_name_is_rejected_by_recording_observer() {
        let mut catalog = StaticCatalog::new();
        catalog.insert("myteam", RepositoryDescriptor::git("", true));
        let mut observer = RecordingObserver::new();

        let result = discover("myteam", None, &catalog, &mut observer);

        assert!(matches!(
            result,
            Err(NavigatorError::Observer(ObserverError::EmptyProjectName))
        ));
    }
}
