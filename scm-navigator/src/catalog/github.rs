//! GitHub-backed repository listings.
//!
//! Lists an organization's repositories through the GitHub REST API and
//! captures them as a [`StaticCatalog`] snapshot the navigator can walk
//! synchronously.

use super::{CatalogError, RepositoryDescriptor, RepositoryType, StaticCatalog};
use crate::rate_limit::ensure_core_rate_limit;
use octocrab::models::Repository;
use octocrab::Octocrab;
use tracing::{debug, info, info_span, Instrument};

/// Results per page for repository listings.
const RESULTS_PER_PAGE: u8 = 100;

/// Fetches every repository of the `owner` organization.
///
/// Pages are requested sequentially, waiting on the core rate limit before
/// each one. The returned catalog preserves GitHub's listing order.
///
/// # Errors
///
/// Returns [`CatalogError::Auth`] for rejected credentials,
/// [`CatalogError::UnknownOwner`] if the organization does not exist and
/// [`CatalogError::Transport`] for any other API failure.
pub async fn fetch_repositories(
    octocrab: &Octocrab,
    owner: &str,
) -> Result<StaticCatalog, CatalogError> {
    let span = info_span!("fetch_repositories", owner = %owner);

    async {
        info!("Listing organization repositories");

        wait_for_capacity(octocrab, owner).await?;

        let page = octocrab
            .orgs(owner)
            .list_repos()
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await
            .map_err(|e| classify_error(owner, &e))?;

        let mut catalog = StaticCatalog::new();
        catalog.register_owner(owner);
        for repository in &page.items {
            catalog.insert(owner, describe(repository));
        }

        let mut next = page.next;
        while next.is_some() {
            wait_for_capacity(octocrab, owner).await?;

            let Some(page) = octocrab
                .get_page::<Repository>(&next)
                .await
                .map_err(|e| classify_error(owner, &e))?
            else {
                break;
            };

            debug!(count = page.items.len(), "Fetched repository page");
            for repository in &page.items {
                catalog.insert(owner, describe(repository));
            }
            next = page.next;
        }

        info!(
            count = catalog.repositories(owner).map_or(0, <[_]>::len),
            "Repository listing complete"
        );
        Ok(catalog)
    }
    .instrument(span)
    .await
}

/// Converts a GitHub repository into catalog metadata.
///
/// Archived repositories are read-only and cannot receive pull requests.
fn describe(repository: &Repository) -> RepositoryDescriptor {
    RepositoryDescriptor {
        name: repository.name.clone(),
        repository_type: RepositoryType::Git,
        supports_pull_requests: !repository.archived.unwrap_or(false),
    }
}

/// Waits on the core rate limit before a listing request.
///
/// Servers with rate limiting disabled answer `/rate_limit` with 404; that
/// is not a missing owner, so the check is skipped.
async fn wait_for_capacity(octocrab: &Octocrab, owner: &str) -> Result<(), CatalogError> {
    match ensure_core_rate_limit(octocrab).await {
        Ok(()) => Ok(()),
        Err(e) if status_code(&e) == Some(404) => {
            debug!("Rate limiting disabled on this server");
            Ok(())
        }
        Err(e) => match classify_error(owner, &e) {
            CatalogError::UnknownOwner { .. } => Err(CatalogError::Transport {
                message: e.to_string(),
            }),
            other => Err(other),
        },
    }
}

/// Returns the HTTP status of a GitHub API error response.
fn status_code(error: &octocrab::Error) -> Option<u16> {
    match error {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// Maps a GitHub API failure onto the catalog error taxonomy.
fn classify_error(owner: &str, error: &octocrab::Error) -> CatalogError {
    let message = match error {
        octocrab::Error::GitHub { source, .. } => source.message.clone(),
        other => other.to_string(),
    };
    classify_status(owner, status_code(error), message)
}

fn classify_status(owner: &str, status: Option<u16>, message: String) -> CatalogError {
    match status {
        Some(401) => CatalogError::Auth { message },
        Some(403) if !is_rate_limited(&message) => CatalogError::Auth { message },
        Some(404) => CatalogError::UnknownOwner {
            owner: owner.to_string(),
        },
        _ => CatalogError::Transport { message },
    }
}

/// GitHub reports primary and secondary rate limits as 403.
fn is_rate_limited(message: &str) -> bool {
    message.to_lowercase().contains("rate limit")
}
