//! Rate limiting for GitHub catalog listings.
//!
//! Waiting on the rate limit is the transport's concern; the navigator itself
//! never retries or sleeps.

mod info;

pub use info::RateLimitInfo;

use octocrab::Octocrab;
use std::time::Duration;
use tracing::{info, warn};

/// Maximum time to wait for rate limit reset (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining requests before proactively waiting.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Checks the current rate limit status for the core API.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Returns how long to wait before the next request, if at all.
///
/// `now` is the current Unix time in seconds.
fn wait_duration(info: &RateLimitInfo, now: u64) -> Option<Duration> {
    if !info.is_low(MIN_REMAINING_THRESHOLD) || info.reset <= now {
        return None;
    }

    let wait_secs = info.reset - now;
    if wait_secs > MAX_WAIT_SECS {
        warn!(
            wait_secs,
            max_wait = MAX_WAIT_SECS,
            "Rate limit reset too far in future, capping wait time"
        );
    }

    Some(Duration::from_secs(wait_secs.min(MAX_WAIT_SECS)))
}

/// Waits if the rate limit is low, returning true if we waited.
pub async fn wait_if_needed(info: &RateLimitInfo) -> bool {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(wait) = wait_duration(info, now) else {
        return false;
    };

    info!(
        remaining = info.remaining,
        wait_secs = wait.as_secs(),
        "Rate limit low, waiting for reset"
    );
    tokio::time::sleep(wait).await;
    true
}

/// Ensures sufficient rate limit before making core API calls.
///
/// # Errors
///
/// Returns an error if the rate limit check fails.
pub async fn ensure_core_rate_limit(octocrab: &Octocrab) -> Result<(), octocrab::Error> {
    let info = check_core_rate_limit(octocrab).await?;
    wait_if_needed(&info).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(remaining: u32, reset: u64) -> RateLimitInfo {
        RateLimitInfo {
            remaining,
            reset,
            limit: 5000,
        }
    }

    #[test]
    fn no_wait_with_capacity_left() {
        assert_eq!(wait_duration(&info(100, 2_000), 1_000), None);
    }

    #[test]
    fn no_wait_once_reset_passed() {
        assert_eq!(wait_duration(&info(1, 500), 1_000), None);
    }

    #[test]
    fn waits_until_reset() {
        assert_eq!(
            wait_duration(&info(1, 1_030), 1_000),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn caps_wait_time() {
        assert_eq!(
            wait_duration(&info(0, 1_000 + MAX_WAIT_SECS * 2), 1_000),
            Some(Duration::from_secs(MAX_WAIT_SECS))
        );
    }

    #[tokio::test]
    async fn wait_if_needed_returns_immediately() {
        let waited = wait_if_needed(&info(100, 0)).await;
        assert!(!waited);
    }
}
