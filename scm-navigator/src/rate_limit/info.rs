//! Rate limit information.

/// Rate limit information for the GitHub core API.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Returns true if fewer than `threshold` requests remain.
    #[must_use]
    pub fn is_low(&self, threshold: u32) -> bool {
        self.remaining < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_low_remaining() {
        let info = RateLimitInfo {
            remaining: 3,
            reset: 1234567890,
            limit: 5000,
        };

        assert!(info.is_low(5));
        assert!(!info.is_low(3));
    }
}
