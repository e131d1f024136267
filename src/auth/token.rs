//! Cached access token with a safety buffer before expiry.

use std::time::{Duration, Instant};

/// Tokens are treated as expired this long before they actually are, so a
/// token cannot expire mid-flight between the cache check and the request
/// reaching the server.
const EXPIRY_BUFFER: Duration = Duration::from_secs(30);

/// An access token and its absolute expiry instant.
///
/// Immutable; a refresh replaces the whole value, never a field.
#[derive(Clone)]
pub(crate) struct CachedToken {
    secret: String,
    expires_at: Instant,
}

impl std::fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedToken")
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

impl CachedToken {
    /// Build a token from the server-reported lifetime.
    pub(crate) fn new(secret: String, expires_in: Duration) -> Self {
        Self {
            secret,
            expires_at: Instant::now() + expires_in,
        }
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    /// False once the current time is within [`EXPIRY_BUFFER`] of expiry.
    pub(crate) fn is_usable(&self) -> bool {
        Instant::now() + EXPIRY_BUFFER < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_usable() {
        let token = CachedToken::new("t".to_string(), Duration::from_secs(3600));
        assert!(token.is_usable());
    }

    #[test]
    fn test_token_expiring_within_buffer_is_not_usable() {
        // 20s of life is inside the 30s buffer: unusable from the start.
        let token = CachedToken::new("t".to_string(), Duration::from_secs(20));
        assert!(!token.is_usable());
    }

    #[test]
    fn test_buffer_boundary() {
        // 40s of life leaves ~10s of usable window.
        let token = CachedToken::new("t".to_string(), Duration::from_secs(40));
        assert!(token.is_usable());

        let token = CachedToken::new("t".to_string(), Duration::from_secs(29));
        assert!(!token.is_usable());
    }

    #[test]
    fn test_debug_hides_secret() {
        let token = CachedToken::new("very-secret".to_string(), Duration::from_secs(60));
        assert!(!format!("{token:?}").contains("very-secret"));
    }
}
