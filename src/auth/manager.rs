//! Token acquisition, caching, and the per-credential manager registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use crate::auth::token::CachedToken;
use crate::auth::ClientCredentials;
use crate::error::{JobwireError, Result};
use crate::http::HttpExecutor;

/// Success payload of the client-credentials exchange.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Produces valid bearer tokens for one credential configuration.
///
/// The cached token is returned without a network call while it is usable;
/// otherwise exactly one exchange runs, even under concurrent callers: the
/// whole check-then-refresh sequence holds the manager's lock, so N waiting
/// callers collapse into a single round trip and all observe the refreshed
/// token afterwards.
pub struct TokenManager {
    credentials: ClientCredentials,
    executor: Arc<HttpExecutor>,
    cached: tokio::sync::Mutex<Option<CachedToken>>,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    pub fn new(credentials: ClientCredentials, executor: Arc<HttpExecutor>) -> Self {
        Self {
            credentials,
            executor,
            cached: tokio::sync::Mutex::new(None),
        }
    }

    /// Return a valid access token, refreshing it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`JobwireError::Authentication`] if the exchange fails for
    /// any reason (I/O after the executor's retries, a non-2xx status, or
    /// an unexpected response shape). Authentication failures are never
    /// retried here; a 4xx from the token endpoint is terminal.
    pub async fn access_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.is_usable() {
                return Ok(token.secret().to_string());
            }
        }

        let fresh = self.authenticate().await?;
        let secret = fresh.secret().to_string();
        // Replaced wholesale: readers see the old token or the new one,
        // never a partially written entry.
        *cached = Some(fresh);
        Ok(secret)
    }

    async fn authenticate(&self) -> Result<CachedToken> {
        debug!(client_id = self.credentials.client_id(), "requesting access token");

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let body = self
            .executor
            .execute(
                Method::POST,
                self.credentials.token_url().clone(),
                headers,
                Some(self.credentials.token_request_body()),
            )
            .await
            .map_err(|err| self.auth_failure(err))?;

        let response: TokenResponse =
            serde_json::from_str(&body).map_err(|err| JobwireError::Authentication {
                message: format!(
                    "token response for client '{}' was not the expected shape: {err}",
                    self.credentials.client_id(),
                ),
            })?;

        Ok(CachedToken::new(
            response.access_token,
            Duration::from_secs(response.expires_in),
        ))
    }

    /// Wrap an executor failure, keeping status and body for diagnosis.
    /// The message carries the client id but never the secret.
    fn auth_failure(&self, err: JobwireError) -> JobwireError {
        let client_id = self.credentials.client_id();
        let message = match err {
            JobwireError::Api {
                status_code: Some(code),
                response_body,
                ..
            } => format!(
                "token request for client '{client_id}' failed with status {code}: {response_body}"
            ),
            other => format!("token request for client '{client_id}' failed: {other}"),
        };
        JobwireError::Authentication { message }
    }
}

/// Maps credential configurations to shared [`TokenManager`] instances.
///
/// Keyed by value equality: two lookups with identical configurations get
/// the same manager (and therefore the same token cache), distinct
/// configurations get independent ones. Insert-if-absent runs under a lock,
/// so concurrent first lookups converge on one manager.
///
/// The registry is an explicit object owned by the embedding application,
/// not process-global state, so tests can isolate instances.
pub struct TokenRegistry {
    executor: Arc<HttpExecutor>,
    managers: Mutex<HashMap<ClientCredentials, Arc<TokenManager>>>,
}

impl TokenRegistry {
    pub fn new(executor: Arc<HttpExecutor>) -> Self {
        Self {
            executor,
            managers: Mutex::new(HashMap::new()),
        }
    }

    /// The manager for `credentials`, created on first lookup.
    pub fn manager_for(&self, credentials: &ClientCredentials) -> Arc<TokenManager> {
        let mut managers = self.managers.lock().expect("token registry lock poisoned");
        Arc::clone(managers.entry(credentials.clone()).or_insert_with(|| {
            Arc::new(TokenManager::new(
                credentials.clone(),
                Arc::clone(&self.executor),
            ))
        }))
    }

    pub(crate) fn executor(&self) -> &Arc<HttpExecutor> {
        &self.executor
    }
}

impl std::fmt::Debug for TokenRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.managers.lock().map(|m| m.len()).unwrap_or(0);
        f.debug_struct("TokenRegistry").field("managers", &count).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::RetryConfig;

    fn registry() -> TokenRegistry {
        TokenRegistry::new(Arc::new(HttpExecutor::new(RetryConfig::none()).unwrap()))
    }

    fn credentials(id: &str) -> ClientCredentials {
        ClientCredentials::new(id, "secret", "https://auth.example.com/token").unwrap()
    }

    #[test]
    fn test_equal_credentials_share_a_manager() {
        let registry = registry();
        let a = registry.manager_for(&credentials("client-a"));
        let b = registry.manager_for(&credentials("client-a"));
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_distinct_credentials_get_distinct_managers() {
        let registry = registry();
        let a = registry.manager_for(&credentials("client-a"));
        let b = registry.manager_for(&credentials("client-b"));
        assert!(!Arc::ptr_eq(&a, &b));

        let delegated = registry.manager_for(&credentials("client-a").for_employer("acme"));
        assert!(!Arc::ptr_eq(&a, &delegated));
    }

    #[test]
    fn test_registries_are_isolated() {
        let first = registry();
        let second = registry();
        let a = first.manager_for(&credentials("client-a"));
        let b = second.manager_for(&credentials("client-a"));
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
