//! Shared authenticated-request capability for resource clients.
//!
//! Every resource operation goes through [`JobwireConnection`]: build the
//! URL, obtain a bearer token from the token manager, attach the standard
//! headers, delegate to the executor, and (de)serialize JSON bodies.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::{ClientCredentials, TokenManager, TokenRegistry};
use crate::error::{JobwireError, Result};
use crate::http::{HttpExecutor, RetryConfig};
use crate::json;

const DEFAULT_API_URL: &str = "https://partners.jobwire.io/api";
const API_VERSION: &str = "2";

/// An authenticated connection to the JobWire partner APIs.
///
/// Holds the token manager and HTTP executor pair that resource clients
/// are built on. Cheaply cloneable; clones share the token cache and the
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use jobwire::{ClientCredentials, JobwireConnection};
///
/// # async fn example() -> jobwire::Result<()> {
/// let credentials = ClientCredentials::new(
///     "my-client-id",
///     "my-client-secret",
///     "https://auth.jobwire.io/oauth/token",
/// )?;
/// let conn = JobwireConnection::connect(credentials, "https://partners.jobwire.io/api")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JobwireConnection {
    executor: Arc<HttpExecutor>,
    tokens: Arc<TokenManager>,
    base_url: Arc<Url>,
}

impl std::fmt::Debug for JobwireConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobwireConnection")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl JobwireConnection {
    /// Connect with the default retry policy.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is invalid.
    pub fn connect(credentials: ClientCredentials, base_url: &str) -> Result<Self> {
        Self::connect_with_retry(credentials, base_url, RetryConfig::default())
    }

    /// Connect with a custom retry policy.
    pub fn connect_with_retry(
        credentials: ClientCredentials,
        base_url: &str,
        retry: RetryConfig,
    ) -> Result<Self> {
        let executor = Arc::new(HttpExecutor::new(retry)?);
        let tokens = Arc::new(TokenManager::new(credentials, Arc::clone(&executor)));
        Ok(Self {
            executor,
            tokens,
            base_url: Arc::new(parse_base_url(base_url)?),
        })
    }

    /// Connect through a shared [`TokenRegistry`].
    ///
    /// Connections built from the same registry with value-equal
    /// credentials share one token manager, so a refresh performed by one
    /// is visible to all of them.
    pub fn connect_with_registry(
        registry: &TokenRegistry,
        credentials: &ClientCredentials,
        base_url: &str,
    ) -> Result<Self> {
        Ok(Self {
            executor: Arc::clone(registry.executor()),
            tokens: registry.manager_for(credentials),
            base_url: Arc::new(parse_base_url(base_url)?),
        })
    }

    /// Connect from environment variables.
    ///
    /// Reads credentials via [`ClientCredentials::from_env`] and optionally
    /// `JOBWIRE_API_URL` for the base URL (defaults to
    /// `https://partners.jobwire.io/api`).
    pub fn from_env() -> Result<Self> {
        let credentials = ClientCredentials::from_env()?;
        let base_url =
            std::env::var("JOBWIRE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::connect(credentials, &base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET a resource and deserialize the response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.request(Method::GET, path, None).await?;
        json::from_json(&body)
    }

    /// POST a JSON body and deserialize the response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = json::to_json(body)?;
        let response = self.request(Method::POST, path, Some(body)).await?;
        json::from_json(&response)
    }

    /// PUT a JSON body and deserialize the response.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = json::to_json(body)?;
        let response = self.request(Method::PUT, path, Some(body)).await?;
        json::from_json(&response)
    }

    /// DELETE a resource, discarding the response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path, None).await.map(|_| ())
    }

    async fn request(&self, method: Method, path: &str, body: Option<String>) -> Result<String> {
        let url = self.base_url.join(path).map_err(|err| JobwireError::Api {
            status_code: None,
            response_body: String::new(),
            message: format!("invalid request path '{path}': {err}"),
            transient: false,
        })?;

        let token = self.tokens.access_token().await?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer_header(&token)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("X-API-Version", HeaderValue::from_static(API_VERSION));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        self.executor.execute(method, url, headers, body).await
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    // A trailing slash keeps Url::join from eating the last path segment.
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };

    Url::parse(&normalized).map_err(|err| JobwireError::Api {
        status_code: None,
        response_body: String::new(),
        message: format!("invalid base URL '{base_url}': {err}"),
        transient: false,
    })
}

fn bearer_header(token: &str) -> Result<HeaderValue> {
    let mut value =
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| JobwireError::Authentication {
            message: "access token contains characters not valid in a header".to_string(),
        })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Build a query-string suffix from key/value pairs; empty pairs yield "".
pub(crate) fn build_query(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    format!("?{}", serializer.finish())
}
