//! HTTP request executor with retry for transient failures.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use tracing::{debug, warn};
use url::Url;

use crate::error::{JobwireError, Result};
use crate::http::RetryConfig;
use crate::redact;

const USER_AGENT: &str = concat!("jobwire/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Performs one logical HTTP exchange, retrying transient failures.
///
/// A 2xx response resolves to the response body. A 5xx response or a
/// connection-level I/O failure is transient: the executor sleeps on an
/// exponential backoff schedule and retries, up to the configured number of
/// retries, then surfaces the last transient error. Every other status is
/// surfaced immediately as a fatal [`JobwireError::Api`] and never retried.
///
/// Cheaply cloneable; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpExecutor {
    http: Client,
    retry: RetryConfig,
}

impl std::fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl HttpExecutor {
    /// Create an executor with the given retry configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(retry: RetryConfig) -> Result<Self> {
        // Redirects are classified, not followed; the partner APIs never
        // redirect a well-formed request.
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| JobwireError::Api {
                status_code: None,
                response_body: String::new(),
                message: format!("failed to build HTTP client: {err}"),
                transient: false,
            })?;

        Ok(Self { http, retry })
    }

    /// Execute a request and return the response body.
    ///
    /// The body is read fully into memory before classification; responses
    /// on this API are small JSON payloads.
    ///
    /// # Errors
    ///
    /// Returns [`JobwireError::Api`] on any non-2xx outcome, after
    /// exhausting retries for transient ones. The error carries the last
    /// observed status code and response body.
    #[tracing::instrument(skip_all, fields(%method, %url))]
    pub async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<String> {
        let mut retries = 0u32;

        loop {
            let outcome = self
                .attempt(method.clone(), url.clone(), headers.clone(), body.clone())
                .await;

            match outcome {
                Ok(body) => return Ok(body),
                Err(err) if err.is_transient() && retries < self.retry.max_retries => {
                    retries += 1;
                    let delay = self.retry.delay_for_retry(retries);
                    warn!(
                        retry = retries,
                        max_retries = self.retry.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "transient failure, backing off: {err}"
                    );
                    // Dropping this future during the sleep abandons the
                    // exchange without another attempt.
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One attempt: send, read the full body, classify the status.
    async fn attempt(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<String> {
        let mut request = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            debug!(body = %redact::scrub(&body), "request body");
            request = request.body(body);
        }

        let response = request.send().await.map_err(|err| {
            JobwireError::api_from_transport(format!("request failed: {err}"))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|err| {
            JobwireError::api_from_transport(format!("failed to read response body: {err}"))
        })?;

        if status.is_success() {
            debug!(status = status.as_u16(), body = %redact::scrub(&text), "request succeeded");
            return Ok(text);
        }

        debug!(status = status.as_u16(), body = %redact::scrub(&text), "request failed");
        Err(JobwireError::api_from_status(status.as_u16(), text))
    }
}
