//! Error types for JobWire API operations.

use thiserror::Error;

/// Errors that can occur during JobWire API operations.
///
/// Every failure surfaced by this crate is one of these four kinds, so
/// callers have a closed set of cases to handle. Raw transport and parser
/// errors never escape; they are wrapped at the layer that saw them.
#[derive(Debug, Error)]
pub enum JobwireError {
    /// Token acquisition failed.
    ///
    /// Carries the client id and, for API-level failures, the status code
    /// and response body of the token endpoint. Never retried.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// A request body could not be serialized.
    #[error("failed to serialize {context}: {source}")]
    Serialization {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A response body could not be deserialized.
    #[error("failed to deserialize {context}: {source}")]
    Deserialization {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An API request failed.
    ///
    /// `status_code` is `None` when the failure was connection-level and no
    /// response was received. `transient` is true for 5xx responses and
    /// connection-level failures; those are the only outcomes the executor
    /// retries.
    #[error("JobWire API error{}: {message}", status_suffix(.status_code))]
    Api {
        status_code: Option<u16>,
        response_body: String,
        message: String,
        transient: bool,
    },
}

fn status_suffix(status_code: &Option<u16>) -> String {
    match status_code {
        Some(code) => format!(" ({code})"),
        None => String::new(),
    }
}

impl JobwireError {
    /// True if retrying the operation may succeed.
    ///
    /// Only [`JobwireError::Api`] can be transient: a 5xx response or a
    /// connection-level I/O failure. Everything else is terminal.
    pub fn is_transient(&self) -> bool {
        matches!(self, JobwireError::Api { transient: true, .. })
    }

    /// The HTTP status code, if this failure carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            JobwireError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    pub(crate) fn api_from_status(status_code: u16, response_body: String) -> Self {
        JobwireError::Api {
            status_code: Some(status_code),
            message: format!("request failed with status {status_code}"),
            transient: (500..=599).contains(&status_code),
            response_body,
        }
    }

    pub(crate) fn api_from_transport(message: String) -> Self {
        JobwireError::Api {
            status_code: None,
            response_body: String::new(),
            message,
            transient: true,
        }
    }
}

/// Result type alias for JobWire operations.
pub type Result<T> = core::result::Result<T, JobwireError>;
