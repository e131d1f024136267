//! Credential configuration for the token endpoint.

use std::env;

use url::Url;

use crate::error::{JobwireError, Result};

/// Identifies one API identity: client id, client secret, and the token
/// endpoint they authenticate against.
///
/// Two configurations with identical fields are interchangeable; the token
/// registry caches managers by this value equality. Immutable once built.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
    token_url: Url,
    employer: Option<String>,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("token_url", &self.token_url.as_str())
            .field("employer", &self.employer)
            .finish_non_exhaustive()
    }
}

impl ClientCredentials {
    /// Create a credential configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `token_url` is not a valid URL.
    pub fn new(client_id: &str, client_secret: &str, token_url: &str) -> Result<Self> {
        let token_url = Url::parse(token_url).map_err(|err| JobwireError::Authentication {
            message: format!("invalid token URL '{token_url}': {err}"),
        })?;

        Ok(Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            token_url,
            employer: None,
        })
    }

    /// Create credentials from environment variables.
    ///
    /// Uses `JOBWIRE_CLIENT_ID`, `JOBWIRE_CLIENT_SECRET` and
    /// `JOBWIRE_TOKEN_URL`, plus optionally `JOBWIRE_EMPLOYER` for
    /// delegated access.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is not set.
    pub fn from_env() -> Result<Self> {
        let client_id = require_env("JOBWIRE_CLIENT_ID")?;
        let client_secret = require_env("JOBWIRE_CLIENT_SECRET")?;
        let token_url = require_env("JOBWIRE_TOKEN_URL")?;

        let credentials = Self::new(&client_id, &client_secret, &token_url)?;
        Ok(match env::var("JOBWIRE_EMPLOYER") {
            Ok(employer) => credentials.for_employer(&employer),
            Err(_) => credentials,
        })
    }

    /// Scope these credentials to a delegated employer account.
    ///
    /// Delegated and non-delegated configurations are distinct identities
    /// and get independent token caches.
    #[must_use]
    pub fn for_employer(mut self, employer: &str) -> Self {
        self.employer = Some(employer.to_string());
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    pub fn employer(&self) -> Option<&str> {
        self.employer.as_deref()
    }

    /// The form-encoded body of the client-credentials token request.
    pub(crate) fn token_request_body(&self) -> String {
        let mut body = format!(
            "grant_type=client_credentials&client_id={}&client_secret={}",
            form_encode(&self.client_id),
            form_encode(&self.client_secret),
        );
        if let Some(employer) = &self.employer {
            body.push_str("&employer=");
            body.push_str(&form_encode(employer));
        }
        body
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| JobwireError::Authentication {
        message: format!("{name} environment variable not set"),
    })
}

/// Percent-encode a value per `application/x-www-form-urlencoded`.
///
/// Spaces become `+`, everything outside the unreserved set becomes `%XX`,
/// so secrets with special characters round-trip correctly to the server.
pub(crate) fn form_encode(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_encoding_of_special_characters() {
        assert_eq!(form_encode("secret@!#$%^&()"), "secret%40%21%23%24%25%5E%26%28%29");
        assert_eq!(form_encode("test new client id"), "test+new+client+id");
        assert_eq!(form_encode("plain-id_1.2~3"), "plain-id_1.2~3");
    }

    #[test]
    fn test_token_request_body_is_fully_encoded() {
        let credentials =
            ClientCredentials::new("test new client id", "secret@!#$%^&()", "https://auth.example.com/token")
                .unwrap();

        assert_eq!(
            credentials.token_request_body(),
            "grant_type=client_credentials&client_id=test+new+client+id\
             &client_secret=secret%40%21%23%24%25%5E%26%28%29"
        );
    }

    #[test]
    fn test_employer_rides_the_token_request() {
        let credentials = ClientCredentials::new("id", "secret", "https://auth.example.com/token")
            .unwrap()
            .for_employer("acme co");

        assert!(credentials.token_request_body().ends_with("&employer=acme+co"));
    }

    #[test]
    fn test_value_equality() {
        let a = ClientCredentials::new("id", "secret", "https://auth.example.com/token").unwrap();
        let b = ClientCredentials::new("id", "secret", "https://auth.example.com/token").unwrap();
        let c = a.clone().for_employer("acme");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_debug_hides_secret() {
        let credentials =
            ClientCredentials::new("id", "super-secret", "https://auth.example.com/token").unwrap();
        let debug = format!("{credentials:?}");
        assert!(debug.contains("id"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_invalid_token_url_is_an_authentication_failure() {
        let err = ClientCredentials::new("id", "secret", "not a url").unwrap_err();
        assert!(matches!(err, JobwireError::Authentication { .. }));
    }
}
