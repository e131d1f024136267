//! Application provisioning models.
//!
//! Provisioning creates delegated API clients for employer accounts under
//! a parent partner identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to provision an API client for an employer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningRequest {
    pub employer_name: String,
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// API scopes the provisioned client may use.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

/// Freshly issued client credentials.
///
/// The secret is returned exactly once, at provisioning time; store it
/// immediately.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedCredentials {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for ProvisionedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisionedCredentials")
            .field("client_id", &self.client_id)
            .field("scopes", &self.scopes)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProvisioningStatus {
    Pending,
    Active,
    Suspended,
}

/// State of a provisioned client, secret omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedClient {
    pub client_id: String,
    pub employer_name: String,
    pub status: ProvisioningStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
