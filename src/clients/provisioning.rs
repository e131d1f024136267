//! Application provisioning operations.

use crate::connection::JobwireConnection;
use crate::error::Result;
use crate::models::{ProvisionedClient, ProvisionedCredentials, ProvisioningRequest};

/// Client for the provisioning API.
///
/// Provisioning requires parent (partner) credentials; the returned
/// secrets can then be used as delegated [`ClientCredentials`].
///
/// [`ClientCredentials`]: crate::ClientCredentials
#[derive(Debug, Clone)]
pub struct ProvisioningClient {
    conn: JobwireConnection,
}

impl ProvisioningClient {
    pub fn new(conn: JobwireConnection) -> Self {
        Self { conn }
    }

    /// Provision a new API client for an employer account.
    pub async fn create(&self, request: &ProvisioningRequest) -> Result<ProvisionedCredentials> {
        self.conn.post_json("provisioning/clients", request).await
    }

    /// Fetch the state of a provisioned client.
    pub async fn get(&self, client_id: &str) -> Result<ProvisionedClient> {
        self.conn
            .get_json(&format!(
                "provisioning/clients/{}",
                urlencoding::encode(client_id)
            ))
            .await
    }
}
