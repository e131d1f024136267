//! Per-resource API clients.
//!
//! Each client is a thin formatter over [`JobwireConnection`]: build the
//! URL, send, deserialize. They are independent structs sharing the same
//! authenticated-request capability.
//!
//! [`JobwireConnection`]: crate::JobwireConnection

mod attachments;
mod jobs;
mod provisioning;
mod reports;

pub use attachments::AttachmentsClient;
pub use jobs::JobsClient;
pub use provisioning::ProvisioningClient;
pub use reports::ReportsClient;
