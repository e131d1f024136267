//! JobWire partner API client library.
//!
//! A Rust library for the JobWire recruitment partner REST APIs: job
//! posting, pay-for-performance reporting, application attachment upload,
//! and client provisioning.
//!
//! Every operation runs through two shared pieces: a [`TokenManager`] that
//! performs the OAuth2 client-credentials exchange and caches the access
//! token until shortly before it expires, and an HTTP executor that retries
//! transient failures (5xx responses and connection errors) with
//! exponential backoff. Both are wired together by [`JobwireConnection`],
//! which the per-resource clients are built on.
//!
//! # Quick Start
//!
//! ```no_run
//! use jobwire::{ClientCredentials, JobwireConnection, JobsClient, JobListQuery};
//! use jobwire::PaginationParams;
//!
//! #[tokio::main]
//! async fn main() -> jobwire::Result<()> {
//!     let credentials = ClientCredentials::new(
//!         "my-client-id",
//!         "my-client-secret",
//!         "https://auth.jobwire.io/oauth/token",
//!     )?;
//!     let conn = JobwireConnection::connect(credentials, "https://partners.jobwire.io/api")?;
//!
//!     let jobs = JobsClient::new(conn);
//!     let page = jobs
//!         .list(&JobListQuery::default(), &PaginationParams::for_page(1, 20))
//!         .await?;
//!     for job in &page {
//!         println!("{} [{:?}]", job.title, job.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure model
//!
//! Everything fails with one of the four [`JobwireError`] kinds:
//! authentication, serialization, deserialization, or an API failure
//! carrying the status code and response body. Only transient API failures
//! are ever retried, and only inside the executor. Secrets never appear in
//! error messages, and logged request/response bodies pass through a
//! redaction filter first.
//!
//! # Configuration
//!
//! [`JobwireConnection::from_env`] reads:
//!
//! - `JOBWIRE_CLIENT_ID`, `JOBWIRE_CLIENT_SECRET`, `JOBWIRE_TOKEN_URL` (required)
//! - `JOBWIRE_EMPLOYER` (optional) - delegated employer account
//! - `JOBWIRE_API_URL` (optional) - base URL (defaults to `https://partners.jobwire.io/api`)

mod auth;
mod clients;
mod connection;
mod error;
mod http;
mod json;
mod models;
mod pagination;
pub mod redact;

// Re-export core types
pub use auth::{ClientCredentials, TokenManager, TokenRegistry};
pub use connection::JobwireConnection;
pub use error::{JobwireError, Result};
pub use http::{HttpExecutor, RetryConfig};
pub use pagination::{Page, PaginationParams};

// Re-export resource clients
pub use clients::{AttachmentsClient, JobsClient, ProvisioningClient, ReportsClient};

// Re-export models
pub use models::{
    // Attachment types
    AttachmentReceipt,
    AttachmentStatus,
    AttachmentUpload,
    // Job types
    EmploymentType,
    JobListQuery,
    JobLocation,
    JobPatch,
    JobPosting,
    JobPostingReceipt,
    JobStatus,
    JobSummary,
    SalaryPeriod,
    SalaryRange,
    // Report types
    PerformanceReport,
    PerformanceRow,
    PerformanceTotals,
    ReportGrouping,
    ReportQuery,
    // Provisioning types
    ProvisionedClient,
    ProvisionedCredentials,
    ProvisioningRequest,
    ProvisioningStatus,
};
