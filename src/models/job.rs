//! Job posting models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting submitted to or returned from the jobs API.
///
/// The `reference` is the partner-side identifier, unique within an
/// employer account; JobWire assigns its own `jobId` on creation, returned
/// in the [`JobPostingReceipt`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    /// Partner-side reference for this posting.
    pub reference: String,

    /// The job title shown to seekers.
    pub title: String,

    /// Full description, HTML allowed.
    pub description: String,

    /// Hiring company display name.
    pub company_name: String,

    /// Where the job is located.
    pub location: JobLocation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRange>,

    /// Where applies are sent when JobWire hosted apply is not used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    /// Whether the role can be performed fully remotely.
    #[serde(default)]
    pub remote: bool,

    /// When the posting should stop being served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Location of a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLocation {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

/// Salary range for a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    pub minimum: f64,
    pub maximum: f64,
    /// ISO 4217 currency code.
    pub currency: String,
    pub period: SalaryPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryPeriod {
    Hourly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Internship,
}

/// Lifecycle state of a posting on JobWire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Accepted, awaiting moderation.
    Pending,
    /// Being served to seekers.
    Live,
    /// Failed moderation; see the receipt for details.
    Rejected,
    Expired,
    Closed,
}

impl JobStatus {
    /// True once the posting can no longer return to serving.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Rejected | JobStatus::Expired | JobStatus::Closed)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Live => "LIVE",
            JobStatus::Rejected => "REJECTED",
            JobStatus::Expired => "EXPIRED",
            JobStatus::Closed => "CLOSED",
        }
    }
}

/// Result of creating or updating a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingReceipt {
    /// JobWire-assigned posting id.
    pub job_id: String,
    /// The partner reference echoed back.
    pub reference: String,
    pub status: JobStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Moderation detail when the posting was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
}

impl JobPostingReceipt {
    pub fn is_live(&self) -> bool {
        self.status == JobStatus::Live
    }
}

/// Partial update for an existing posting; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// One row of a job listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub job_id: String,
    pub reference: String,
    pub title: String,
    pub status: JobStatus,
}

/// Filters for listing postings.
#[derive(Debug, Clone, Default)]
pub struct JobListQuery {
    /// Restrict to postings in this state.
    pub status: Option<JobStatus>,
    /// Free-text match on title and reference.
    pub search: Option<String>,
}
