//! Job posting operations.

use crate::connection::{build_query, JobwireConnection};
use crate::error::Result;
use crate::models::{JobListQuery, JobPatch, JobPosting, JobPostingReceipt, JobSummary};
use crate::pagination::{Page, PageEnvelope, PaginationParams};

/// Client for the job posting API.
#[derive(Debug, Clone)]
pub struct JobsClient {
    conn: JobwireConnection,
}

impl JobsClient {
    pub fn new(conn: JobwireConnection) -> Self {
        Self { conn }
    }

    /// Submit a new posting.
    pub async fn create(&self, posting: &JobPosting) -> Result<JobPostingReceipt> {
        self.conn.post_json("jobs", posting).await
    }

    /// Fetch a posting by its JobWire id.
    pub async fn get(&self, job_id: &str) -> Result<JobPosting> {
        self.conn
            .get_json(&format!("jobs/{}", urlencoding::encode(job_id)))
            .await
    }

    /// Apply a partial update to an existing posting.
    pub async fn update(&self, job_id: &str, patch: &JobPatch) -> Result<JobPostingReceipt> {
        self.conn
            .put_json(&format!("jobs/{}", urlencoding::encode(job_id)), patch)
            .await
    }

    /// Take a posting off the board.
    pub async fn close(&self, job_id: &str) -> Result<()> {
        self.conn
            .delete(&format!("jobs/{}", urlencoding::encode(job_id)))
            .await
    }

    /// List postings, newest first.
    pub async fn list(
        &self,
        query: &JobListQuery,
        pagination: &PaginationParams,
    ) -> Result<Page<JobSummary>> {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(status) = &query.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(search) = &query.search {
            pairs.push(("q", search.clone()));
        }
        if let Some(page) = pagination.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = pagination.page_size {
            pairs.push(("pageSize", page_size.to_string()));
        }

        let envelope: PageEnvelope<JobSummary> = self
            .conn
            .get_json(&format!("jobs{}", build_query(&pairs)))
            .await?;
        Ok(envelope.into_page())
    }
}
