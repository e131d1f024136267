//! Pay-for-performance reporting operations.

use crate::connection::JobwireConnection;
use crate::error::Result;
use crate::models::{PerformanceReport, ReportQuery};

/// Client for the pay-for-performance reporting API.
#[derive(Debug, Clone)]
pub struct ReportsClient {
    conn: JobwireConnection,
}

impl ReportsClient {
    pub fn new(conn: JobwireConnection) -> Self {
        Self { conn }
    }

    /// Run a performance report over the query's date range.
    pub async fn performance(&self, query: &ReportQuery) -> Result<PerformanceReport> {
        self.conn.post_json("reports/performance", query).await
    }

    /// Performance for a single posting over the query's date range.
    pub async fn performance_for_job(
        &self,
        job_id: &str,
        query: &ReportQuery,
    ) -> Result<PerformanceReport> {
        let mut query = query.clone();
        query.job_ids = vec![job_id.to_string()];
        self.performance(&query).await
    }
}
