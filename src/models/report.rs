//! Pay-for-performance reporting models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for a performance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// First day covered, inclusive.
    pub start_date: NaiveDate,
    /// Last day covered, inclusive.
    pub end_date: NaiveDate,
    /// Restrict to these postings; empty means the whole account.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub job_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<ReportGrouping>,
}

impl ReportQuery {
    /// A whole-account query over a date range.
    pub fn range(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            job_ids: Vec::new(),
            group_by: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportGrouping {
    Job,
    Date,
    Campaign,
}

/// A pay-for-performance report over a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub generated_at: DateTime<Utc>,
    /// ISO 4217 currency all spend figures are in.
    pub currency: String,
    pub rows: Vec<PerformanceRow>,
    pub totals: PerformanceTotals,
}

impl PerformanceReport {
    /// Account-wide cost per application, if any applies were recorded.
    pub fn cost_per_apply(&self) -> Option<f64> {
        if self.totals.applies == 0 {
            return None;
        }
        Some(self.totals.spend / self.totals.applies as f64)
    }
}

/// One row of a report, scoped by the query's grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    /// Set when grouping by job.
    #[serde(default)]
    pub job_id: Option<String>,
    /// Set when grouping by date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub applies: u64,
    /// Spend for this row, in the report currency.
    #[serde(default)]
    pub spend: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTotals {
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub applies: u64,
    #[serde(default)]
    pub spend: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_query_omits_empty_filters() {
        let query = ReportQuery::range(
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 7, 31).unwrap(),
        );
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"startDate":"2026-07-01","endDate":"2026-07-31"}"#);
    }

    #[test]
    fn test_cost_per_apply() {
        let mut report: PerformanceReport = serde_json::from_str(
            r#"{
                "generatedAt": "2026-08-01T00:00:00Z",
                "currency": "USD",
                "rows": [],
                "totals": {"impressions": 1000, "clicks": 80, "applies": 8, "spend": 120.0}
            }"#,
        )
        .unwrap();

        assert_eq!(report.cost_per_apply(), Some(15.0));

        report.totals.applies = 0;
        assert_eq!(report.cost_per_apply(), None);
    }
}
