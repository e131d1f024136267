//! Retry configuration and backoff schedule.

use std::time::Duration;

/// Configuration for retry behavior on transient failures.
///
/// A request is attempted once and then retried up to `max_retries` more
/// times, sleeping between attempts. The sleep starts at `initial_backoff`
/// and grows by `backoff_multiplier` per retry, capped at `max_backoff`.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub backoff_multiplier: f64,
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_secs(1),
            backoff_multiplier: 2.0,
            max_backoff: Duration::from_secs(10),
        }
    }
}

impl RetryConfig {
    /// Disable retries entirely; every failure is surfaced immediately.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// The sleep before retry number `retry` (1-indexed).
    pub(crate) fn delay_for_retry(&self, retry: u32) -> Duration {
        let millis = (self.initial_backoff.as_millis() as f64)
            * self.backoff_multiplier.powi(retry.saturating_sub(1) as i32);
        let delay = Duration::from_millis(millis as u64);
        delay.min(self.max_backoff)
    }
}
