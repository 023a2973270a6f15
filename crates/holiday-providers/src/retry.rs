//! Fixed-delay retry policy for remote provider calls.
//!
//! Both raw provider operations are wrapped in the same policy: a
//! transient failure is retried up to a configurable number of attempts
//! with a fixed delay in between, after which the last error is returned
//! so the caller can recover (stale snapshot, cache fallback) or surface
//! an unavailability condition. Non-transient failures propagate
//! immediately without any retry.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::ProviderResult;

/// Retry policy for remote provider calls.
///
/// `max_attempts` counts the initial call as well, so the default of 3
/// means one call plus up to two retries.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first (minimum 1).
    pub max_attempts: u32,
    /// Delay between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(2000),
        }
    }
}

impl RetryPolicy {
    /// Creates a new retry policy.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Builder: set the number of attempts.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Builder: set the delay between attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Runs `operation` under this policy.
    ///
    /// The operation is re-invoked after a retryable error until it
    /// succeeds or the attempts are exhausted; the last error is then
    /// returned. A non-retryable error is returned right away.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> ProviderResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ProviderResult<T>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < max_attempts => {
                    warn!(
                        attempt,
                        max_attempts,
                        error = %err,
                        "provider call failed, retrying after delay"
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
