//! Service configuration.
//!
//! All knobs can come from the environment:
//!
//! - `HOLIDAY_API_BASE_URL` - provider API root
//! - `HOLIDAY_API_RETRY_MAX_ATTEMPTS` - total attempts per remote call
//! - `HOLIDAY_API_RETRY_DELAY_MS` - delay between attempts
//! - `HOLIDAY_API_CONNECT_TIMEOUT_SECS` - TCP/TLS connect timeout
//! - `HOLIDAY_API_REQUEST_TIMEOUT_SECS` - whole-request timeout
//!
//! Unset or unparsable values fall back to the defaults below (a warning
//! is logged for unparsable ones).

use std::time::Duration;

use holiday_providers::{RetryPolicy, nager};
use tracing::warn;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Provider API base URL.
    pub base_url: String,

    /// Total attempts per remote call, including the first.
    pub retry_max_attempts: u32,

    /// Delay between retry attempts.
    pub retry_delay: Duration,

    /// Connection timeout for the HTTP client.
    pub connect_timeout: Duration,

    /// Whole-request timeout for the HTTP client.
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: nager::DEFAULT_BASE_URL.to_string(),
            retry_max_attempts: 3,
            retry_delay: Duration::from_millis(2000),
            connect_timeout: Duration::from_secs(45),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ServiceConfig {
    /// Builder: set the provider base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builder: set the retry attempt count.
    pub fn with_retry_max_attempts(mut self, attempts: u32) -> Self {
        self.retry_max_attempts = attempts;
        self
    }

    /// Builder: set the retry delay.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Builder: set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Builder: set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests can pass a map-backed closure
    /// instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = lookup("HOLIDAY_API_BASE_URL").unwrap_or(defaults.base_url);
        let retry_max_attempts = parse_var(
            &lookup,
            "HOLIDAY_API_RETRY_MAX_ATTEMPTS",
            defaults.retry_max_attempts,
        );
        let retry_delay = Duration::from_millis(parse_var(
            &lookup,
            "HOLIDAY_API_RETRY_DELAY_MS",
            defaults.retry_delay.as_millis() as u64,
        ));
        let connect_timeout = Duration::from_secs(parse_var(
            &lookup,
            "HOLIDAY_API_CONNECT_TIMEOUT_SECS",
            defaults.connect_timeout.as_secs(),
        ));
        let request_timeout = Duration::from_secs(parse_var(
            &lookup,
            "HOLIDAY_API_REQUEST_TIMEOUT_SECS",
            defaults.request_timeout.as_secs(),
        ));

        Self {
            base_url,
            retry_max_attempts,
            retry_delay,
            connect_timeout,
            request_timeout,
        }
    }

    /// Returns the retry policy this configuration describes.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_max_attempts, self.retry_delay)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> T {
    match lookup(name) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(%name, %raw, "unparsable configuration value, using default");
                default
            }
        },
        None => default,
    }
}
