//! In-memory registry of countries known to the holiday provider.
//!
//! The registry owns the code → name snapshot used to validate requested
//! country codes. A refresh replaces the whole snapshot atomically; when a
//! refresh fails after retries, a previously installed snapshot keeps
//! being served so the service stays usable across provider outages.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use holiday_providers::{HolidayProvider, RetryPolicy};

use crate::error::{InsightError, InsightResult};

/// Country snapshot: uppercase code → country name.
pub type CountrySnapshot = Arc<HashMap<String, String>>;

/// Registry of valid country codes, refreshed from the provider.
pub struct CountryRegistry {
    provider: Arc<dyn HolidayProvider>,
    retry: RetryPolicy,
    /// Readers clone the inner `Arc` and never block on a refresh; a
    /// refresh installs a fully built replacement map in one swap.
    snapshot: RwLock<CountrySnapshot>,
}

impl CountryRegistry {
    /// Creates a registry with an empty snapshot.
    ///
    /// Call [`refresh`](Self::refresh) once at startup; the service cannot
    /// operate meaningfully before the first successful country fetch.
    pub fn new(provider: Arc<dyn HolidayProvider>, retry: RetryPolicy) -> Self {
        Self {
            provider,
            retry,
            snapshot: RwLock::new(Arc::new(HashMap::new())),
        }
    }

    /// Refreshes the snapshot from the provider.
    ///
    /// On success the new snapshot replaces the current one atomically and
    /// is returned. On failure (after the retry policy is exhausted) a
    /// previous non-empty snapshot is returned unchanged; with no snapshot
    /// to fall back on the provider-unavailable condition is surfaced.
    pub async fn refresh(&self) -> InsightResult<CountrySnapshot> {
        match self.retry.run(|| self.provider.fetch_countries()).await {
            Ok(countries) => {
                let map: HashMap<String, String> = countries
                    .into_iter()
                    .map(|c| (c.normalized_code(), c.name))
                    .collect();
                debug!("refreshed country registry with {} entries", map.len());
                let snapshot = Arc::new(map);
                *self.snapshot.write().expect("registry lock poisoned") = Arc::clone(&snapshot);
                Ok(snapshot)
            }
            Err(err) => {
                let current = self.current();
                if current.is_empty() {
                    warn!(error = %err, "country refresh failed and no previous snapshot exists");
                    Err(InsightError::unavailable(err))
                } else {
                    warn!(error = %err, "country refresh failed, serving previous snapshot");
                    Ok(current)
                }
            }
        }
    }

    /// Returns the current snapshot.
    pub fn current(&self) -> CountrySnapshot {
        Arc::clone(&self.snapshot.read().expect("registry lock poisoned"))
    }

    /// Case-insensitive membership test against the current snapshot.
    pub fn is_valid(&self, code: &str) -> bool {
        self.current().contains_key(&code.trim().to_uppercase())
    }

    /// Returns up to `n` known codes, sorted, for use in error messages.
    pub fn sample(&self, n: usize) -> Vec<String> {
        let snapshot = self.current();
        let mut codes: Vec<String> = snapshot.keys().cloned().collect();
        codes.sort();
        codes.truncate(n);
        codes
    }
}

impl std::fmt::Debug for CountryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryRegistry")
            .field("provider", &self.provider.name())
            .field("countries", &self.current().len())
            .finish()
    }
}
