//! Holiday cache & fetcher.
//!
//! [`HolidayStore`] is the only mutation point for holiday data: it
//! validates the requested country against the registry, fetches through
//! the retry policy, and keeps a last-known-good cache per
//! `(country, year)` key. When a fetch fails after retries, a non-empty
//! cached list is served instead; the caller cannot distinguish fresh from
//! stale data.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use holiday_core::PublicHoliday;
use holiday_providers::{HolidayProvider, RetryPolicy};

use crate::error::{InsightError, InsightResult};
use crate::registry::CountryRegistry;

/// Number of sample codes embedded in invalid-country messages.
const SAMPLE_CODES: usize = 10;

/// Cache key: uppercase country code plus year.
type CacheKey = (String, i32);

/// Fetches holiday lists and keeps a last-known-good cache.
pub struct HolidayStore {
    provider: Arc<dyn HolidayProvider>,
    registry: Arc<CountryRegistry>,
    retry: RetryPolicy,
    /// Entries never expire; a newer successful fetch for the same key
    /// overwrites the old list wholesale (last writer wins, no merging).
    cache: RwLock<HashMap<CacheKey, Arc<Vec<PublicHoliday>>>>,
}

impl HolidayStore {
    /// Creates an empty store.
    pub fn new(
        provider: Arc<dyn HolidayProvider>,
        registry: Arc<CountryRegistry>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            provider,
            registry,
            retry,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the holidays of `country` for `year`.
    ///
    /// The country code is normalized to uppercase and validated against
    /// the registry before any remote call. A successful fetch overwrites
    /// the cache entry for the key; an exhausted fetch falls back to a
    /// non-empty cached list, or surfaces the provider-unavailable
    /// condition when there is nothing to fall back on.
    pub async fn holidays(&self, year: i32, country: &str) -> InsightResult<Arc<Vec<PublicHoliday>>> {
        let code = country.trim().to_uppercase();
        if !self.registry.is_valid(&code) {
            let samples = self.registry.sample(SAMPLE_CODES);
            return Err(InsightError::invalid_country(format!(
                "invalid country code: '{}', please provide a valid country code, for example one of {:?}",
                country, samples
            )));
        }

        match self.retry.run(|| self.provider.fetch_holidays(year, &code)).await {
            Ok(holidays) => {
                let entry = Arc::new(holidays);
                self.cache
                    .write()
                    .expect("cache lock poisoned")
                    .insert((code, year), Arc::clone(&entry));
                Ok(entry)
            }
            Err(err) => {
                let cached = self
                    .cache
                    .read()
                    .expect("cache lock poisoned")
                    .get(&(code.clone(), year))
                    .cloned();
                match cached {
                    Some(entry) if !entry.is_empty() => {
                        warn!(
                            country = %code,
                            year,
                            error = %err,
                            "provider fetch failed, serving cached holidays"
                        );
                        Ok(entry)
                    }
                    _ => {
                        debug!(country = %code, year, "provider fetch failed with no cached data");
                        Err(InsightError::unavailable(err))
                    }
                }
            }
        }
    }

    /// Returns the registry this store validates against.
    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }
}

impl std::fmt::Debug for HolidayStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayStore")
            .field("provider", &self.provider.name())
            .field(
                "cached_keys",
                &self.cache.read().expect("cache lock poisoned").len(),
            )
            .finish()
    }
}
