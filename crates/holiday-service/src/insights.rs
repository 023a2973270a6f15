//! The three insight operations over fetched holiday data.
//!
//! - Recent holidays: walk backwards from the current year, collecting
//!   past holidays until three are found or ten years are searched.
//! - Non-weekend counts: per-country weekday-holiday counts across a
//!   requested set, best-effort (a failing country is dropped, never the
//!   whole request).
//! - Common holidays: dates two countries both observe, with local names
//!   joined per country.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use tracing::debug;

use holiday_core::{CommonHoliday, CountryHolidayCount, PublicHoliday, RecentHoliday};
use holiday_providers::{HolidayProvider, NagerClient, RetryPolicy};

use crate::config::ServiceConfig;
use crate::error::{InsightError, InsightResult};
use crate::registry::CountryRegistry;
use crate::store::HolidayStore;

/// How many past years are searched for recent holidays.
const LOOK_BACK_YEARS: i32 = 10;
/// How many recent holidays are returned at most.
const RECENT_HOLIDAYS_COUNT: usize = 3;

/// The holiday insight engine.
///
/// Owns the country registry and the holiday store; all three public
/// operations go through them, so isolated instances with fake providers
/// are cheap to construct in tests.
#[derive(Debug)]
pub struct InsightEngine {
    registry: Arc<CountryRegistry>,
    store: HolidayStore,
}

impl InsightEngine {
    /// Creates an engine around an arbitrary provider.
    pub fn new(provider: Arc<dyn HolidayProvider>, retry: RetryPolicy) -> Self {
        let registry = Arc::new(CountryRegistry::new(Arc::clone(&provider), retry.clone()));
        let store = HolidayStore::new(provider, Arc::clone(&registry), retry);
        Self { registry, store }
    }

    /// Creates an engine backed by the Nager.Date API per `config`.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let provider = Arc::new(NagerClient::new(
            &config.base_url,
            config.connect_timeout,
            config.request_timeout,
        ));
        Self::new(provider, config.retry_policy())
    }

    /// Populates the country registry for the first time.
    ///
    /// Must succeed once before the engine is useful; a failure here is
    /// fatal at startup since no country code can be validated without a
    /// country list.
    pub async fn initialize(&self) -> InsightResult<()> {
        self.registry.refresh().await.map(|_| ())
    }

    /// Returns the country registry.
    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// Returns the most recent past holidays of `country` (at most three),
    /// newest first.
    ///
    /// Searches backwards from the current year through at most ten years.
    /// Errors (invalid country, provider unavailable with no cache)
    /// propagate to the caller.
    pub async fn recent_holidays(&self, country: &str) -> InsightResult<Vec<RecentHoliday>> {
        self.recent_holidays_as_of(country, Utc::now().date_naive())
            .await
    }

    /// Like [`recent_holidays`](Self::recent_holidays) with an explicit
    /// "today", so callers and tests can pin the clock.
    pub async fn recent_holidays_as_of(
        &self,
        country: &str,
        today: NaiveDate,
    ) -> InsightResult<Vec<RecentHoliday>> {
        let current_year = today.year();
        let earliest_year = current_year - LOOK_BACK_YEARS;
        let mut collected: Vec<RecentHoliday> = Vec::new();

        let mut year = current_year;
        while collected.len() < RECENT_HOLIDAYS_COUNT && year > earliest_year {
            let holidays = self.store.holidays(year, country).await?;
            collected.extend(past_holidays_newest_first(&holidays, today));
            year -= 1;
        }

        collected.truncate(RECENT_HOLIDAYS_COUNT);
        Ok(collected)
    }

    /// Counts non-weekend holidays for each of the requested countries in
    /// `year`, sorted by count descending.
    ///
    /// `countries` is a comma-separated list; entries are trimmed and
    /// deduplicated case-insensitively. The aggregation is best-effort: a
    /// country whose data cannot be obtained (invalid code, provider down
    /// with no cache) is dropped from the result instead of failing the
    /// whole request.
    pub async fn non_weekend_holiday_counts(
        &self,
        year: i32,
        countries: &str,
    ) -> Vec<CountryHolidayCount> {
        let requested: BTreeSet<String> = countries
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase)
            .collect();

        let mut counts: Vec<CountryHolidayCount> = Vec::new();
        for code in &requested {
            match self.store.holidays(year, code).await {
                Ok(holidays) => {
                    let count = holidays.iter().filter(|h| !h.is_weekend()).count() as u32;
                    counts.push(CountryHolidayCount {
                        country_code: code.clone(),
                        count,
                    });
                }
                Err(err) => {
                    debug!(country = %code, year, error = %err, "dropping country from count aggregation");
                }
            }
        }

        // Stable sort over the alphabetical traversal order above, so ties
        // come out in a deterministic order.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Returns the holidays `country1` and `country2` share in `year`,
    /// sorted by date ascending.
    ///
    /// When several holidays of one country fall on the shared date, their
    /// local names are joined with `", "`. Requesting the same country
    /// twice is rejected; fetch errors for either country propagate.
    pub async fn common_holidays(
        &self,
        year: i32,
        country1: &str,
        country2: &str,
    ) -> InsightResult<Vec<CommonHoliday>> {
        if country1.trim().eq_ignore_ascii_case(country2.trim()) {
            return Err(InsightError::invalid_country(
                "country1 and country2 must be different",
            ));
        }

        let holidays1 = self.store.holidays(year, country1).await?;
        let holidays2 = self.store.holidays(year, country2).await?;

        let names1 = local_names_by_date(&holidays1);
        let names2 = local_names_by_date(&holidays2);

        let common = names1
            .into_iter()
            .filter_map(|(date, local_name_1)| {
                names2.get(&date).map(|local_name_2| CommonHoliday {
                    date,
                    local_name_1,
                    local_name_2: local_name_2.clone(),
                })
            })
            .collect();
        Ok(common)
    }
}

/// Filters out future-dated holidays and sorts the rest newest first.
fn past_holidays_newest_first(holidays: &[PublicHoliday], today: NaiveDate) -> Vec<RecentHoliday> {
    let mut past: Vec<&PublicHoliday> = holidays.iter().filter(|h| h.date <= today).collect();
    past.sort_by(|a, b| b.date.cmp(&a.date));
    past.into_iter()
        .map(|h| RecentHoliday {
            date: h.date,
            name: h.name.clone(),
        })
        .collect()
}

/// Groups holidays by date, joining local names of same-date holidays.
fn local_names_by_date(holidays: &[PublicHoliday]) -> BTreeMap<NaiveDate, String> {
    let mut names: BTreeMap<NaiveDate, Vec<&str>> = BTreeMap::new();
    for holiday in holidays {
        names
            .entry(holiday.date)
            .or_default()
            .push(&holiday.local_name);
    }
    names
        .into_iter()
        .map(|(date, locals)| (date, locals.join(", ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn holiday(d: &str, local: &str, name: &str) -> PublicHoliday {
        PublicHoliday::new(date(d), local, name)
    }

    #[test]
    fn past_filter_excludes_future_and_sorts_descending() {
        let holidays = vec![
            holiday("2024-01-01", "a", "New Year"),
            holiday("2024-12-25", "b", "Christmas"),
            holiday("2024-05-01", "c", "May Day"),
        ];
        let past = past_holidays_newest_first(&holidays, date("2024-06-15"));
        assert_eq!(past.len(), 2);
        assert_eq!(past[0].date, date("2024-05-01"));
        assert_eq!(past[1].date, date("2024-01-01"));
    }

    #[test]
    fn holiday_on_today_is_included() {
        let holidays = vec![holiday("2024-06-15", "a", "Today")];
        let past = past_holidays_newest_first(&holidays, date("2024-06-15"));
        assert_eq!(past.len(), 1);
    }

    #[test]
    fn local_names_join_on_shared_dates() {
        let holidays = vec![
            holiday("2024-01-01", "Nieuwjaarsdag", "New Year's Day"),
            holiday("2024-01-01", "Nationale feestdag", "National Day"),
            holiday("2024-04-27", "Koningsdag", "King's Day"),
        ];
        let by_date = local_names_by_date(&holidays);
        assert_eq!(
            by_date[&date("2024-01-01")],
            "Nieuwjaarsdag, Nationale feestdag"
        );
        assert_eq!(by_date[&date("2024-04-27")], "Koningsdag");
    }
}
