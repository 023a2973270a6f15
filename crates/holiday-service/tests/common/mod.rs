//! Shared test double: a provider whose responses are scripted per call.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use holiday_core::{Country, PublicHoliday};
use holiday_providers::{
    BoxFuture, HolidayProvider, ProviderError, ProviderErrorCode, ProviderResult,
};

/// One scripted outcome: a payload or an error code to fail with.
pub type Step<T> = Result<T, ProviderErrorCode>;

/// A sequence of outcomes; once exhausted, the last step repeats.
struct Script<T> {
    steps: Vec<Step<T>>,
    next: usize,
}

impl<T: Clone> Script<T> {
    fn new(steps: Vec<Step<T>>) -> Self {
        assert!(!steps.is_empty(), "script needs at least one step");
        Self { steps, next: 0 }
    }

    fn take(&mut self) -> Step<T> {
        let idx = self.next.min(self.steps.len() - 1);
        self.next += 1;
        self.steps[idx].clone()
    }
}

/// A [`HolidayProvider`] driven entirely by per-key scripts.
///
/// Country fetches and each `(year, country)` holiday fetch follow their
/// own scripted sequence of outcomes; unscripted holiday keys return an
/// empty list. All holiday calls are recorded for assertions.
pub struct ScriptedProvider {
    countries: Mutex<Script<Vec<Country>>>,
    country_calls: Mutex<u32>,
    holidays: Mutex<HashMap<(i32, String), Script<Vec<PublicHoliday>>>>,
    holiday_calls: Mutex<Vec<(i32, String)>>,
}

impl ScriptedProvider {
    /// Creates a provider that always serves the given country list.
    pub fn new(countries: &[(&str, &str)]) -> Self {
        let list = countries
            .iter()
            .map(|(code, name)| Country::new(*code, *name))
            .collect::<Vec<_>>();
        Self::with_country_script(vec![Ok(list)])
    }

    /// Creates a provider with an explicit country-fetch script.
    pub fn with_country_script(steps: Vec<Step<Vec<Country>>>) -> Self {
        Self {
            countries: Mutex::new(Script::new(steps)),
            country_calls: Mutex::new(0),
            holidays: Mutex::new(HashMap::new()),
            holiday_calls: Mutex::new(Vec::new()),
        }
    }

    /// Scripts a single always-successful holiday response for a key.
    pub fn holidays_ok(self, year: i32, code: &str, holidays: Vec<PublicHoliday>) -> Self {
        self.holidays_script(year, code, vec![Ok(holidays)])
    }

    /// Scripts a single always-failing holiday response for a key.
    pub fn holidays_err(self, year: i32, code: &str, error: ProviderErrorCode) -> Self {
        self.holidays_script(year, code, vec![Err(error)])
    }

    /// Scripts a sequence of holiday outcomes for a key (last repeats).
    pub fn holidays_script(self, year: i32, code: &str, steps: Vec<Step<Vec<PublicHoliday>>>) -> Self {
        self.holidays
            .lock()
            .unwrap()
            .insert((year, code.to_string()), Script::new(steps));
        self
    }

    /// Returns all recorded `(year, country)` holiday fetches, in order.
    pub fn holiday_calls(&self) -> Vec<(i32, String)> {
        self.holiday_calls.lock().unwrap().clone()
    }

    /// Returns how often the country list was fetched.
    pub fn country_call_count(&self) -> u32 {
        *self.country_calls.lock().unwrap()
    }
}

impl HolidayProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn fetch_countries(&self) -> BoxFuture<'_, ProviderResult<Vec<Country>>> {
        *self.country_calls.lock().unwrap() += 1;
        let step = self.countries.lock().unwrap().take();
        Box::pin(async move { step.map_err(|code| ProviderError::new(code, "scripted failure")) })
    }

    fn fetch_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> BoxFuture<'_, ProviderResult<Vec<PublicHoliday>>> {
        let key = (year, country_code.to_string());
        self.holiday_calls.lock().unwrap().push(key.clone());
        let step = match self.holidays.lock().unwrap().get_mut(&key) {
            Some(script) => script.take(),
            None => Ok(Vec::new()),
        };
        Box::pin(async move { step.map_err(|code| ProviderError::new(code, "scripted failure")) })
    }
}

/// Parses an ISO date for test fixtures.
pub fn date(s: &str) -> chrono::NaiveDate {
    s.parse().unwrap()
}

/// Builds a holiday fixture.
pub fn holiday(d: &str, local_name: &str, name: &str) -> PublicHoliday {
    PublicHoliday::new(date(d), local_name, name)
}
