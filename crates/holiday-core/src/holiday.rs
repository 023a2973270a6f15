//! Public holiday records and the three derived insight views.
//!
//! [`PublicHoliday`] is the provider-agnostic record the service works
//! with; the upstream API attaches more fields (country code, fixed/global
//! flags, subdivisions, launch year, type tags) which are dropped at the
//! provider boundary. The remaining types are the output shapes of the
//! three insight operations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A single public holiday for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The holiday name in the country's local language.
    pub local_name: String,
    /// The holiday name in English.
    pub name: String,
}

impl PublicHoliday {
    /// Creates a new public holiday.
    pub fn new(date: NaiveDate, local_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            date,
            local_name: local_name.into(),
            name: name.into(),
        }
    }

    /// Returns `true` if the holiday falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// One of the most recent past holidays of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentHoliday {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The holiday name in English.
    pub name: String,
}

/// How many non-weekend holidays a country has in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryHolidayCount {
    /// Uppercase country code.
    pub country_code: String,
    /// Number of holidays not falling on a Saturday or Sunday.
    pub count: u32,
}

/// A date on which two countries both observe a holiday.
///
/// When several holidays of one country share the date, their local names
/// are joined with `", "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonHoliday {
    /// The shared calendar date.
    pub date: NaiveDate,
    /// Local name(s) of the first country's holiday(s) on that date.
    pub local_name_1: String,
    /// Local name(s) of the second country's holiday(s) on that date.
    pub local_name_2: String,
}
