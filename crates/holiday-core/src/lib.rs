//! Core types: countries, public holidays, derived insight views, tracing

pub mod country;
pub mod holiday;
pub mod tracing;

pub use country::Country;
pub use holiday::{CommonHoliday, CountryHolidayCount, PublicHoliday, RecentHoliday};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
