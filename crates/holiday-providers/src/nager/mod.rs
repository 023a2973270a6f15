//! Nager.Date provider.
//!
//! [Nager.Date](https://date.nager.at) is a free public-holiday API. This
//! module contains the HTTP client implementing [`HolidayProvider`] against
//! its v3 endpoints.
//!
//! [`HolidayProvider`]: crate::provider::HolidayProvider

mod client;

pub use client::NagerClient;

/// Base URL for the Nager.Date v3 API.
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3";
