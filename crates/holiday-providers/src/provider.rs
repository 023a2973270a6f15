//! HolidayProvider trait definition.
//!
//! This module defines the [`HolidayProvider`] trait, the core abstraction
//! for upstream holiday-data sources. A provider knows how to perform the
//! two raw remote calls the service needs:
//!
//! - Listing the countries the source has data for
//! - Listing the public holidays of one country for one year
//!
//! Retry and cache-fallback behavior live above this trait; an
//! implementation only has to surface honest [`ProviderError`]s.

use std::future::Future;
use std::pin::Pin;

use holiday_core::{Country, PublicHoliday};

use crate::error::{ProviderError, ProviderResult};

/// A boxed future for async trait methods.
///
/// This is used because async functions in traits are not yet stable in a way
/// that works well with dynamic dispatch. Using boxed futures allows the trait
/// to be object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The core abstraction for holiday-data sources.
///
/// # Implementation Notes
///
/// - Implementations should be `Send + Sync` for use in async contexts
/// - A returned holiday list is complete and unordered for the requested
///   `(year, country)` pair; there is no pagination
/// - Transient failures (network, 5xx, rate limiting) must map to
///   retryable [`ProviderError`]s so the retry policy can classify them
pub trait HolidayProvider: Send + Sync {
    /// Returns the name/type of this provider (e.g., "nager").
    fn name(&self) -> &str;

    /// Fetches the list of countries this provider has holiday data for.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on network errors, upstream failures, or
    /// malformed responses.
    fn fetch_countries(&self) -> BoxFuture<'_, ProviderResult<Vec<Country>>>;

    /// Fetches all public holidays of `country_code` for `year`.
    ///
    /// The country code is passed through as given; validation against the
    /// known country set happens in the layer above.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on network errors, upstream failures, or
    /// malformed responses.
    fn fetch_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> BoxFuture<'_, ProviderResult<Vec<PublicHoliday>>>;
}

/// A provider that always returns an error.
///
/// This is useful for testing or as a placeholder when a provider
/// fails to initialize.
#[derive(Debug)]
pub struct ErrorProvider {
    name: String,
    error: ProviderError,
}

impl ErrorProvider {
    /// Creates a new error provider.
    pub fn new(name: impl Into<String>, error: ProviderError) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }

    // ProviderError is not Clone, so each call rebuilds it from its parts.
    fn make_error(&self) -> ProviderError {
        ProviderError::new(self.error.code(), self.error.message()).with_provider(&self.name)
    }
}

impl HolidayProvider for ErrorProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_countries(&self) -> BoxFuture<'_, ProviderResult<Vec<Country>>> {
        let error = self.make_error();
        Box::pin(async move { Err(error) })
    }

    fn fetch_holidays(
        &self,
        _year: i32,
        _country_code: &str,
    ) -> BoxFuture<'_, ProviderResult<Vec<PublicHoliday>>> {
        let error = self.make_error();
        Box::pin(async move { Err(error) })
    }
}
