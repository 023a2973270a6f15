//! Error types for the holiday insight service.

use holiday_providers::ProviderError;
use thiserror::Error;

/// An error surfaced by the insight service.
///
/// These are the only two conditions callers see; transient provider
/// failures are absorbed by the retry policy and the cache fallback before
/// they can reach this level.
#[derive(Debug, Error)]
pub enum InsightError {
    /// The requested country code is not known, or the two countries of a
    /// comparison are identical. Caller-correctable.
    #[error("{message}")]
    InvalidCountry {
        /// Descriptive message, including sample valid codes where applicable.
        message: String,
    },

    /// The upstream provider failed after exhausting retries and no usable
    /// cached data exists.
    #[error("unable to retrieve data from the holiday provider right now, please try again later")]
    ProviderUnavailable {
        /// The final provider error after retries were exhausted.
        #[source]
        source: ProviderError,
    },
}

impl InsightError {
    /// Creates an invalid-country error.
    pub fn invalid_country(message: impl Into<String>) -> Self {
        Self::InvalidCountry {
            message: message.into(),
        }
    }

    /// Creates a provider-unavailable error from the final provider error.
    pub fn unavailable(source: ProviderError) -> Self {
        Self::ProviderUnavailable { source }
    }

    /// Returns true for the invalid-country condition.
    pub fn is_invalid_country(&self) -> bool {
        matches!(self, Self::InvalidCountry { .. })
    }

    /// Returns true for the provider-unavailable condition.
    pub fn is_provider_unavailable(&self) -> bool {
        matches!(self, Self::ProviderUnavailable { .. })
    }
}

/// A specialized Result type for insight operations.
pub type InsightResult<T> = Result<T, InsightError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_country_displays_message() {
        let err = InsightError::invalid_country("invalid country code 'XX'");
        assert!(err.is_invalid_country());
        assert_eq!(format!("{}", err), "invalid country code 'XX'");
    }

    #[test]
    fn unavailable_keeps_the_provider_error_as_source() {
        let err = InsightError::unavailable(ProviderError::server("502 from upstream"));
        assert!(err.is_provider_unavailable());
        let source = err.source().expect("source set");
        assert!(source.to_string().contains("502 from upstream"));
    }
}
