//! HolidayProvider trait and implementations.
//!
//! This crate provides the abstraction layer for upstream holiday-data
//! sources:
//!
//! - [`HolidayProvider`] - The core trait remote holiday sources implement
//! - [`RetryPolicy`] - Fixed-delay retry wrapper for transient failures
//! - [`NagerClient`] - Client for the Nager.Date public holiday API
//! - [`ProviderError`] - Error types for provider operations
//!
//! # Example
//!
//! ```ignore
//! use holiday_providers::{HolidayProvider, NagerClient, RetryPolicy};
//!
//! async fn load(provider: &dyn HolidayProvider, retry: &RetryPolicy) {
//!     let countries = retry.run(|| provider.fetch_countries()).await?;
//! }
//! ```

pub mod error;
pub mod nager;
pub mod provider;
pub mod retry;

// Re-export main types at crate root
pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use nager::NagerClient;
pub use provider::{BoxFuture, ErrorProvider, HolidayProvider};
pub use retry::RetryPolicy;
