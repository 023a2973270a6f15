//! Resilient holiday data access and aggregation.
//!
//! This crate is the core of the holiday-insights service. It answers
//! three analytical questions about public holidays:
//!
//! - The most recent past holidays of a country
//! - How many non-weekend holidays each of several countries has in a year
//! - Which holidays two countries share in a year
//!
//! and stays correct and useful when the upstream provider is slow, flaky,
//! or briefly down: remote calls run under a retry policy, the country
//! registry serves a stale snapshot across failed refreshes, and holiday
//! fetches fall back to a last-known-good cache.
//!
//! Request routing, serialization of results, and status mapping are the
//! caller's concern; this crate only exposes the typed operations.
//!
//! # Example
//!
//! ```rust,no_run
//! use holiday_core::{TracingConfig, init_tracing};
//! use holiday_service::{InsightEngine, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_tracing(TracingConfig::default())?;
//!
//!     let engine = InsightEngine::from_config(&ServiceConfig::from_env());
//!     engine.initialize().await?;
//!
//!     let recent = engine.recent_holidays("NL").await?;
//!     let counts = engine.non_weekend_holiday_counts(2024, "NL,AU,DE").await;
//!     let common = engine.common_holidays(2024, "NL", "DE").await?;
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod insights;
mod registry;
mod store;

pub use config::ServiceConfig;
pub use error::{InsightError, InsightResult};
pub use insights::InsightEngine;
pub use registry::{CountryRegistry, CountrySnapshot};
pub use store::HolidayStore;
