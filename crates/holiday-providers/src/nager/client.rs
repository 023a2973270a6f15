//! Nager.Date API client.
//!
//! This module provides a low-level HTTP client for the Nager.Date v3 API,
//! handling request building, status-code classification, and response
//! parsing.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use holiday_core::{Country, PublicHoliday};

use crate::error::{ProviderError, ProviderResult};
use crate::provider::{BoxFuture, HolidayProvider};

/// Nager.Date API client.
#[derive(Debug, Clone)]
pub struct NagerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl NagerClient {
    /// Creates a new Nager.Date client.
    ///
    /// `base_url` is the API root without a trailing slash (see
    /// [`DEFAULT_BASE_URL`](super::DEFAULT_BASE_URL)). The timeouts bound
    /// connection establishment and the whole request respectively.
    pub fn new(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Self {
        let http_client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the list of countries with available holiday data.
    async fn available_countries(&self) -> ProviderResult<Vec<Country>> {
        let url = format!("{}/AvailableCountries", self.base_url);
        let body = self.get_success_body(&url).await?;

        let countries: Vec<ApiCountry> = serde_json::from_str(&body).map_err(|e| {
            ProviderError::invalid_response(format!("failed to parse country list: {}", e))
        })?;

        debug!("fetched {} available countries", countries.len());
        Ok(countries.into_iter().map(Country::from).collect())
    }

    /// Fetches the public holidays of one country for one year.
    async fn public_holidays(&self, year: i32, country_code: &str) -> ProviderResult<Vec<PublicHoliday>> {
        let url = format!("{}/PublicHolidays/{}/{}", self.base_url, year, country_code);
        let body = self.get_success_body(&url).await?;

        let holidays: Vec<ApiHoliday> = serde_json::from_str(&body).map_err(|e| {
            ProviderError::invalid_response(format!("failed to parse holiday list: {}", e))
        })?;

        debug!(
            "fetched {} holidays for {} in {}",
            holidays.len(),
            country_code,
            year
        );
        Ok(holidays.into_iter().map(PublicHoliday::from).collect())
    }

    /// Issues a GET request and returns the body of a successful response,
    /// classifying transport failures and non-2xx statuses.
    async fn get_success_body(&self, url: &str) -> ProviderResult<String> {
        let response = self.http_client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::network("request timeout")
            } else if e.is_connect() {
                ProviderError::network(format!("connection failed: {}", e))
            } else {
                ProviderError::network(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();

        // Handle rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(ProviderError::rate_limited(format!(
                "rate limit exceeded{}",
                retry_after
                    .map(|s| format!(", retry after {} seconds", s))
                    .unwrap_or_default()
            )));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::not_found(format!("no data at {}", url)));
        }

        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::bad_request(format!(
                "API rejected request ({}): {}",
                status, body
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::server(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read response: {}", e)))
    }
}

impl HolidayProvider for NagerClient {
    fn name(&self) -> &str {
        "nager"
    }

    fn fetch_countries(&self) -> BoxFuture<'_, ProviderResult<Vec<Country>>> {
        Box::pin(async move {
            self.available_countries()
                .await
                .map_err(|e| e.with_provider("nager"))
        })
    }

    fn fetch_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> BoxFuture<'_, ProviderResult<Vec<PublicHoliday>>> {
        let country_code = country_code.to_string();
        Box::pin(async move {
            self.public_holidays(year, &country_code)
                .await
                .map_err(|e| e.with_provider("nager"))
        })
    }
}

/// A country entry from the AvailableCountries endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCountry {
    country_code: String,
    name: String,
}

impl From<ApiCountry> for Country {
    fn from(api: ApiCountry) -> Self {
        Country::new(api.country_code, api.name)
    }
}

/// A holiday entry from the PublicHolidays endpoint.
///
/// Only `date`, `localName` and `name` are carried into the domain type;
/// the rest is modelled so the shape is documented but is otherwise
/// ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiHoliday {
    date: NaiveDate,
    local_name: String,
    name: String,
    country_code: Option<String>,
    fixed: Option<bool>,
    global: Option<bool>,
    counties: Option<Vec<String>>,
    launch_year: Option<i32>,
    types: Option<Vec<String>>,
}

impl From<ApiHoliday> for PublicHoliday {
    fn from(api: ApiHoliday) -> Self {
        PublicHoliday::new(api.date, api.local_name, api.name)
    }
}
