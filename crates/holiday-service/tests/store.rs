//! Holiday store behavior: validation, caching, stale fallback.

mod common;

use std::sync::Arc;
use std::time::Duration;

use holiday_providers::{HolidayProvider, ProviderErrorCode, RetryPolicy};
use holiday_service::{CountryRegistry, HolidayStore};

use common::{ScriptedProvider, holiday};

/// Builds a store over an already-refreshed registry.
async fn store_with(provider: ScriptedProvider) -> (HolidayStore, Arc<ScriptedProvider>) {
    let provider = Arc::new(provider);
    let retry = RetryPolicy::new(1, Duration::ZERO);
    let registry = Arc::new(CountryRegistry::new(
        Arc::clone(&provider) as Arc<dyn HolidayProvider>,
        retry.clone(),
    ));
    registry.refresh().await.expect("registry refresh");
    let store = HolidayStore::new(
        Arc::clone(&provider) as Arc<dyn HolidayProvider>,
        registry,
        retry,
    );
    (store, provider)
}

fn default_countries() -> ScriptedProvider {
    ScriptedProvider::new(&[("AU", "Australia"), ("NL", "Netherlands")])
}

#[tokio::test]
async fn successful_fetch_is_returned_and_cached() {
    let list = vec![holiday("2024-01-01", "New Year's Day", "New Year's Day")];
    let (store, provider) = store_with(default_countries().holidays_ok(2024, "AU", list.clone())).await;

    let first = store.holidays(2024, "AU").await.unwrap();
    let second = store.holidays(2024, "AU").await.unwrap();
    assert_eq!(*first, list);
    assert_eq!(*second, list);
    // Fresh data is fetched every time; the cache only serves fallbacks.
    assert_eq!(provider.holiday_calls().len(), 2);
}

#[tokio::test]
async fn cache_fallback_returns_the_last_successful_list() {
    let list = vec![
        holiday("2024-01-01", "Nieuwjaarsdag", "New Year's Day"),
        holiday("2024-04-27", "Koningsdag", "King's Day"),
    ];
    let (store, _) = store_with(default_countries().holidays_script(
        2024,
        "NL",
        vec![Ok(list.clone()), Err(ProviderErrorCode::NetworkError)],
    ))
    .await;

    let fresh = store.holidays(2024, "NL").await.unwrap();
    let stale = store.holidays(2024, "NL").await.unwrap();
    assert_eq!(*fresh, list);
    assert_eq!(*stale, list);
}

#[tokio::test]
async fn exhausted_fetch_without_cache_is_unavailable() {
    let (store, _) = store_with(
        default_countries().holidays_err(2024, "AU", ProviderErrorCode::ServerError),
    )
    .await;

    let err = store.holidays(2024, "AU").await.unwrap_err();
    assert!(err.is_provider_unavailable());
}

#[tokio::test]
async fn an_empty_cached_list_is_not_served_as_fallback() {
    let (store, _) = store_with(default_countries().holidays_script(
        2024,
        "AU",
        vec![Ok(Vec::new()), Err(ProviderErrorCode::NetworkError)],
    ))
    .await;

    let fresh = store.holidays(2024, "AU").await.unwrap();
    assert!(fresh.is_empty());

    let err = store.holidays(2024, "AU").await.unwrap_err();
    assert!(err.is_provider_unavailable());
}

#[tokio::test]
async fn newer_fetch_overwrites_the_cache_entry() {
    let first = vec![holiday("2024-01-01", "a", "First")];
    let second = vec![holiday("2024-01-01", "b", "Second")];
    let (store, _) = store_with(default_countries().holidays_script(
        2024,
        "AU",
        vec![
            Ok(first),
            Ok(second.clone()),
            Err(ProviderErrorCode::NetworkError),
        ],
    ))
    .await;

    store.holidays(2024, "AU").await.unwrap();
    store.holidays(2024, "AU").await.unwrap();
    let fallback = store.holidays(2024, "AU").await.unwrap();
    assert_eq!(*fallback, second);
}

#[tokio::test]
async fn unknown_country_is_rejected_with_samples_before_any_fetch() {
    let (store, provider) = store_with(default_countries()).await;

    let err = store.holidays(2024, "ZZ").await.unwrap_err();
    assert!(err.is_invalid_country());
    let message = err.to_string();
    assert!(message.contains("'ZZ'"));
    assert!(message.contains("AU"));
    assert!(provider.holiday_calls().is_empty());
}

#[tokio::test]
async fn country_code_is_normalized_before_fetch_and_caching() {
    let list = vec![holiday("2024-01-26", "Australia Day", "Australia Day")];
    let (store, provider) = store_with(default_countries().holidays_script(
        2024,
        "AU",
        vec![Ok(list.clone()), Err(ProviderErrorCode::NetworkError)],
    ))
    .await;

    let fresh = store.holidays(2024, " au ").await.unwrap();
    assert_eq!(*fresh, list);
    assert_eq!(provider.holiday_calls(), vec![(2024, "AU".to_string())]);

    // Fallback hits the same normalized key.
    let stale = store.holidays(2024, "Au").await.unwrap();
    assert_eq!(*stale, list);
}
