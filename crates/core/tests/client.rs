//! Client behavior against a live mock backend over real HTTP: round-trips,
//! the cache layer, and the fallback policy for the configuration read.

use std::time::Duration;

use leadsheet_core::constants::cache;
use leadsheet_core::defaults;
use leadsheet_core::{ApiClient, ApiError, ConfigStore, Lead};
use mock_backend::{app, spawn_app, static_response_app};
use tempfile::TempDir;

const LONG_TTL: Duration = Duration::from_secs(300);

fn store_for(endpoint: &str) -> (ConfigStore, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::at(
        dir.path().join("settings.json"),
        dir.path().join("cache"),
        LONG_TTL,
    )
    .unwrap();
    if !endpoint.is_empty() {
        store.override_endpoint_url(endpoint.to_string());
    }
    (store, dir)
}

/// An address with nothing listening on it.
fn refused_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn sample_lead() -> Lead {
    Lead {
        name: "Jane Doe".to_string(),
        phone: "010-1234-5678".to_string(),
        service: "Alpha automation".to_string(),
        contact_preference: "Email reply".to_string(),
        memo: "Afternoons preferred".to_string(),
    }
}

#[test]
fn test_probe_round_trip() {
    let addr = spawn_app(app()).unwrap();
    let (store, _dir) = store_for(&format!("http://{addr}"));
    let client = ApiClient::new(&store);

    let response = client.test_connection().unwrap();
    assert_eq!(response.status.as_deref(), Some("success"));
    assert_eq!(response.message.as_deref(), Some("API connection OK"));
}

#[test]
fn submit_then_entries_round_trip() {
    let addr = spawn_app(app()).unwrap();
    let (store, _dir) = store_for(&format!("http://{addr}"));
    let client = ApiClient::new(&store);

    let lead = sample_lead();
    let response = client.submit_lead(&lead).unwrap();
    assert!(response.is_success(), "unexpected envelope: {response:?}");

    let entries = client.fetch_entries().unwrap();
    assert_eq!(entries.rows.len(), 1);
    let row = &entries.rows[0];
    assert_eq!(row.name, lead.name);
    assert_eq!(row.phone, lead.phone);
    assert_eq!(row.service, lead.service);
    assert_eq!(row.contact_preference, lead.contact_preference);
    assert_eq!(row.memo, lead.memo);
    assert!(!row.timestamp.is_empty());
}

#[test]
fn backend_reports_incomplete_leads_in_the_envelope() {
    let addr = spawn_app(app()).unwrap();
    let (store, _dir) = store_for(&format!("http://{addr}"));
    let client = ApiClient::new(&store);

    let mut lead = sample_lead();
    lead.service = String::new();
    let response = client.submit_lead(&lead).unwrap();
    assert!(!response.is_success());
    assert!(response.error.as_deref().unwrap_or_default().contains("service"));
}

#[test]
fn fetch_app_config_caches_the_remote_document() {
    let addr = spawn_app(app()).unwrap();
    let (store, _dir) = store_for(&format!("http://{addr}"));
    let client = ApiClient::new(&store);

    let config = client.fetch_app_config();
    assert_eq!(config.branding.brand_name, "Mock Spreadsheet Automation");
    assert!(store.cached(cache::APP_CONFIG_KEY).is_some());
}

#[test]
fn fresh_cache_entry_is_served_without_a_reachable_server() {
    let addr = spawn_app(app()).unwrap();
    let (mut store, _dir) = store_for(&format!("http://{addr}"));

    let client = ApiClient::new(&store);
    let first = client.fetch_app_config();
    drop(client);

    // Same store, but nothing to talk to: the cached document must be
    // enough.
    store.override_endpoint_url(refused_endpoint());
    let client = ApiClient::new(&store);
    let second = client.fetch_app_config();
    assert_eq!(second, first);
    assert_ne!(second, defaults::default_app_config());
}

#[test]
fn config_falls_back_on_connection_refused() {
    let (store, _dir) = store_for(&refused_endpoint());
    let client = ApiClient::new(&store);
    assert_eq!(client.fetch_app_config(), defaults::default_app_config());
}

#[test]
fn config_falls_back_on_http_500() {
    let addr = spawn_app(static_response_app(500, "server exploded")).unwrap();
    let (store, _dir) = store_for(&format!("http://{addr}"));
    let client = ApiClient::new(&store);
    assert_eq!(client.fetch_app_config(), defaults::default_app_config());
}

#[test]
fn config_falls_back_on_malformed_json() {
    let addr = spawn_app(static_response_app(200, "this is not json")).unwrap();
    let (store, _dir) = store_for(&format!("http://{addr}"));
    let client = ApiClient::new(&store);
    assert_eq!(client.fetch_app_config(), defaults::default_app_config());
}

#[test]
fn failed_config_fetch_does_not_populate_the_cache() {
    let addr = spawn_app(static_response_app(500, "server exploded")).unwrap();
    let (store, _dir) = store_for(&format!("http://{addr}"));
    let client = ApiClient::new(&store);

    let _ = client.fetch_app_config();
    assert!(store.cached(cache::APP_CONFIG_KEY).is_none());
}

#[test]
fn entries_propagates_http_status() {
    let addr = spawn_app(static_response_app(500, "server exploded")).unwrap();
    let (store, _dir) = store_for(&format!("http://{addr}"));
    let client = ApiClient::new(&store);

    let err = client.fetch_entries().unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[test]
fn entries_propagates_decode_failure() {
    let addr = spawn_app(static_response_app(200, "this is not json")).unwrap();
    let (store, _dir) = store_for(&format!("http://{addr}"));
    let client = ApiClient::new(&store);

    let err = client.fetch_entries().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn test_probe_propagates_http_status() {
    let addr = spawn_app(static_response_app(503, "maintenance")).unwrap();
    let (store, _dir) = store_for(&format!("http://{addr}"));
    let client = ApiClient::new(&store);

    let err = client.test_connection().unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 503, .. }));
}

#[test]
fn unset_endpoint_fails_fast() {
    let (store, _dir) = store_for("");
    let client = ApiClient::new(&store);

    assert!(!client.has_endpoint());
    assert!(matches!(
        client.get("test", &[]),
        Err(ApiError::EndpointNotSet)
    ));
    assert!(matches!(
        client.test_connection(),
        Err(ApiError::EndpointNotSet)
    ));
    assert!(matches!(
        client.submit_lead(&sample_lead()),
        Err(ApiError::EndpointNotSet)
    ));
}
