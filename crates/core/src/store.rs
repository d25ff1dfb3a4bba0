use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::cache;
use crate::defaults;
use crate::paths;
use crate::settings::{self, Settings, SettingsError};
use crate::types::AppConfig;
use crate::validate::{self, ValidationError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Single source of truth for the endpoint URL, the response cache, and the
/// built-in default configuration. One instance per process, constructed in
/// `main` and passed by reference to whoever needs it.
#[derive(Debug)]
pub struct ConfigStore {
    settings_path: PathBuf,
    cache_dir: PathBuf,
    cache_ttl: Duration,
    endpoint_url: String,
}

impl ConfigStore {
    /// Open the store at the default platform locations.
    pub fn open() -> Result<Self, SettingsError> {
        Self::at(
            paths::default_settings_path(),
            paths::default_cache_dir(),
            cache::default_cache_ttl(),
        )
    }

    /// Open the store at explicit locations. The persisted endpoint URL is
    /// loaded here; a missing or empty settings file means "unconfigured".
    pub fn at(
        settings_path: PathBuf,
        cache_dir: PathBuf,
        cache_ttl: Duration,
    ) -> Result<Self, SettingsError> {
        let endpoint_url = settings::read_settings_from(&settings_path)?
            .map(|settings| settings.endpoint_url)
            .unwrap_or_default();

        Ok(Self {
            settings_path,
            cache_dir,
            cache_ttl,
            endpoint_url,
        })
    }

    /// Current endpoint URL; empty when unconfigured.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Validate, persist, and adopt a new endpoint URL. Cached responses are
    /// endpoint-specific, so the whole cache is dropped on success. On
    /// failure nothing is persisted and the previous URL stays in effect.
    pub fn set_endpoint_url(&mut self, url: &str) -> Result<(), StoreError> {
        validate::validate_endpoint_url(url)?;

        let url = url.trim().to_string();
        settings::write_settings_to(
            &self.settings_path,
            &Settings {
                endpoint_url: url.clone(),
            },
        )?;
        let _ = self.clear_cache();
        self.endpoint_url = url;
        Ok(())
    }

    /// Replace the endpoint for this process only: nothing is validated or
    /// persisted. Backs the CLI's `--endpoint-url` flag.
    pub fn override_endpoint_url(&mut self, url: String) {
        self.endpoint_url = url.trim().to_string();
    }

    /// Cached value for `key`, if present and younger than the TTL. Expired
    /// entries are evicted on the way out.
    pub fn cached(&self, key: &str) -> Option<Value> {
        let text = cache::read_cache_text(&self.cache_dir, key, self.cache_ttl).ok()??;
        serde_json::from_str(&text).ok()
    }

    /// Store a value under `key`, stamped with the current time.
    pub fn store_cached(&self, key: &str, value: &Value) -> io::Result<()> {
        cache::write_cache_text(&self.cache_dir, key, &value.to_string())
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) -> io::Result<()> {
        cache::clear_cache(&self.cache_dir)
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// The compiled-in configuration document used when the remote one is
    /// unavailable.
    pub fn default_app_config(&self) -> AppConfig {
        defaults::default_app_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const VALID_URL: &str = "https://script.google.com/macros/s/AKfycbx123/exec";
    const LONG_TTL: Duration = Duration::from_secs(300);

    fn temp_store(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::at(
            dir.path().join("settings.json"),
            dir.path().join("cache"),
            LONG_TTL,
        )
        .unwrap()
    }

    #[test]
    fn fresh_store_is_unconfigured() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        assert_eq!(store.endpoint_url(), "");
    }

    #[test]
    fn set_endpoint_url_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.set_endpoint_url(VALID_URL).unwrap();
        assert_eq!(store.endpoint_url(), VALID_URL);

        let reopened = temp_store(&dir);
        assert_eq!(reopened.endpoint_url(), VALID_URL);
    }

    #[test]
    fn invalid_url_is_rejected_and_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = temp_store(&dir);

        for bad in [
            "not a url",
            "https://example.com/macros/s/abc/exec",
            "https://script.google.com/other/abc/exec",
            "https://script.google.com/macros/s/abc/dev",
        ] {
            assert!(matches!(
                store.set_endpoint_url(bad),
                Err(StoreError::Invalid(_))
            ));
        }

        assert_eq!(store.endpoint_url(), "");
        assert!(!dir.path().join("settings.json").exists());
        let reopened = temp_store(&dir);
        assert_eq!(reopened.endpoint_url(), "");
    }

    #[test]
    fn changing_endpoint_clears_cache() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.store_cached("app-config.json", &json!({"a": 1})).unwrap();
        store.store_cached("other.json", &json!([1, 2])).unwrap();

        store.set_endpoint_url(VALID_URL).unwrap();
        assert!(store.cached("app-config.json").is_none());
        assert!(store.cached("other.json").is_none());
    }

    #[test]
    fn cached_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let value = json!({"branding": {"brandName": "Acme"}});

        store.store_cached("app-config.json", &value).unwrap();
        assert_eq!(store.cached("app-config.json"), Some(value));
    }

    #[test]
    fn expired_entry_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(
            dir.path().join("settings.json"),
            dir.path().join("cache"),
            Duration::ZERO,
        )
        .unwrap();

        store.store_cached("app-config.json", &json!(1)).unwrap();
        assert!(store.cached("app-config.json").is_none());
    }

    #[test]
    fn override_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = temp_store(&dir);
        store.override_endpoint_url("http://127.0.0.1:9".to_string());
        assert_eq!(store.endpoint_url(), "http://127.0.0.1:9");

        let reopened = temp_store(&dir);
        assert_eq!(reopened.endpoint_url(), "");
    }
}
