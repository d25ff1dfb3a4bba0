use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use ureq::Agent;

use crate::constants::{api, cache};
use crate::store::ConfigStore;
use crate::types::{AppConfig, EntriesResponse, Lead, SubmitResponse, TestResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no endpoint URL is configured")]
    EndpointNotSet,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("failed to parse response body: {0}")]
    Decode(String),
}

/// HTTP client for the Apps Script backend. The endpoint URL and the
/// response cache live in the [`ConfigStore`]; this type owns only the
/// transport agent.
pub struct ApiClient<'a> {
    agent: Agent,
    store: &'a ConfigStore,
}

impl<'a> ApiClient<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        // Non-2xx statuses come back as data, not transport errors; status
        // interpretation belongs to this client.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .new_agent();
        Self { agent, store }
    }

    pub fn has_endpoint(&self) -> bool {
        !self.store.endpoint_url().is_empty()
    }

    fn endpoint(&self) -> Result<&str, ApiError> {
        let url = self.store.endpoint_url();
        if url.is_empty() {
            return Err(ApiError::EndpointNotSet);
        }
        Ok(url)
    }

    /// `GET {endpoint}?action={action}&{k=v...}`, decoded as JSON.
    pub fn get(&self, action: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let endpoint = self.endpoint()?;
        let mut request = self.agent.get(endpoint).query(api::ACTION_PARAM, action);
        for (key, value) in params {
            request = request.query(*key, *value);
        }

        let response = request
            .call()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(response)
    }

    /// `POST {endpoint}` with a JSON body, decoded as JSON.
    pub fn post<T: Serialize>(&self, payload: &T) -> Result<Value, ApiError> {
        let endpoint = self.endpoint()?;
        let body =
            serde_json::to_string(payload).map_err(|err| ApiError::Encode(err.to_string()))?;

        let response = self
            .agent
            .post(endpoint)
            .content_type("application/json")
            .send(body.as_bytes())
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(response)
    }

    /// Submit a lead. Callers validate the lead before this point.
    pub fn submit_lead(&self, lead: &Lead) -> Result<SubmitResponse, ApiError> {
        let value = self.post(&lead.submit_payload())?;
        from_value(value)
    }

    /// The effective application configuration.
    ///
    /// A fresh cache entry is served without touching the network. On a miss
    /// the remote document is fetched and cached; on ANY failure (transport,
    /// status, decode) the compiled-in default is substituted instead of the
    /// error propagating — a missing remote config must never block the
    /// client from rendering.
    pub fn fetch_app_config(&self) -> AppConfig {
        if let Some(value) = self.store.cached(cache::APP_CONFIG_KEY) {
            if let Ok(config) = serde_json::from_value::<AppConfig>(value) {
                return config;
            }
        }

        match self.get(api::ACTION_GET_CONFIG, &[]) {
            Ok(value) => match serde_json::from_value::<AppConfig>(value.clone()) {
                Ok(config) => {
                    let _ = self.store.store_cached(cache::APP_CONFIG_KEY, &value);
                    config
                }
                Err(_) => self.store.default_app_config(),
            },
            Err(_) => self.store.default_app_config(),
        }
    }

    /// Previously submitted rows. Failures propagate unchanged.
    pub fn fetch_entries(&self) -> Result<EntriesResponse, ApiError> {
        let value = self.get(api::ACTION_GET_ENTRIES, &[])?;
        from_value(value)
    }

    /// Connectivity probe. Failures propagate unchanged.
    pub fn test_connection(&self) -> Result<TestResponse, ApiError> {
        let value = self.get(api::ACTION_TEST, &[])?;
        from_value(value)
    }
}

fn read_json(mut response: ureq::http::Response<ureq::Body>) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        });
    }

    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|err| ApiError::Network(err.to_string()))?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}
