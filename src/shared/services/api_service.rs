use crate::domain::models::SearchRecord;
use crate::shared::errors::FetchError;
use crate::shared::logging;
use async_trait::async_trait;
use serde_json::Value;

/// Minimal HTTP seam: one GET that yields parsed JSON
///
/// Any non-2xx status is a failure and the body is not inspected.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwasmClient;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpClient for ReqwasmClient {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        use reqwasm::http::Request;

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HttpClient for ReqwestClient {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformHttpClient = ReqwasmClient;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformHttpClient = ReqwestClient;

/// Validate a history payload against the `SearchRecord` schema
///
/// Anything that is not an array of well-formed records becomes an empty list.
pub fn normalize_payload(payload: Value) -> Vec<SearchRecord> {
    if !payload.is_array() {
        logging::log_payload_normalized("payload is not an array");
        return Vec::new();
    }

    match serde_json::from_value::<Vec<SearchRecord>>(payload) {
        Ok(records) => records,
        Err(e) => {
            logging::log_payload_normalized(&e.to_string());
            Vec::new()
        }
    }
}

// API Service for the history endpoint
pub struct ApiService<C: HttpClient> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> ApiService<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn past_searches_url(&self, user_id: &str) -> String {
        format!(
            "{}/api/user-update/{}/past-searches",
            self.base_url,
            urlencoding::encode(user_id)
        )
    }

    pub async fn get_past_searches(&self, user_id: &str) -> Result<Vec<SearchRecord>, FetchError> {
        let url = self.past_searches_url(user_id);
        logging::log_fetch_start(&url);

        let payload = self.client.get_json(&url).await?;
        let records = normalize_payload(payload);
        logging::log_fetch_success(records.len());
        Ok(records)
    }
}
