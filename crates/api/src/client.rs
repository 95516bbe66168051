//! HTTP GET wrappers for the list-data endpoints.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{AppState, RequestRecord};

/// Base URL used when neither the environment nor the config names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable consulted by [`ApiClient::from_env`].
pub const BASE_URL_ENV: &str = "DASHKIT_API_URL";

/// Thin client over the two list-data GET endpoints.
///
/// Every successful call appends a [`RequestRecord`] to the caller-owned
/// [`AppState`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Client with the library's default transport settings.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client with a per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads the base URL from [`BASE_URL_ENV`], falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `/data` with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] on transport failures,
    /// [`ApiError::Status`] on non-success responses, and
    /// [`ApiError::Decode`] when the body is not valid JSON.
    pub async fn fetch_list<Q>(&self, query: &Q, state: &mut AppState) -> Result<Value, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        self.get_json("/data", query, state).await
    }

    /// GET `/data2` with the given query parameters.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::fetch_list`].
    pub async fn fetch_list2<Q>(&self, query: &Q, state: &mut AppState) -> Result<Value, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        self.get_json("/data2", query, state).await
    }

    async fn get_json<Q>(
        &self,
        path: &str,
        query: &Q,
        state: &mut AppState,
    ) -> Result<Value, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                url: final_url,
            });
        }
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode {
                url: final_url.clone(),
                reason: e.to_string(),
            })?;
        state.record(RequestRecord {
            url: final_url,
            method: "GET".to_string(),
            completed_ms: chrono::Utc::now().timestamp_millis(),
        });
        Ok(body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn default_base_url() {
        assert_eq!(ApiClient::default().base_url(), DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn connection_refusal_is_http_error() {
        // Port 9 (discard) is never serving here; the call must surface a
        // transport error, not panic, and must record nothing.
        let client = ApiClient::with_timeout("http://127.0.0.1:9", Duration::from_millis(200));
        let mut state = AppState::new();
        let result = client.fetch_list(&[("page", "1")], &mut state).await;
        assert!(matches!(result, Err(ApiError::Http(_))));
        assert!(state.requests().is_empty());
    }
}
