//! HTTP API client.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP client for JSON resources, relative to an optional base URL.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            // Same-origin requests on the web
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Make a GET request and decode the body as JSON
    ///
    /// A non-2xx status is only reported when the body does not decode.
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let url = self.url(path);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        // The status only matters when the body is unusable
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(_) if !is_success => Err(ApiError::Http { status, body: text }),
            Err(e) => Err(ApiError::Deserialize(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_stay_relative_without_base() {
        let client = ApiClient::new();
        assert_eq!(client.url("/mocks/messages.json"), "/mocks/messages.json");
        assert_eq!(client.url("mocks/messages.json"), "/mocks/messages.json");
    }

    #[test]
    fn paths_join_base_url_once() {
        let client = ApiClient::new().with_base_url("http://localhost:8080/");
        assert_eq!(
            client.url("/mocks/messages.json"),
            "http://localhost:8080/mocks/messages.json"
        );
    }

    #[test]
    fn absolute_urls_ignore_base() {
        let client = ApiClient::new().with_base_url("http://localhost:8080");
        assert_eq!(
            client.url("https://cdn.example.com/x.json"),
            "https://cdn.example.com/x.json"
        );
    }
}
