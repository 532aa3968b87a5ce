//! Client configuration.

use crate::api_client::ApiClient;

/// Environment variable holding the origin that serves `/mocks/*` on desktop.
pub const API_BASE_URL_ENV: &str = "MESSENGER_API_BASE_URL";

const DEFAULT_NATIVE_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Empty means same-origin relative requests.
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Resolve configuration for the current platform.
    ///
    /// Environment variables (native only):
    /// - `MESSENGER_API_BASE_URL`: origin serving the mock resource (default: "http://localhost:8080")
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_base_url(std::env::var(API_BASE_URL_ENV).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::new("")
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    fn from_base_url(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_NATIVE_BASE_URL),
        }
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new().with_base_url(self.api_base_url.clone())
    }
}
