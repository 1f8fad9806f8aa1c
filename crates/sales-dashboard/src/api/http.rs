//! HTTP client abstraction
//! Uses gloo-net in the browser; tests plug in a scripted client

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a backend call produced no usable data
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// GET a URL and decode its JSON body
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>;
}

/// Browser `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooClient;

impl HttpClient for GlooClient {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = gloo_net::http::Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response.json().await.map_err(|e| FetchError::Decode(e.to_string()))
    }
}
