//! HTTP transport for the metro API
//!
//! A thin reqwest wrapper: bearer auth, one method per verb, and a unified
//! response handler that converts non-success statuses and error envelopes
//! into [`ClientError`]. Repositories never touch reqwest directly.

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Unwrap the data field of a success envelope
///
/// A non-success code becomes an API error; a success envelope with no body
/// is treated as absent required data.
pub fn unwrap_data<T>(resp: ApiResponse<T>) -> ClientResult<T> {
    if !resp.is_success() {
        return Err(ClientError::Api {
            code: resp.code,
            message: resp.message,
        });
    }
    resp.data
        .ok_or_else(|| ClientError::MissingData("Response body is empty".into()))
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    /// Replace the bearer token used for subsequent requests
    fn set_token(&self, token: Option<String>);
    fn token(&self) -> Option<String>;

    /// GET an endpoint and unwrap its response envelope
    async fn get_data<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let resp: ApiResponse<T> = self.get(path).await?;
        unwrap_data(resp)
    }

    /// POST an endpoint and unwrap its response envelope
    async fn post_data<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let resp: ApiResponse<T> = self.post(path, body).await?;
        unwrap_data(resp)
    }

    /// PUT an endpoint and unwrap its response envelope
    async fn put_data<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let resp: ApiResponse<T> = self.put(path, body).await?;
        unwrap_data(resp)
    }
}

/// Network HTTP client
#[derive(Debug)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_timeout(base_url, 30)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Build a client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = Self::with_timeout(&config.base_url, config.timeout)?;
        client.set_token(config.token.clone());
        Ok(client)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            // Prefer the API error envelope when the server sent one
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<()>>(&text) {
                tracing::debug!(code = %envelope.code, status = %status, "API error response");
                return Err(ClientError::Api {
                    code: envelope.code,
                    message: envelope.message,
                });
            }
            // Fall back to status-based mapping
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::BAD_REQUEST => Err(ClientError::MissingData(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut req = self.client.get(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut req = self.client.post(&url).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut req = self.client.post(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut req = self.client.put(&url).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut req = self.client.delete(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }
}
