//! Shared request plumbing for [`GameClient`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::NetworkError;
use crate::traits::{Headers, HttpClient, Response};

/// Default backend address.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Typed client for the game backend.
///
/// Endpoint methods live in the sibling `player`, `game` and `world`
/// modules. Clones share the underlying HTTP client.
#[derive(Clone)]
pub struct GameClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl GameClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &dyn HttpClient {
        self.http.as_ref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `path?player_id=..&player_input=..` with the input URL-encoded.
    pub(crate) fn turn_url(&self, path: &str, player_id: i64, player_input: &str) -> String {
        format!(
            "{}?player_id={}&player_input={}",
            self.url(path),
            player_id,
            urlencoding::encode(player_input)
        )
    }

    pub(crate) fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    pub(crate) async fn get_raw(&self, url: &str) -> Result<Response, NetworkError> {
        debug!(url, "GET");
        self.http
            .get(url, &Headers::new())
            .await
            .map_err(|e| NetworkError::from_http(e, url))
    }

    pub(crate) async fn post_raw(&self, url: &str, body: &str) -> Result<Response, NetworkError> {
        debug!(url, "POST");
        self.http
            .post(url, body, &Self::json_headers())
            .await
            .map_err(|e| NetworkError::from_http(e, url))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, NetworkError> {
        let response = self.get_raw(&self.url(path)).await?;
        decode(&response)
    }

    pub(crate) async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, NetworkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| NetworkError::Other {
            message: e.to_string(),
        })?;
        let response = self.post_raw(url, &body).await?;
        decode(&response)
    }
}

impl std::fmt::Debug for GameClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Check the status and parse the body.
pub(crate) fn decode<T: DeserializeOwned>(response: &Response) -> Result<T, NetworkError> {
    if !response.is_success() {
        return Err(status_error(response));
    }
    response.json().map_err(|e| NetworkError::InvalidResponse {
        message: e.to_string(),
    })
}

/// Non-2xx response as [`NetworkError::HttpStatus`] carrying the backend
/// `detail` when there is one.
pub(crate) fn status_error(response: &Response) -> NetworkError {
    NetworkError::HttpStatus {
        status: response.status,
        message: response.detail(),
    }
}
