//! Transport seam between the game client and the backend.
//!
//! [`crate::api::GameClient`] only talks HTTP through [`HttpClient`], so every
//! endpoint and the turn stream run unchanged against
//! [`crate::adapters::MockHttpClient`] in tests.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::collections::HashMap;
use std::pin::Pin;
use thiserror::Error;

/// Request headers.
pub type Headers = HashMap<String, String>;

/// Body of an open turn stream, chunked as the network delivers it.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, HttpError>> + Send>>;

/// A fully read response. Any status is represented; the caller decides
/// what a non-2xx means.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response carrying a JSON text body.
    pub fn json_body(status: u16, json: &str) -> Self {
        Self::new(status, json.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The `detail` field of a backend error body, or an empty string.
    ///
    /// Validation errors carry a list instead of a string; it is kept as
    /// its JSON text.
    pub fn detail(&self) -> String {
        let Ok(body) = self.json::<serde_json::Value>() else {
            return String::new();
        };
        match body.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// Transport-level failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    #[error("could not connect: {0}")]
    ConnectionFailed(String),

    #[error("timed out: {0}")]
    Timeout(String),

    /// Non-2xx status on a stream request; the body is the message.
    #[error("stream refused with HTTP {status}: {message}")]
    ServerError { status: u16, message: String },

    /// The connection broke while a body was being read.
    #[error("read failed: {0}")]
    Io(String),

    #[error("invalid request: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Other(String),
}

/// Backend transport.
///
/// `get`, `post` and `delete` read the whole body. `post_stream` hands the
/// body back as it arrives and refuses non-2xx statuses before the first
/// byte, so an error page is never parsed as turn events.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// POST with a string body, possibly empty.
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// POST and return the response body as a byte stream.
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<ByteStream, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(204, Bytes::new()).is_success());
        assert!(!Response::new(302, Bytes::new()).is_success());
        assert!(!Response::new(404, Bytes::new()).is_success());
    }

    #[test]
    fn test_json_body() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Observe {
            description: String,
        }

        let response = Response::json_body(200, r#"{"description":"Um velho monge."}"#);
        let data: Observe = response.json().unwrap();
        assert_eq!(data.description, "Um velho monge.");
    }

    #[test]
    fn test_text_is_lossy() {
        let response = Response::new(200, Bytes::from_static(&[b'o', b'k', 0xff]));
        assert_eq!(response.text(), "ok\u{fffd}");
    }

    #[test]
    fn test_detail() {
        let plain = Response::json_body(404, r#"{"detail":"Player not found"}"#);
        assert_eq!(plain.detail(), "Player not found");

        let listed = Response::json_body(422, r#"{"detail":[{"loc":["query","name"]}]}"#);
        assert_eq!(listed.detail(), r#"[{"loc":["query","name"]}]"#);

        assert_eq!(Response::new(502, "Bad Gateway").detail(), "");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            HttpError::ServerError {
                status: 503,
                message: "busy".to_string()
            }
            .to_string(),
            "stream refused with HTTP 503: busy"
        );
        assert_eq!(
            HttpError::Io("reset".to_string()).to_string(),
            "read failed: reset"
        );
    }
}
