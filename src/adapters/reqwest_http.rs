//! Backend transport over `reqwest`.

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Method, RequestBuilder};
use std::time::Duration;

use crate::traits::{ByteStream, Headers, HttpClient, HttpError, Response};

/// [`HttpClient`] over a shared `reqwest::Client`.
///
/// The request timeout covers `get`, `post` and `delete`. A turn stream
/// stays open for as long as the backend's agents keep working, so
/// `post_stream` is never cut off by it.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    request_timeout: Option<Duration>,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    fn request(&self, method: Method, url: &str, headers: &Headers) -> RequestBuilder {
        headers
            .iter()
            .fold(self.client.request(method, url), |builder, (key, value)| {
                builder.header(key, value)
            })
    }

    /// Send with the request timeout and read the whole body.
    async fn fetch(&self, builder: RequestBuilder) -> Result<Response, HttpError> {
        let builder = match self.request_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        Ok(Response::new(status, body))
    }
}

fn transport_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else if err.is_connect() {
        HttpError::ConnectionFailed(err.to_string())
    } else if err.is_builder() {
        HttpError::InvalidUrl(err.to_string())
    } else {
        HttpError::Other(err.to_string())
    }
}

/// A failure after the stream opened is a lost connection.
fn stream_read_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else {
        HttpError::Io(err.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.fetch(self.request(Method::GET, url, headers)).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = self.request(Method::POST, url, headers).body(body.to_string());
        self.fetch(builder).await
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.fetch(self.request(Method::DELETE, url, headers)).await
    }

    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<ByteStream, HttpError> {
        let response = self
            .request(Method::POST, url, headers)
            .header("Accept", "text/event-stream")
            .body(body.to_string())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HttpError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Box::pin(
            response
                .bytes_stream()
                .map(|chunk| chunk.map_err(stream_read_error)),
        ))
    }
}
