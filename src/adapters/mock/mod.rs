//! Test doubles for the trait seams.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and streams
//! - [`InMemorySessionStore`] - session persistence without touching disk

pub mod http;
pub mod session;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use session::InMemorySessionStore;
