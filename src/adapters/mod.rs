//! Concrete implementations of the trait seams.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileSessionStore`] - active character kept as a JSON file
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - configurable responses and byte streams
//! - [`mock::InMemorySessionStore`] - session persistence without disk

pub mod file_session;
pub mod mock;
pub mod reqwest_http;

pub use file_session::FileSessionStore;
pub use mock::{InMemorySessionStore, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
