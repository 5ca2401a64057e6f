//! Common test utilities for integration tests.
//!
//! Fixtures for a game client backed by [`MockHttpClient`], an [`App`]
//! wired to it, and canned backend payloads.
//!
//! # Example
//!
//! ```ignore
//! let (mock, client) = test_client();
//! mock.set_response(&url("/player/list/all"), MockResponse::json(200, "[]"));
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use triluna::adapters::{InMemorySessionStore, MockHttpClient};
use triluna::api::GameClient;
use triluna::app::App;
use triluna::session::{SessionContext, StoredSession};

pub const BASE_URL: &str = "http://test";

/// Absolute mock URL for a backend path.
pub fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

/// A game client over a fresh mock. The returned mock shares state with
/// the client, so responses can be configured after construction.
pub fn test_client() -> (MockHttpClient, GameClient) {
    let mock = MockHttpClient::new();
    let client = GameClient::new(BASE_URL, Arc::new(mock.clone()));
    (mock, client)
}

/// Builder for App instances used by flow tests.
#[derive(Default)]
pub struct TestAppBuilder {
    session: Option<StoredSession>,
    blocking: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a stored active character.
    pub fn with_session(mut self, player_id: i64, name: &str) -> Self {
        self.session = Some(StoredSession::new(player_id, name));
        self
    }

    /// Use the blocking turn endpoint instead of the stream.
    pub fn blocking(mut self) -> Self {
        self.blocking = true;
        self
    }

    pub fn build(self) -> (MockHttpClient, InMemorySessionStore, App) {
        let (mock, client) = test_client();
        let store = match self.session {
            Some(session) => InMemorySessionStore::with_session(session),
            None => InMemorySessionStore::new(),
        };
        let session = SessionContext::new(Arc::new(store.clone()));
        let app = App::new(client, session, !self.blocking);
        (mock, store, app)
    }
}
