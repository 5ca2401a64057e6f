//! Game backend API client.
//!
//! [`GameClient`] wraps every backend endpoint with typed requests and
//! responses. Non-success answers become [`crate::error::NetworkError`]
//! carrying the backend's `detail` message; the turn stream is handed to
//! [`crate::sse::consume`].

mod client;
mod game;
mod player;
mod world;

pub use client::{GameClient, DEFAULT_API_URL};
