//! Trait abstractions at the I/O seams.
//!
//! - [`HttpClient`] - GET/POST/DELETE and streaming POST against the backend
//! - [`SessionStore`] - persistence of the active character

pub mod http;
pub mod session;

pub use http::{ByteStream, Headers, HttpClient, HttpError, Response};
pub use session::SessionStore;
