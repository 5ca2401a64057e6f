//! Error handling for the Triluna client.
//!
//! - **Categories**: coarse classification used for hint text
//! - **Domain errors**: [`NetworkError`], [`StreamError`], [`SessionError`]
//! - **Unified error**: [`GameError`] with [`GameResult`]
//! - **Context**: [`ErrorContext`] attached via [`ResultExt`]
//!
//! | Category | Examples | Worth resubmitting |
//! |----------|----------|--------------------|
//! | Network | backend down, connection dropped | Yes |
//! | Server | 5xx, `error` event mid-turn | Yes |
//! | Client | invalid UTF-8, unexpected JSON shape | No |
//! | User | no character selected, 404 | No |
//! | System | session file unwritable | No |
//! | Configuration | bad API URL | No |
//!
//! Nothing in the client retries on its own.

mod category;
mod context;
mod game_error;
mod network;
mod result;
mod session;
mod stream;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use game_error::GameError;
pub use network::NetworkError;
pub use result::{GameResult, ResultExt};
pub use session::SessionError;
pub use stream::StreamError;
