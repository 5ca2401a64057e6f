//! Result type alias and context helpers.

use super::context::ErrorContext;
use super::game_error::GameError;

/// Type alias for Results using [`GameError`].
pub type GameResult<T> = Result<T, GameError>;

/// Extension trait for attaching [`ErrorContext`] to failing results.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> GameResult<T>;

    /// Add context using a closure, only called on error.
    fn with_context<F>(self, f: F) -> GameResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<GameError>,
{
    fn context(self, ctx: ErrorContext) -> GameResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> GameResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
