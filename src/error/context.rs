//! Context attached to errors for log lines.

use chrono::{DateTime, Utc};
use std::fmt;

/// Where and when an error happened.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Operation that failed, e.g. `load_player`.
    pub operation: String,

    /// Character the operation was acting for.
    pub player_id: Option<i64>,

    /// When the error was recorded.
    pub timestamp: DateTime<Utc>,

    /// Turn correlation id, shared with the tracing span of the turn.
    pub correlation_id: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            player_id: None,
            timestamp: Utc::now(),
            correlation_id: None,
        }
    }

    pub fn with_player_id(mut self, player_id: i64) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation={}", self.operation)?;
        if let Some(id) = self.player_id {
            write!(f, " player_id={}", id)?;
        }
        if let Some(ref cid) = self.correlation_id {
            write!(f, " correlation_id={}", cid)?;
        }
        Ok(())
    }
}
