//! SSE lines, raw frames and typed turn events.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::payloads::{
    BackendFailure, ExecutorUpdate, NarratorChunk, PlannerUpdate, TurnComplete, ValidatorUpdate,
};
use crate::error::StreamError;

/// Event name used when no `event:` line applies.
pub const DEFAULT_EVENT: &str = "message";

/// A single classified SSE line.
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// `event: <name>`
    Event(String),
    /// `data: <payload>`
    Data(String),
    /// Blank line, the frame terminator
    Empty,
    /// `: comment`, or any line the client does not understand (`id:`,
    /// `retry:`). Like a blank line it ends a pending `event:`.
    Comment(String),
}

/// Classify one line (without its line terminator).
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(stripped) = line.strip_prefix(':') {
        return SseLine::Comment(stripped.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("event:") {
        return SseLine::Event(rest.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("data:") {
        return SseLine::Data(rest.trim().to_string());
    }

    SseLine::Comment(line.to_string())
}

/// An `(event name, JSON payload)` pair produced by a `data:` line.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFrame {
    pub event_type: String,
    pub payload: Value,
}

impl EventFrame {
    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
        }
    }

    /// Validate the payload against its event's schema.
    ///
    /// - `Ok(Some(event))` for a known event with a fitting payload
    /// - `Ok(None)` for event names the client does not handle
    /// - `Err(MalformedFrame)` when the payload does not fit
    pub fn into_action(self) -> Result<Option<ActionEvent>, StreamError> {
        let event = match self.event_type.as_str() {
            "narrator_chunk" => {
                ActionEvent::NarratorChunk(decode(&self.event_type, self.payload)?)
            }
            "planner" => ActionEvent::Planner(decode(&self.event_type, self.payload)?),
            "executor" => ActionEvent::Executor(decode(&self.event_type, self.payload)?),
            "validator" => ActionEvent::Validator(decode(&self.event_type, self.payload)?),
            "done" => ActionEvent::Done(decode(&self.event_type, self.payload)?),
            "error" => ActionEvent::Error(decode(&self.event_type, self.payload)?),
            _ => return Ok(None),
        };
        Ok(Some(event))
    }
}

fn decode<T: DeserializeOwned>(event_type: &str, payload: Value) -> Result<T, StreamError> {
    serde_json::from_value(payload).map_err(|e| StreamError::MalformedFrame {
        event_type: event_type.to_string(),
        message: e.to_string(),
    })
}

/// Typed events of the turn stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionEvent {
    NarratorChunk(NarratorChunk),
    Planner(PlannerUpdate),
    Executor(ExecutorUpdate),
    Validator(ValidatorUpdate),
    Done(TurnComplete),
    Error(BackendFailure),
}

impl ActionEvent {
    /// Wire name of the event.
    pub fn event_type_name(&self) -> &'static str {
        match self {
            ActionEvent::NarratorChunk(_) => "narrator_chunk",
            ActionEvent::Planner(_) => "planner",
            ActionEvent::Executor(_) => "executor",
            ActionEvent::Validator(_) => "validator",
            ActionEvent::Done(_) => "done",
            ActionEvent::Error(_) => "error",
        }
    }

    /// Whether the event ends the turn.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ActionEvent::Done(_) | ActionEvent::Error(_))
    }
}
