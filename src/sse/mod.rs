//! Turn event stream (Server-Sent Events) consumer
//!
//! The backend streams a turn as SSE frames:
//! - `event: <type>` - names the next payload
//! - `data: <json>` - payload line, dispatched as soon as it parses
//! - Empty line - ends the frame
//! - Lines starting with `:` - comments (ignored)
//!
//! # Module structure
//! - `decoder` - incremental UTF-8 decoding of network chunks
//! - `parser` - line splitting and the two-state frame parser
//! - `events` - line classification, raw frames, typed [`ActionEvent`]
//! - `payloads` - per-event payload structs
//! - `consumer` - callback table and the async [`consume`] loop

mod consumer;
mod decoder;
mod events;
mod parser;
mod payloads;

pub use consumer::{consume, ActionCallbacks, ActionConsumer, ConsumeOutcome, ConsumeStatus};
pub use decoder::Utf8Decoder;
pub use events::{parse_sse_line, ActionEvent, EventFrame, SseLine, DEFAULT_EVENT};
pub use parser::{LineParser, ParserState};
pub use payloads::{
    BackendFailure, ExecutorUpdate, NarratorChunk, PlannerUpdate, TurnComplete, ValidatorUpdate,
};
