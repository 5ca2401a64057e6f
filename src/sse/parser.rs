//! Line splitting and the two-state frame parser.

use serde_json::Value;
use tracing::{debug, warn};

use super::decoder::Utf8Decoder;
use super::events::{parse_sse_line, EventFrame, SseLine, DEFAULT_EVENT};
use crate::error::StreamError;

/// Parser state between lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParserState {
    /// No `event:` line is pending; a `data:` line dispatches as "message".
    #[default]
    AwaitingEventName,
    /// The previous line was `event:`; a `data:` line right after it
    /// belongs to that event.
    AwaitingData { event: String },
}

/// Turns raw stream chunks into [`EventFrame`]s.
///
/// One parser serves one stream. Text that has not yet reached a newline
/// stays buffered until the next chunk completes it.
#[derive(Debug, Default)]
pub struct LineParser {
    decoder: Utf8Decoder,
    buffer: String,
    state: ParserState,
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a network chunk and collect every frame completed by it.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<EventFrame>, StreamError> {
        if chunk.is_empty() {
            return Ok(Vec::new());
        }

        let text = self.decoder.decode(chunk)?;
        self.buffer.push_str(&text);

        let Some(last_newline) = self.buffer.rfind('\n') else {
            return Ok(Vec::new());
        };

        let rest = self.buffer.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.buffer, rest);

        Ok(complete
            .lines()
            .filter_map(|line| self.feed_line(line))
            .collect())
    }

    /// End of stream: the trailing fragment, if any, is handled as a last line.
    pub fn finish(&mut self) -> Vec<EventFrame> {
        let dropped = self.decoder.finish();
        if dropped > 0 {
            warn!(bytes = dropped, "Stream ended inside a UTF-8 character");
        }

        let tail = std::mem::take(&mut self.buffer);
        let tail = tail.strip_suffix('\r').unwrap_or(&tail);
        if tail.is_empty() {
            return Vec::new();
        }
        self.feed_line(tail).into_iter().collect()
    }

    /// Process one complete line.
    pub fn feed_line(&mut self, line: &str) -> Option<EventFrame> {
        match parse_sse_line(line) {
            SseLine::Event(name) => {
                let event = if name.is_empty() {
                    DEFAULT_EVENT.to_string()
                } else {
                    name
                };
                self.state = ParserState::AwaitingData { event };
                None
            }
            SseLine::Data(data) => match serde_json::from_str::<Value>(&data) {
                Ok(payload) => {
                    let event_type = match std::mem::take(&mut self.state) {
                        ParserState::AwaitingData { event } => event,
                        ParserState::AwaitingEventName => DEFAULT_EVENT.to_string(),
                    };
                    Some(EventFrame::new(event_type, payload))
                }
                Err(e) => {
                    debug!(
                        event_type = self.current_event_type(),
                        error = %e,
                        "Skipping unparseable data line"
                    );
                    None
                }
            },
            // Only a `data:` line directly after `event:` inherits the name.
            SseLine::Empty | SseLine::Comment(_) => {
                self.state = ParserState::AwaitingEventName;
                None
            }
        }
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Event name the next parsed `data:` line would dispatch under.
    pub fn current_event_type(&self) -> &str {
        match &self.state {
            ParserState::AwaitingData { event } => event,
            ParserState::AwaitingEventName => DEFAULT_EVENT,
        }
    }

    /// Text received after the last newline.
    pub fn pending(&self) -> &str {
        &self.buffer
    }
}
