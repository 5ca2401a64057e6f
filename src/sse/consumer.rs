//! Drives a turn stream into typed callbacks.

use futures_util::StreamExt;
use tracing::{debug, info, warn};

use super::events::{ActionEvent, EventFrame};
use super::parser::LineParser;
use super::payloads::{ExecutorUpdate, NarratorChunk, PlannerUpdate, TurnComplete, ValidatorUpdate};
use crate::error::StreamError;
use crate::traits::{ByteStream, HttpError};

type Handler<T> = Box<dyn FnMut(T) + Send>;

/// Optional handlers, one per known event.
///
/// Missing handlers make their events no-ops. `on_error` receives transport
/// and decode failures as well as backend `error` events, and fires at most
/// once per stream.
#[derive(Default)]
pub struct ActionCallbacks {
    on_narrator_chunk: Option<Handler<NarratorChunk>>,
    on_planner: Option<Handler<PlannerUpdate>>,
    on_executor: Option<Handler<ExecutorUpdate>>,
    on_validator: Option<Handler<ValidatorUpdate>>,
    on_done: Option<Handler<TurnComplete>>,
    on_error: Option<Handler<StreamError>>,
}

impl ActionCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_narrator_chunk(mut self, f: impl FnMut(NarratorChunk) + Send + 'static) -> Self {
        self.on_narrator_chunk = Some(Box::new(f));
        self
    }

    pub fn on_planner(mut self, f: impl FnMut(PlannerUpdate) + Send + 'static) -> Self {
        self.on_planner = Some(Box::new(f));
        self
    }

    pub fn on_executor(mut self, f: impl FnMut(ExecutorUpdate) + Send + 'static) -> Self {
        self.on_executor = Some(Box::new(f));
        self
    }

    pub fn on_validator(mut self, f: impl FnMut(ValidatorUpdate) + Send + 'static) -> Self {
        self.on_validator = Some(Box::new(f));
        self
    }

    pub fn on_done(mut self, f: impl FnMut(TurnComplete) + Send + 'static) -> Self {
        self.on_done = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl FnMut(StreamError) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    fn call<T>(handler: &mut Option<Handler<T>>, value: T) {
        if let Some(handler) = handler {
            handler(value);
        }
    }
}

impl std::fmt::Debug for ActionCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionCallbacks")
            .field("on_narrator_chunk", &self.on_narrator_chunk.is_some())
            .field("on_planner", &self.on_planner.is_some())
            .field("on_executor", &self.on_executor.is_some())
            .field("on_validator", &self.on_validator.is_some())
            .field("on_done", &self.on_done.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// How a consume call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeStatus {
    /// The stream ended normally.
    Completed,
    /// An error was reported through `on_error`.
    Failed,
}

/// Summary of a consume call, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumeOutcome {
    pub status: ConsumeStatus,
    /// Typed events handed to callbacks (including `error` events)
    pub dispatched: usize,
    /// Whether a `done` event was seen
    pub done_received: bool,
}

impl ConsumeOutcome {
    pub fn is_completed(&self) -> bool {
        self.status == ConsumeStatus::Completed
    }
}

/// Synchronous core of [`consume`]: chunks in, callbacks out.
pub struct ActionConsumer<'a> {
    parser: LineParser,
    callbacks: &'a mut ActionCallbacks,
    dispatched: usize,
    done_received: bool,
    error_reported: bool,
}

impl<'a> ActionConsumer<'a> {
    pub fn new(callbacks: &'a mut ActionCallbacks) -> Self {
        Self {
            parser: LineParser::new(),
            callbacks,
            dispatched: 0,
            done_received: false,
            error_reported: false,
        }
    }

    /// Feed one network chunk. A decode failure is reported and returned.
    pub fn process_chunk(&mut self, chunk: &[u8]) -> Result<(), StreamError> {
        match self.parser.feed(chunk) {
            Ok(frames) => {
                for frame in frames {
                    self.handle_frame(frame);
                }
                Ok(())
            }
            Err(e) => {
                self.report_error(e.clone());
                Err(e)
            }
        }
    }

    /// The stream ended; flush the trailing fragment.
    pub fn finish(mut self) -> ConsumeOutcome {
        for frame in self.parser.finish() {
            self.handle_frame(frame);
        }
        self.outcome()
    }

    /// Report a terminal error and summarize.
    pub fn fail(mut self, err: StreamError) -> ConsumeOutcome {
        self.report_error(err);
        self.outcome()
    }

    fn outcome(&self) -> ConsumeOutcome {
        ConsumeOutcome {
            status: if self.error_reported {
                ConsumeStatus::Failed
            } else {
                ConsumeStatus::Completed
            },
            dispatched: self.dispatched,
            done_received: self.done_received,
        }
    }

    fn handle_frame(&mut self, frame: EventFrame) {
        let event_type = frame.event_type.clone();
        match frame.into_action() {
            Ok(Some(event)) => self.dispatch(event),
            Ok(None) => debug!(event_type = %event_type, "Ignoring unhandled event"),
            Err(e) => debug!(error = %e, "Skipping malformed frame"),
        }
    }

    fn dispatch(&mut self, event: ActionEvent) {
        self.dispatched += 1;
        match event {
            ActionEvent::NarratorChunk(chunk) => {
                ActionCallbacks::call(&mut self.callbacks.on_narrator_chunk, chunk)
            }
            ActionEvent::Planner(update) => {
                ActionCallbacks::call(&mut self.callbacks.on_planner, update)
            }
            ActionEvent::Executor(update) => {
                ActionCallbacks::call(&mut self.callbacks.on_executor, update)
            }
            ActionEvent::Validator(update) => {
                ActionCallbacks::call(&mut self.callbacks.on_validator, update)
            }
            ActionEvent::Done(done) => {
                self.done_received = true;
                ActionCallbacks::call(&mut self.callbacks.on_done, done)
            }
            ActionEvent::Error(failure) => self.report_error(StreamError::Backend {
                message: failure.text(),
            }),
        }
    }

    fn report_error(&mut self, err: StreamError) {
        if self.error_reported {
            warn!(error = %err, "Suppressing additional stream error");
            return;
        }
        self.error_reported = true;
        warn!(code = err.error_code(), error = %err, "Turn stream failed");
        ActionCallbacks::call(&mut self.callbacks.on_error, err);
    }
}

/// Consume an opened (or failed-to-open) turn stream.
///
/// A failure to open, a transport error mid-stream and invalid UTF-8 are
/// all terminal: `on_error` fires once and reading stops. Data lines that are
/// not JSON, or do not fit their event, are skipped silently.
pub async fn consume(
    opened: Result<ByteStream, HttpError>,
    callbacks: &mut ActionCallbacks,
) -> ConsumeOutcome {
    let mut consumer = ActionConsumer::new(callbacks);

    let mut stream = match opened {
        Ok(stream) => stream,
        Err(e) => return consumer.fail(StreamError::from_open_error(e)),
    };

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => {
                if consumer.process_chunk(&bytes).is_err() {
                    return consumer.outcome();
                }
            }
            Err(e) => return consumer.fail(StreamError::from_read_error(e)),
        }
    }

    let outcome = consumer.finish();
    info!(
        dispatched = outcome.dispatched,
        done = outcome.done_received,
        "Turn stream ended"
    );
    outcome
}
