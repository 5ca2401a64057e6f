//! Stream fixtures and callback recorders.

use bytes::Bytes;
use std::sync::{Arc, Mutex};

use triluna::error::StreamError;
use triluna::sse::{
    ActionCallbacks, ExecutorUpdate, PlannerUpdate, TurnComplete, ValidatorUpdate,
};
use triluna::traits::{ByteStream, HttpError};

/// One callback invocation, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Narrator(String),
    Planner(PlannerUpdate),
    Executor(ExecutorUpdate),
    Validator(ValidatorUpdate),
    Done(TurnComplete),
    Error(StreamError),
}

impl Recorded {
    pub fn name(&self) -> &'static str {
        match self {
            Recorded::Narrator(_) => "narrator_chunk",
            Recorded::Planner(_) => "planner",
            Recorded::Executor(_) => "executor",
            Recorded::Validator(_) => "validator",
            Recorded::Done(_) => "done",
            Recorded::Error(_) => "error",
        }
    }
}

/// Shared log that every callback appends to.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback table with every handler registered.
    pub fn callbacks(&self) -> ActionCallbacks {
        let narrator = self.events.clone();
        let planner = self.events.clone();
        let executor = self.events.clone();
        let validator = self.events.clone();
        let done = self.events.clone();
        let error = self.events.clone();
        ActionCallbacks::new()
            .on_narrator_chunk(move |c| narrator.lock().unwrap().push(Recorded::Narrator(c.text)))
            .on_planner(move |u| planner.lock().unwrap().push(Recorded::Planner(u)))
            .on_executor(move |u| executor.lock().unwrap().push(Recorded::Executor(u)))
            .on_validator(move |u| validator.lock().unwrap().push(Recorded::Validator(u)))
            .on_done(move |d| done.lock().unwrap().push(Recorded::Done(d)))
            .on_error(move |e| error.lock().unwrap().push(Recorded::Error(e)))
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(Recorded::name).collect()
    }

    pub fn errors(&self) -> Vec<StreamError> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Recorded::Error(err) => Some(err),
                _ => None,
            })
            .collect()
    }

    pub fn narration(&self) -> String {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Recorded::Narrator(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

/// `event: <name>\ndata: <json>\n\n`
pub fn sse_frame(event: &str, data: &str) -> String {
    format!("event: {}\ndata: {}\n\n", event, data)
}

/// A complete turn: planner, executor, two narration chunks, validator, done.
pub fn full_turn_stream() -> String {
    [
        sse_frame("planner", r#"{"intent":"explore","target":"floresta"}"#),
        sse_frame("executor", r#"{"success":true,"summary":"caminhou pela trilha"}"#),
        sse_frame("narrator_chunk", r#"{"text":"A névoa "}"#),
        sse_frame("narrator_chunk", r#"{"text":"se abre diante de você."}"#),
        sse_frame("validator", r#"{"status":"ok","attempts":1}"#),
        sse_frame(
            "done",
            r#"{"turn_number":5,"success":true,"world_tick_occurred":false,"npcs_in_scene":[]}"#,
        ),
    ]
    .concat()
}

/// Byte stream over the given chunks.
pub fn byte_stream(chunks: Vec<Vec<u8>>) -> Result<ByteStream, HttpError> {
    let items: Vec<Result<Bytes, HttpError>> =
        chunks.into_iter().map(|c| Ok(Bytes::from(c))).collect();
    Ok(Box::pin(futures::stream::iter(items)))
}

/// Byte stream that yields `chunks` then fails with `error`.
pub fn failing_stream(chunks: Vec<Vec<u8>>, error: HttpError) -> Result<ByteStream, HttpError> {
    let mut items: Vec<Result<Bytes, HttpError>> =
        chunks.into_iter().map(|c| Ok(Bytes::from(c))).collect();
    items.push(Err(error));
    Ok(Box::pin(futures::stream::iter(items)))
}

/// `data` cut at byte offset `at`.
pub fn split_at(data: &[u8], at: usize) -> Vec<Vec<u8>> {
    vec![data[..at].to_vec(), data[at..].to_vec()]
}
