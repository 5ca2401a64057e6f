//! Turn stream consumer tests
//!
//! Frames must dispatch identically however the network cuts the bytes,
//! malformed data must never surface as an error, and transport failures
//! must reach `on_error` exactly once.

mod common;

use common::*;
use triluna::error::StreamError;
use triluna::sse::{consume, ActionCallbacks, ActionConsumer, ConsumeStatus, LineParser};
use triluna::traits::HttpError;

/// Dispatch `data` delivered as one chunk.
async fn record_whole(data: &[u8]) -> Vec<Recorded> {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    consume(byte_stream(vec![data.to_vec()]), &mut callbacks).await;
    recorder.events()
}

#[tokio::test]
async fn test_every_two_way_split_matches_single_chunk() {
    let stream = full_turn_stream();
    let data = stream.as_bytes();
    let expected = record_whole(data).await;
    assert_eq!(expected.len(), 6);

    for at in 1..data.len() {
        let recorder = Recorder::new();
        let mut callbacks = recorder.callbacks();
        let outcome = consume(byte_stream(split_at(data, at)), &mut callbacks).await;
        assert_eq!(recorder.events(), expected, "split at byte {}", at);
        assert_eq!(outcome.status, ConsumeStatus::Completed);
        assert!(outcome.done_received);
    }
}

#[tokio::test]
async fn test_byte_by_byte_delivery_matches_single_chunk() {
    let stream = full_turn_stream();
    let data = stream.as_bytes();
    let expected = record_whole(data).await;

    let chunks: Vec<Vec<u8>> = data.iter().map(|b| vec![*b]).collect();
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let outcome = consume(byte_stream(chunks), &mut callbacks).await;

    assert_eq!(recorder.events(), expected);
    assert_eq!(outcome.dispatched, 6);
}

#[tokio::test]
async fn test_uneven_chunks_match_single_chunk() {
    let stream = full_turn_stream();
    let data = stream.as_bytes();
    let expected = record_whole(data).await;

    for size in [2, 3, 5, 13, 31, 64] {
        let chunks: Vec<Vec<u8>> = data.chunks(size).map(|c| c.to_vec()).collect();
        let recorder = Recorder::new();
        let mut callbacks = recorder.callbacks();
        consume(byte_stream(chunks), &mut callbacks).await;
        assert_eq!(recorder.events(), expected, "chunk size {}", size);
    }
}

#[tokio::test]
async fn test_narration_split_mid_json() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let chunks = vec![
        b"event: narrator_chunk\ndata: {\"text\":\"Hel".to_vec(),
        b"lo\"}\n\n".to_vec(),
    ];

    let outcome = consume(byte_stream(chunks), &mut callbacks).await;

    assert_eq!(recorder.events(), vec![Recorded::Narrator("Hello".to_string())]);
    assert_eq!(outcome.dispatched, 1);
    assert!(recorder.errors().is_empty());
}

#[tokio::test]
async fn test_done_with_world_tick() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let data = sse_frame("done", r#"{"world_tick_occurred":true}"#);

    let outcome = consume(byte_stream(vec![data.into_bytes()]), &mut callbacks).await;

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        Recorded::Done(done) => assert!(done.world_ticked()),
        other => panic!("expected done, got {:?}", other),
    }
    assert!(outcome.done_received);
}

#[test]
fn test_unterminated_malformed_line_is_retained() {
    let mut callbacks = ActionCallbacks::new().on_error(|e| panic!("unexpected error: {}", e));
    let mut consumer = ActionConsumer::new(&mut callbacks);

    consumer.process_chunk(b"data: {not valid json").unwrap();
    let outcome = consumer.finish();

    assert_eq!(outcome.dispatched, 0);
    assert_eq!(outcome.status, ConsumeStatus::Completed);

    let mut parser = LineParser::new();
    assert!(parser.feed(b"data: {not valid json").unwrap().is_empty());
    assert_eq!(parser.pending(), "data: {not valid json");
}

#[tokio::test]
async fn test_malformed_line_between_good_frames() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let data = [
        sse_frame("narrator_chunk", r#"{"text":"um"}"#),
        "event: narrator_chunk\ndata: {not valid json\n\n".to_string(),
        sse_frame("narrator_chunk", r#"{"text":"dois"}"#),
    ]
    .concat();

    let outcome = consume(byte_stream(vec![data.into_bytes()]), &mut callbacks).await;

    assert_eq!(recorder.narration(), "umdois");
    assert!(recorder.errors().is_empty());
    assert_eq!(outcome.status, ConsumeStatus::Completed);
}

#[tokio::test]
async fn test_server_error_before_body() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let opened = Err(HttpError::ServerError {
        status: 500,
        message: "Internal Server Error".to_string(),
    });

    let outcome = consume(opened, &mut callbacks).await;

    assert_eq!(recorder.names(), vec!["error"]);
    assert!(matches!(
        recorder.errors()[0],
        StreamError::Rejected { status: 500, .. }
    ));
    assert_eq!(outcome.status, ConsumeStatus::Failed);
    assert_eq!(outcome.dispatched, 0);
}

#[tokio::test]
async fn test_connection_refused() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();

    consume(
        Err(HttpError::ConnectionFailed("connection refused".to_string())),
        &mut callbacks,
    )
    .await;

    assert_eq!(recorder.errors().len(), 1);
    assert!(matches!(
        recorder.errors()[0],
        StreamError::ConnectionFailed { .. }
    ));
}

#[tokio::test]
async fn test_drop_mid_stream_keeps_earlier_events() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let first = sse_frame("narrator_chunk", r#"{"text":"Antes"}"#).into_bytes();

    let outcome = consume(
        failing_stream(vec![first], HttpError::Io("reset by peer".to_string())),
        &mut callbacks,
    )
    .await;

    assert_eq!(recorder.names(), vec!["narrator_chunk", "error"]);
    assert!(matches!(
        recorder.errors()[0],
        StreamError::ConnectionLost { .. }
    ));
    assert!(!outcome.done_received);
    assert_eq!(outcome.status, ConsumeStatus::Failed);
}

#[tokio::test]
async fn test_backend_error_event_then_transport_error_reports_once() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let data = sse_frame("error", r#"{"error":"LLM indisponível"}"#).into_bytes();

    consume(
        failing_stream(vec![data], HttpError::Io("closed".to_string())),
        &mut callbacks,
    )
    .await;

    let errors = recorder.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0],
        StreamError::Backend {
            message: "LLM indisponível".to_string()
        }
    );
}

#[tokio::test]
async fn test_backend_error_event_with_structured_error() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let data = sse_frame("error", r#"{"error":{"code":500}}"#).into_bytes();

    let outcome = consume(byte_stream(vec![data]), &mut callbacks).await;

    assert_eq!(
        recorder.errors(),
        vec![StreamError::Backend {
            message: r#"{"code":500}"#.to_string()
        }]
    );
    assert_eq!(outcome.dispatched, 1);
}

#[tokio::test]
async fn test_multibyte_character_split_across_chunks() {
    let data = sse_frame("narrator_chunk", r#"{"text":"Você sente a presença"}"#);
    let bytes = data.as_bytes();
    let at = data.find('ê').unwrap() + 1;

    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    consume(byte_stream(split_at(bytes, at)), &mut callbacks).await;

    assert_eq!(recorder.narration(), "Você sente a presença");
    assert!(recorder.errors().is_empty());
}

#[tokio::test]
async fn test_invalid_utf8_is_terminal() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let chunks = vec![
        sse_frame("narrator_chunk", r#"{"text":"ok"}"#).into_bytes(),
        vec![0xff, 0xfe, b'\n'],
        sse_frame("narrator_chunk", r#"{"text":"never"}"#).into_bytes(),
    ];

    let outcome = consume(byte_stream(chunks), &mut callbacks).await;

    assert_eq!(recorder.names(), vec!["narrator_chunk", "error"]);
    assert!(matches!(recorder.errors()[0], StreamError::Decode { .. }));
    assert_eq!(outcome.status, ConsumeStatus::Failed);
}

#[tokio::test]
async fn test_crlf_line_endings() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let data = "event: narrator_chunk\r\ndata: {\"text\":\"crlf\"}\r\n\r\n";

    consume(byte_stream(vec![data.as_bytes().to_vec()]), &mut callbacks).await;

    assert_eq!(recorder.narration(), "crlf");
}

#[tokio::test]
async fn test_comments_and_unknown_events_are_ignored() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let data = [
        ": keep-alive\n\n".to_string(),
        sse_frame("heartbeat", r#"{"t":1}"#),
        sse_frame("narrator_chunk", r#"{"text":"depois"}"#),
    ]
    .concat();

    let outcome = consume(byte_stream(vec![data.into_bytes()]), &mut callbacks).await;

    assert_eq!(recorder.names(), vec!["narrator_chunk"]);
    assert_eq!(outcome.dispatched, 1);
}

#[tokio::test]
async fn test_line_between_event_and_data_ends_the_event() {
    for between in [": keepalive", "id: 7", "retry: 1000"] {
        let recorder = Recorder::new();
        let mut callbacks = recorder.callbacks();
        let data = format!("event: done\n{}\ndata: {{}}\n\n", between);

        let outcome = consume(byte_stream(vec![data.into_bytes()]), &mut callbacks).await;

        assert!(recorder.names().is_empty(), "after {:?}", between);
        assert_eq!(outcome.dispatched, 0, "after {:?}", between);
        assert!(!outcome.done_received, "after {:?}", between);
        assert_eq!(outcome.status, ConsumeStatus::Completed);
    }
}

#[tokio::test]
async fn test_keepalive_between_frames_keeps_later_frames() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let data = [
        "event: narrator_chunk\n: keepalive\ndata: {\"text\":\"perdido\"}\n\n".to_string(),
        ": keepalive\n".to_string(),
        sse_frame("narrator_chunk", r#"{"text":"depois"}"#),
        sse_frame("done", r#"{"success":true}"#),
    ]
    .concat();

    let outcome = consume(byte_stream(vec![data.into_bytes()]), &mut callbacks).await;

    assert_eq!(recorder.narration(), "depois");
    assert!(outcome.done_received);
}

#[tokio::test]
async fn test_second_data_line_after_one_event_line() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let data = "event: narrator_chunk\ndata: {\"text\":\"a\"}\ndata: {\"text\":\"b\"}\n\n";

    consume(byte_stream(vec![data.as_bytes().to_vec()]), &mut callbacks).await;

    // The event name is spent by the first parsed data line.
    assert_eq!(recorder.narration(), "a");
}

#[tokio::test]
async fn test_trailing_frame_without_final_newline() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();
    let data = "event: done\ndata: {\"success\":true}";

    let outcome = consume(byte_stream(vec![data.as_bytes().to_vec()]), &mut callbacks).await;

    assert_eq!(recorder.names(), vec!["done"]);
    assert!(outcome.done_received);
}

#[tokio::test]
async fn test_empty_stream_completes_quietly() {
    let recorder = Recorder::new();
    let mut callbacks = recorder.callbacks();

    let outcome = consume(byte_stream(Vec::new()), &mut callbacks).await;

    assert!(recorder.events().is_empty());
    assert_eq!(outcome.status, ConsumeStatus::Completed);
    assert!(!outcome.done_received);
}

#[tokio::test]
async fn test_missing_callbacks_are_skipped() {
    let collected = std::sync::Arc::new(std::sync::Mutex::new(String::new()));
    let sink = collected.clone();
    let mut callbacks =
        ActionCallbacks::new().on_narrator_chunk(move |c| sink.lock().unwrap().push_str(&c.text));

    let outcome = consume(
        byte_stream(vec![full_turn_stream().into_bytes()]),
        &mut callbacks,
    )
    .await;

    assert_eq!(*collected.lock().unwrap(), "A névoa se abre diante de você.");
    assert_eq!(outcome.dispatched, 6);
}
