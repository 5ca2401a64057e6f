//! Session and history persistence across client runs
//!
//! Each "run" builds a fresh context over the same data directory, the way
//! the binary does on start.

use std::sync::Arc;
use tempfile::TempDir;

use triluna::adapters::file_session::SESSION_FILE;
use triluna::adapters::FileSessionStore;
use triluna::error::SessionError;
use triluna::input_history::InputHistory;
use triluna::session::{SessionContext, StoredSession};

fn context_in(dir: &TempDir) -> SessionContext {
    let mut ctx = SessionContext::new(Arc::new(FileSessionStore::in_dir(dir.path())));
    ctx.load();
    ctx
}

#[test]
fn test_first_run_has_no_session() {
    let dir = TempDir::new().unwrap();
    let ctx = context_in(&dir);
    assert!(ctx.current().is_none());
    assert!(matches!(
        ctx.require_player(),
        Err(SessionError::NoActivePlayer)
    ));
}

#[test]
fn test_selected_character_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut ctx = context_in(&dir);
        ctx.save(7, "Lin Feng").unwrap();
    }

    let ctx = context_in(&dir);
    assert_eq!(ctx.current(), Some(&StoredSession::new(7, "Lin Feng")));
    assert_eq!(ctx.require_player().unwrap(), 7);
}

#[test]
fn test_switching_character_overwrites() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context_in(&dir);
    ctx.save(7, "Lin Feng").unwrap();
    ctx.save(8, "Mei").unwrap();

    let ctx = context_in(&dir);
    assert_eq!(ctx.player_id(), Some(8));
    assert_eq!(ctx.player_name(), Some("Mei"));
}

#[test]
fn test_logout_removes_session_file() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context_in(&dir);
    ctx.save(7, "Lin Feng").unwrap();
    assert!(dir.path().join(SESSION_FILE).exists());

    ctx.clear().unwrap();
    assert!(!dir.path().join(SESSION_FILE).exists());
    assert!(context_in(&dir).current().is_none());

    // Clearing twice is fine.
    ctx.clear().unwrap();
}

#[test]
fn test_corrupt_session_file_falls_back_to_selection() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(SESSION_FILE), "{ not json").unwrap();

    let mut ctx = context_in(&dir);
    assert!(ctx.current().is_none());

    // The next save repairs it.
    ctx.save(3, "Xiao").unwrap();
    assert_eq!(context_in(&dir).player_id(), Some(3));
}

#[test]
fn test_session_file_is_plain_json() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context_in(&dir);
    ctx.save(7, "Lin Feng").unwrap();

    let raw = std::fs::read_to_string(dir.path().join(SESSION_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["player_id"], 7);
    assert_eq!(value["player_name"], "Lin Feng");
}

#[test]
fn test_save_creates_missing_data_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut ctx = SessionContext::new(Arc::new(FileSessionStore::in_dir(&nested)));

    ctx.save(1, "Lin").unwrap();
    assert!(nested.join(SESSION_FILE).exists());
}

#[test]
fn test_input_history_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut history = InputHistory::load(dir.path());
        history.add("olhar ao redor");
        history.add("/quests");
        history.save();
    }

    let mut history = InputHistory::load(dir.path());
    assert_eq!(history.len(), 2);
    assert_eq!(history.older(""), Some("/quests"));
    assert_eq!(history.older(""), Some("olhar ao redor"));
}
