//! Active character session.
//!
//! The only state the client keeps between runs is which character is being
//! played. [`SessionContext`] holds it in memory and mirrors every change to a
//! [`SessionStore`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::SessionError;
use crate::traits::SessionStore;

/// The persisted `(player_id, player_name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub player_id: i64,
    pub player_name: String,
}

impl StoredSession {
    pub fn new(player_id: i64, player_name: impl Into<String>) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
        }
    }
}

/// In-memory session plus its backing store.
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current: Option<StoredSession>,
}

impl SessionContext {
    /// Create an empty context. Nothing is read until [`load`](Self::load).
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Resume the stored session, if any.
    ///
    /// A corrupt or unreadable file is logged and treated as no session, so a
    /// broken file never keeps the player out of character selection.
    pub fn load(&mut self) -> Option<&StoredSession> {
        self.current = match self.store.load() {
            Ok(Some(session)) if !session.player_name.trim().is_empty() => {
                debug!(player_id = session.player_id, "Resumed session");
                Some(session)
            }
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable session");
                None
            }
        };
        self.current.as_ref()
    }

    /// Make `(player_id, player_name)` the active character.
    ///
    /// The in-memory session is updated even if persisting it fails.
    pub fn save(
        &mut self,
        player_id: i64,
        player_name: impl Into<String>,
    ) -> Result<(), SessionError> {
        let session = StoredSession::new(player_id, player_name);
        let result = self.store.save(&session);
        self.current = Some(session);
        result
    }

    /// Forget the active character.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.current = None;
        self.store.clear()
    }

    pub fn current(&self) -> Option<&StoredSession> {
        self.current.as_ref()
    }

    pub fn player_id(&self) -> Option<i64> {
        self.current.as_ref().map(|s| s.player_id)
    }

    pub fn player_name(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.player_name.as_str())
    }

    /// The active player id, or [`SessionError::NoActivePlayer`].
    pub fn require_player(&self) -> Result<i64, SessionError> {
        self.player_id().ok_or(SessionError::NoActivePlayer)
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;

    #[test]
    fn test_load_empty_store() {
        let mut ctx = SessionContext::new(Arc::new(InMemorySessionStore::new()));
        assert!(ctx.load().is_none());
        assert!(matches!(
            ctx.require_player(),
            Err(SessionError::NoActivePlayer)
        ));
    }

    #[test]
    fn test_load_existing_session() {
        let store = InMemorySessionStore::with_session(StoredSession::new(7, "Lin Feng"));
        let mut ctx = SessionContext::new(Arc::new(store));

        let loaded = ctx.load().cloned();
        assert_eq!(loaded, Some(StoredSession::new(7, "Lin Feng")));
        assert_eq!(ctx.require_player().unwrap(), 7);
        assert_eq!(ctx.player_name(), Some("Lin Feng"));
    }

    #[test]
    fn test_blank_name_is_no_session() {
        let store = InMemorySessionStore::with_session(StoredSession::new(7, "  "));
        let mut ctx = SessionContext::new(Arc::new(store));
        assert!(ctx.load().is_none());
    }

    #[test]
    fn test_save_and_clear_mirror_to_store() {
        let store = InMemorySessionStore::new();
        let mut ctx = SessionContext::new(Arc::new(store.clone()));

        ctx.save(3, "Mei").unwrap();
        assert_eq!(store.stored(), Some(StoredSession::new(3, "Mei")));
        assert_eq!(ctx.player_id(), Some(3));

        ctx.clear().unwrap();
        assert!(store.stored().is_none());
        assert!(ctx.current().is_none());
    }

    #[test]
    fn test_save_failure_keeps_memory_session() {
        let mut ctx = SessionContext::new(Arc::new(InMemorySessionStore::failing()));

        assert!(ctx.save(5, "Wei").is_err());
        assert_eq!(ctx.player_id(), Some(5));
    }
}
