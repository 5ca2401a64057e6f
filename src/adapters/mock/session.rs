//! In-memory session store for tests.

use std::sync::{Arc, Mutex};

use crate::error::SessionError;
use crate::session::StoredSession;
use crate::traits::SessionStore;

/// Session store kept in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    slot: Arc<Mutex<Option<StoredSession>>>,
    fail_writes: bool,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a session.
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(session))),
            fail_writes: false,
        }
    }

    /// Store whose `save` and `clear` always fail.
    pub fn failing() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            fail_writes: true,
        }
    }

    /// Peek at the stored value.
    pub fn stored(&self) -> Option<StoredSession> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn write_error() -> SessionError {
        SessionError::Write {
            path: "memory".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store"),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        Ok(self.stored())
    }

    fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        if self.fail_writes {
            return Err(Self::write_error());
        }
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.fail_writes {
            return Err(Self::write_error());
        }
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = InMemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        let session = StoredSession::new(4, "Lin Feng");
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_failing_store() {
        let store = InMemorySessionStore::failing();
        assert!(store.save(&StoredSession::new(1, "x")).is_err());
        assert!(store.clear().is_err());
    }
}
