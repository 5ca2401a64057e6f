//! Session store trait abstraction.
//!
//! The active character is the only state the client persists between runs.
//! [`crate::session::SessionContext`] owns a store and exposes explicit
//! load/save/clear operations on top of it.

use crate::error::SessionError;
use crate::session::StoredSession;

/// Persistence for the active character.
pub trait SessionStore: Send + Sync {
    /// Load the stored session.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<StoredSession>, SessionError>;

    /// Replace the stored session.
    fn save(&self, session: &StoredSession) -> Result<(), SessionError>;

    /// Remove the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}
