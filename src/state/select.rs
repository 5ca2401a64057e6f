//! Character selection screen state.

use crate::models::Player;

#[derive(Debug, Default)]
pub struct CharacterList {
    pub players: Vec<Player>,
    cursor: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Id awaiting a second delete keypress.
    confirm_delete: Option<i64>,
}

impl CharacterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&Player> {
        self.players.get(self.cursor)
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, players: Vec<Player>) {
        self.players = players;
        self.loading = false;
        self.confirm_delete = None;
        if self.cursor >= self.players.len() {
            self.cursor = self.players.len().saturating_sub(1);
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.players.is_empty() {
            return;
        }
        let len = self.players.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
        self.confirm_delete = None;
    }

    /// First press arms the delete, second press on the same character
    /// returns its id.
    pub fn request_delete(&mut self) -> Option<i64> {
        let id = self.selected()?.id;
        if self.confirm_delete == Some(id) {
            self.confirm_delete = None;
            Some(id)
        } else {
            self.confirm_delete = Some(id);
            None
        }
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.confirm_delete
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }
}
