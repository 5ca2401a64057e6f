//! Narrative log shown in the main column.

/// Oldest entries are dropped past this many.
pub const MAX_ENTRIES: usize = 500;

/// What produced a narrative entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The player's own input, rendered as `> input`.
    Player,
    /// Narration from the game master.
    Narrator,
    /// A failure shown to the player.
    Error,
    /// Client notices (welcome, help, world tick).
    System,
    /// Planner/executor/validator progress while a turn resolves.
    Stage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl NarrativeEntry {
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Text as displayed, with the player prompt marker.
    pub fn display_text(&self) -> String {
        match self.kind {
            EntryKind::Player => format!("> {}", self.text),
            _ => self.text.clone(),
        }
    }
}

/// Ordered log of everything said during play.
#[derive(Debug, Default)]
pub struct NarrativeLog {
    entries: Vec<NarrativeEntry>,
    /// Index of the narrator entry receiving streamed chunks.
    open_narration: Option<usize>,
}

impl NarrativeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[NarrativeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&NarrativeEntry> {
        self.entries.last()
    }

    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) {
        self.entries.push(NarrativeEntry::new(kind, text));
        self.trim();
    }

    pub fn push_player(&mut self, input: impl Into<String>) {
        self.close_narration();
        self.push(EntryKind::Player, input);
    }

    pub fn push_narrator(&mut self, text: impl Into<String>) {
        self.close_narration();
        self.push(EntryKind::Narrator, text);
    }

    pub fn push_system(&mut self, text: impl Into<String>) {
        self.push(EntryKind::System, text);
    }

    pub fn push_stage(&mut self, text: impl Into<String>) {
        self.push(EntryKind::Stage, text);
    }

    /// Add an error entry, prefixed `Erro: `.
    pub fn push_error(&mut self, message: impl AsRef<str>) {
        self.close_narration();
        self.push(EntryKind::Error, format!("Erro: {}", message.as_ref()));
    }

    /// Append a streamed chunk to the open narrator entry, opening one if
    /// needed. Stage entries pushed in between do not split the narration.
    pub fn append_chunk(&mut self, chunk: &str) {
        match self.open_narration {
            Some(idx) if idx < self.entries.len() => self.entries[idx].text.push_str(chunk),
            _ => {
                self.entries
                    .push(NarrativeEntry::new(EntryKind::Narrator, chunk));
                self.open_narration = Some(self.entries.len() - 1);
                self.trim();
            }
        }
    }

    /// Whether a streamed narration is still receiving chunks.
    pub fn is_narrating(&self) -> bool {
        self.open_narration.is_some()
    }

    /// Stop appending to the current narrator entry.
    pub fn close_narration(&mut self) {
        self.open_narration = None;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.open_narration = None;
    }

    fn trim(&mut self) {
        if self.entries.len() <= MAX_ENTRIES {
            return;
        }
        let excess = self.entries.len() - MAX_ENTRIES;
        self.entries.drain(..excess);
        self.open_narration = match self.open_narration {
            Some(idx) if idx >= excess => Some(idx - excess),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_entry_display() {
        let entry = NarrativeEntry::new(EntryKind::Player, "olhar ao redor");
        assert_eq!(entry.display_text(), "> olhar ao redor");
    }

    #[test]
    fn test_append_chunk_builds_one_entry() {
        let mut log = NarrativeLog::new();
        log.push_player("meditar");
        log.append_chunk("O Qi ");
        log.append_chunk("circula.");

        assert_eq!(log.len(), 2);
        assert_eq!(log.last().unwrap().text, "O Qi circula.");
        assert!(log.is_narrating());
    }

    #[test]
    fn test_stage_does_not_split_narration() {
        let mut log = NarrativeLog::new();
        log.append_chunk("A névoa ");
        log.push_stage("Validando ação...");
        log.append_chunk("se dissipa.");

        assert_eq!(log.entries()[0].text, "A névoa se dissipa.");
        assert_eq!(log.entries()[1].kind, EntryKind::Stage);
    }

    #[test]
    fn test_close_narration_starts_new_entry() {
        let mut log = NarrativeLog::new();
        log.append_chunk("Primeiro turno.");
        log.close_narration();
        log.append_chunk("Segundo turno.");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[1].text, "Segundo turno.");
    }

    #[test]
    fn test_error_prefix() {
        let mut log = NarrativeLog::new();
        log.push_error("Ainda criando o jogador...");
        let last = log.last().unwrap();
        assert_eq!(last.kind, EntryKind::Error);
        assert_eq!(last.text, "Erro: Ainda criando o jogador...");
    }

    #[test]
    fn test_trim_keeps_open_narration() {
        let mut log = NarrativeLog::new();
        log.append_chunk("aberta");
        for i in 0..MAX_ENTRIES {
            log.push_stage(format!("etapa {}", i));
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        assert!(!log.is_narrating());

        log.append_chunk("nova");
        assert_eq!(log.len(), MAX_ENTRIES);
        assert_eq!(log.last().unwrap().text, "nova");
        log.append_chunk(" narração");
        assert_eq!(log.last().unwrap().text, "nova narração");
    }
}
