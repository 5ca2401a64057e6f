//! Recall of previously submitted actions.
//!
//! Entries live in `history` under the data directory, one per line,
//! oldest first. Slash commands are kept too so `/quests` can be recalled.

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name inside the data directory.
pub const HISTORY_FILE: &str = "history";

const MAX_HISTORY_SIZE: usize = 500;

/// Up/Down navigation over submitted inputs.
#[derive(Debug, Clone, Default)]
pub struct InputHistory {
    entries: Vec<String>,
    /// Position while navigating; None means editing a fresh line.
    index: Option<usize>,
    /// What was typed before navigation started.
    draft: String,
    path: Option<PathBuf>,
}

impl InputHistory {
    /// Empty history that is never written to disk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `history` from `data_dir`. A missing or unreadable file gives
    /// an empty history that will still be saved there.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(HISTORY_FILE);
        let entries = match fs::File::open(&path) {
            Ok(file) => BufReader::new(file)
                .lines()
                .map_while(Result::ok)
                .filter(|line| !line.trim().is_empty())
                .collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read input history");
                Vec::new()
            }
        };
        let mut history = Self {
            entries,
            path: Some(path),
            ..Self::default()
        };
        history.trim();
        history
    }

    /// Write entries back. Failures are logged, never fatal.
    pub fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut writer = BufWriter::new(fs::File::create(path)?);
            for entry in &self.entries {
                writeln!(writer, "{}", entry)?;
            }
            writer.flush()
        })();
        if let Err(e) = result {
            warn!(path = %path.display(), error = %e, "Could not save input history");
        }
    }

    /// Record a submitted input. Blank lines and repeats of the newest
    /// entry are skipped.
    pub fn add(&mut self, entry: &str) {
        let entry = entry.trim();
        if entry.is_empty() || self.entries.last().map(String::as_str) == Some(entry) {
            self.reset_navigation();
            return;
        }
        self.entries.push(entry.to_string());
        self.trim();
        self.reset_navigation();
    }

    /// Step to an older entry. The first step stashes `current` as the draft.
    pub fn older(&mut self, current: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.index {
            None => {
                self.draft = current.to_string();
                self.entries.len() - 1
            }
            Some(idx) => idx.saturating_sub(1),
        };
        self.index = Some(idx);
        Some(&self.entries[idx])
    }

    /// Step to a newer entry. Past the newest, returns the stashed draft.
    pub fn newer(&mut self) -> Option<&str> {
        let idx = self.index?;
        if idx + 1 < self.entries.len() {
            self.index = Some(idx + 1);
            Some(&self.entries[idx + 1])
        } else {
            self.index = None;
            Some(&self.draft)
        }
    }

    pub fn reset_navigation(&mut self) {
        self.index = None;
        self.draft.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn trim(&mut self) {
        if self.entries.len() > MAX_HISTORY_SIZE {
            let excess = self.entries.len() - MAX_HISTORY_SIZE;
            self.entries.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_skips_blank_and_repeats() {
        let mut history = InputHistory::new();
        history.add("olhar ao redor");
        history.add("olhar ao redor");
        history.add("   ");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_navigation_round_trip() {
        let mut history = InputHistory::new();
        history.add("meditar");
        history.add("/quests");

        assert_eq!(history.older("atac"), Some("/quests"));
        assert_eq!(history.older("ignored"), Some("meditar"));
        assert_eq!(history.older("ignored"), Some("meditar"));
        assert_eq!(history.newer(), Some("/quests"));
        assert_eq!(history.newer(), Some("atac"));
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn test_previous_on_empty() {
        let mut history = InputHistory::new();
        assert_eq!(history.older("x"), None);
    }

    #[test]
    fn test_persists_in_data_dir() {
        let dir = TempDir::new().unwrap();
        let mut history = InputHistory::load(dir.path());
        assert!(history.is_empty());
        history.add("dormir");
        history.add("/time");
        history.save();

        let reloaded = InputHistory::load(dir.path());
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn test_keeps_newest_entries() {
        let mut history = InputHistory::new();
        for i in 0..MAX_HISTORY_SIZE + 10 {
            history.add(&format!("acao {}", i));
        }
        assert_eq!(history.len(), MAX_HISTORY_SIZE);
        assert_eq!(history.older(""), Some("acao 509"));
    }
}
