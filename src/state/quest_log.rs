//! Quest log overlay state.

use crate::models::{active_count, ActiveQuests, Quest};

#[derive(Debug, Default)]
pub struct QuestLogView {
    pub quests: Vec<Quest>,
    pub current_turn: i64,
    pub loading: bool,
    pub error: Option<String>,
}

impl QuestLogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, active: ActiveQuests, current_turn: i64) {
        self.quests = active.quests;
        self.current_turn = current_turn;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn active_count(&self) -> usize {
        active_count(&self.quests)
    }

    /// "Turno Atual: 12 | Missões Ativas: 2"
    pub fn header(&self) -> String {
        format!(
            "Turno Atual: {} | Missões Ativas: {}",
            self.current_turn,
            self.active_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestStatus, Urgency};

    fn quests() -> ActiveQuests {
        serde_json::from_str(
            r#"{"quests": [
                {"id": 1, "type": "hunt", "title": "Lobos", "current_progress": 2,
                 "required_progress": 4, "deadline_turn": 40},
                {"id": 2, "type": "delivery", "title": "Carta", "status": "completed",
                 "current_progress": 1, "required_progress": 1, "deadline_turn": 15}
            ], "count": 2}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_apply_and_header() {
        let mut view = QuestLogView::new();
        view.begin_loading();
        view.apply(quests(), 12);

        assert!(!view.loading);
        assert_eq!(view.active_count(), 1);
        assert_eq!(view.header(), "Turno Atual: 12 | Missões Ativas: 1");
    }

    #[test]
    fn test_rows_reflect_urgency() {
        let mut view = QuestLogView::new();
        view.apply(quests(), 25);

        assert_eq!(view.quests[0].urgency(25), Urgency::Pressing);
        assert_eq!(view.quests[0].progress_percent(), 50.0);
        assert_eq!(view.quests[1].status, QuestStatus::Completed);
        assert_eq!(view.quests[1].urgency(25), Urgency::Completed);
    }

    #[test]
    fn test_fail_keeps_previous_quests() {
        let mut view = QuestLogView::new();
        view.apply(quests(), 1);
        view.begin_loading();
        view.fail("Ocorreu um erro no servidor.");

        assert_eq!(view.quests.len(), 2);
        assert_eq!(view.error.as_deref(), Some("Ocorreu um erro no servidor."));
    }
}
