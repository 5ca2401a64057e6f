//! Quests and their deadlines.

use serde::{Deserialize, Serialize};

/// Quest lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    #[default]
    Active,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl QuestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            QuestStatus::Active => "ATIVA",
            QuestStatus::Completed => "CONCLUÍDA",
            QuestStatus::Failed => "FALHOU",
            QuestStatus::Unknown => "?",
        }
    }
}

/// How close a quest is to its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// More than 20 turns left
    Comfortable,
    /// 11 to 20 turns left
    Pressing,
    /// 10 or fewer turns left
    Critical,
    Completed,
    Failed,
}

/// A quest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub quest_type: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: QuestStatus,
    #[serde(default)]
    pub current_progress: i64,
    #[serde(default)]
    pub required_progress: i64,
    #[serde(default)]
    pub deadline_turn: i64,
    #[serde(default)]
    pub reward_xp: f64,
    #[serde(default)]
    pub reward_gold: i64,
    #[serde(default)]
    pub reward_items: Vec<serde_json::Value>,
}

impl Quest {
    /// Progress in percent, 0 when nothing is required, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.required_progress == 0 {
            return 0.0;
        }
        let pct = self.current_progress as f64 / self.required_progress as f64 * 100.0;
        pct.min(100.0)
    }

    pub fn turns_remaining(&self, current_turn: i64) -> i64 {
        self.deadline_turn - current_turn
    }

    pub fn urgency(&self, current_turn: i64) -> Urgency {
        match self.status {
            QuestStatus::Completed => return Urgency::Completed,
            QuestStatus::Failed => return Urgency::Failed,
            _ => {}
        }
        match self.turns_remaining(current_turn) {
            t if t > 20 => Urgency::Comfortable,
            t if t > 10 => Urgency::Pressing,
            _ => Urgency::Critical,
        }
    }

    pub fn type_label(&self) -> &str {
        match self.quest_type.as_str() {
            "hunt" => "Caçada",
            "delivery" => "Entrega",
            "duel" => "Duelo",
            "explore" => "Exploração",
            "gather" => "Coleta",
            other => other,
        }
    }

    /// Short reward line, e.g. "120 XP · 50 ouro · 2 itens".
    pub fn reward_summary(&self) -> String {
        let mut parts = Vec::new();
        if self.reward_xp > 0.0 {
            parts.push(format!("{} XP", self.reward_xp.round()));
        }
        if self.reward_gold > 0 {
            parts.push(format!("{} ouro", self.reward_gold));
        }
        match self.reward_items.len() {
            0 => {}
            1 => parts.push("1 item".to_string()),
            n => parts.push(format!("{} itens", n)),
        }
        parts.join(" · ")
    }
}

/// Response of `GET /quest/active/{player_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveQuests {
    #[serde(default)]
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub count: usize,
}

/// Number of quests still marked active.
pub fn active_count(quests: &[Quest]) -> usize {
    quests
        .iter()
        .filter(|q| q.status == QuestStatus::Active)
        .count()
}
