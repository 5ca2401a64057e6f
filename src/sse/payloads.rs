//! Payloads carried by the turn stream events.
//!
//! Stage payloads default every field: they are progress hints and a
//! backend that drops a field should not hide the whole stage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Npc, Player};

/// `narrator_chunk`: the next slice of narration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarratorChunk {
    pub text: String,
}

/// `planner`: what the backend understood the player wants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerUpdate {
    pub intent: Option<String>,
    pub target: Option<String>,
}

/// `executor`: outcome of the planned action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorUpdate {
    pub success: Option<bool>,
    pub summary: Option<String>,
}

/// `validator`: consistency check of the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorUpdate {
    pub status: Option<String>,
    pub attempts: Option<u32>,
}

/// `done`: the turn finished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnComplete {
    pub session_id: Option<String>,
    pub turn_number: Option<i64>,
    pub success: Option<bool>,
    pub player_state: Option<Player>,
    pub npcs_in_scene: Option<Vec<Npc>>,
    pub world_tick_occurred: Option<bool>,
}

impl TurnComplete {
    pub fn world_ticked(&self) -> bool {
        self.world_tick_occurred.unwrap_or(false)
    }
}

/// `error`: the backend gave up on the turn.
///
/// The message arrives as either `error` or `message`, usually a string.
/// Anything else is kept as its JSON text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendFailure {
    pub error: Option<Value>,
    pub message: Option<Value>,
}

impl BackendFailure {
    pub fn text(&self) -> String {
        as_text(&self.error)
            .or_else(|| as_text(&self.message))
            .unwrap_or_else(|| "Erro desconhecido no servidor.".to_string())
    }
}

fn as_text(field: &Option<Value>) -> Option<String> {
    match field.as_ref()? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
