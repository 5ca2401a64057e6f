//! Turn results and small response bodies.

use serde::{Deserialize, Serialize};

use super::{Npc, Player};

/// Response of the blocking `POST /game/turn`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResponse {
    #[serde(default)]
    pub scene_description: String,
    #[serde(default)]
    pub action_result: Option<String>,
    #[serde(default)]
    pub player_state: Option<Player>,
    #[serde(default)]
    pub npcs_in_scene: Vec<Npc>,
}

/// Response of `POST /npc/{id}/observe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub description: String,
}

/// Response of `DELETE /player/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
