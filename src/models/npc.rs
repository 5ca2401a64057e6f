//! NPCs present in a scene.

use serde::{Deserialize, Serialize};

/// NPC record as sent in `npcs_in_scene`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Npc {
    pub id: i64,
    pub name: String,
    pub rank: i64,
    pub species: String,
    pub gender: String,
    pub description: Option<String>,
    pub current_hp: f64,
    pub max_hp: f64,
    pub emotional_state: String,
    pub role: String,
    pub current_location: String,
    pub current_activity: Option<String>,
    pub is_alive: bool,
}

impl Default for Npc {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            rank: 1,
            species: "human".to_string(),
            gender: "unknown".to_string(),
            description: None,
            current_hp: 100.0,
            max_hp: 100.0,
            emotional_state: "neutral".to_string(),
            role: "civilian".to_string(),
            current_location: String::new(),
            current_activity: None,
            is_alive: true,
        }
    }
}

impl Npc {
    pub fn is_hostile(&self) -> bool {
        self.emotional_state == "hostile"
    }

    pub fn emotional_state_label(&self) -> &str {
        match self.emotional_state.as_str() {
            "neutral" => "neutro",
            "hostile" => "hostil",
            "friendly" => "amigável",
            "fearful" => "temeroso",
            "respectful" => "respeitoso",
            other => other,
        }
    }

    pub fn species_label(&self) -> &str {
        match self.species.as_str() {
            "human" => "humano",
            "beast" => "besta",
            "spirit" => "espírito",
            "demon" => "demônio",
            "undead" => "morto-vivo",
            "construct" => "constructo",
            other => other,
        }
    }
}

/// Whether any NPC in the scene is hostile.
pub fn scene_is_hostile(npcs: &[Npc]) -> bool {
    npcs.iter().any(Npc::is_hostile)
}
