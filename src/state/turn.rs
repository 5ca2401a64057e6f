//! In-game state driven by turn results.

use crate::models::{combat_skills, scene_is_hostile, Npc, Player, TurnResponse, WorldTime};
use crate::sse::TurnComplete;

/// The active character, the scene around them and the in-flight turn.
#[derive(Debug, Default)]
pub struct TurnState {
    /// Latest character sheet.
    pub player: Option<Player>,
    /// NPCs present in the current scene.
    pub npcs: Vec<Npc>,
    /// Latest world clock reading.
    pub world_time: Option<WorldTime>,
    /// Turn number from the last `done` event.
    pub turn_number: Option<i64>,
    in_flight: bool,
    correlation_id: Option<String>,
    world_ticked: bool,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an action is being resolved. Input is disabled while true.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Mark a turn as started. Returns false if one is already running.
    pub fn begin(&mut self, correlation_id: impl Into<String>) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.correlation_id = Some(correlation_id.into());
        true
    }

    /// Mark the running turn as over, successful or not.
    pub fn finish(&mut self) {
        self.in_flight = false;
        self.correlation_id = None;
    }

    /// Whether the previous turn advanced the world clock.
    pub fn world_ticked(&self) -> bool {
        self.world_ticked
    }

    /// True iff any NPC in the scene is hostile.
    pub fn in_combat(&self) -> bool {
        scene_is_hostile(&self.npcs)
    }

    /// Skill ids offered in the combat grid.
    pub fn combat_skills(&self) -> Vec<String> {
        let learned = self
            .player
            .as_ref()
            .map(|p| p.learned_skills.as_slice())
            .unwrap_or(&[]);
        combat_skills(learned)
    }

    /// NPC by its 1-based position in the scene list.
    pub fn npc_at(&self, position: usize) -> Option<&Npc> {
        position.checked_sub(1).and_then(|idx| self.npcs.get(idx))
    }

    /// Apply a blocking turn result.
    pub fn apply_turn(&mut self, turn: &TurnResponse) {
        if let Some(player) = &turn.player_state {
            self.player = Some(player.clone());
        }
        self.npcs = turn.npcs_in_scene.clone();
    }

    /// Apply a streamed `done` event.
    ///
    /// Returns true when the event carried no player state and the sheet
    /// has to be fetched separately.
    pub fn apply_done(&mut self, done: &TurnComplete) -> bool {
        self.world_ticked = done.world_ticked();
        if done.turn_number.is_some() {
            self.turn_number = done.turn_number;
        }
        if let Some(npcs) = &done.npcs_in_scene {
            self.npcs = npcs.clone();
        }
        match &done.player_state {
            Some(player) => {
                self.player = Some(player.clone());
                false
            }
            None => true,
        }
    }

    /// Forget everything about the current character.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn npc(name: &str, state: &str) -> Npc {
        Npc {
            name: name.to_string(),
            emotional_state: state.to_string(),
            ..Npc::default()
        }
    }

    #[test]
    fn test_single_turn_in_flight() {
        let mut turn = TurnState::new();
        assert!(turn.begin("a"));
        assert!(!turn.begin("b"));
        assert_eq!(turn.correlation_id(), Some("a"));

        turn.finish();
        assert!(!turn.is_in_flight());
        assert!(turn.begin("c"));
    }

    #[test]
    fn test_combat_flag_follows_scene() {
        let mut turn = TurnState::new();
        turn.npcs = vec![npc("Ancião", "friendly")];
        assert!(!turn.in_combat());

        turn.npcs.push(npc("Lobo", "hostile"));
        assert!(turn.in_combat());
    }

    #[test]
    fn test_combat_skills_default_and_learned() {
        let mut turn = TurnState::new();
        assert_eq!(turn.combat_skills(), vec!["meteor_soul", "shadowstep"]);

        let mut player = Player::placeholder(1, "Lin");
        player.learned_skills = vec!["void_palm".to_string()];
        turn.player = Some(player);
        assert_eq!(turn.combat_skills(), vec!["void_palm"]);
    }

    #[test]
    fn test_npc_at_is_one_based() {
        let mut turn = TurnState::new();
        turn.npcs = vec![npc("A", "neutral"), npc("B", "neutral")];
        assert_eq!(turn.npc_at(1).unwrap().name, "A");
        assert_eq!(turn.npc_at(2).unwrap().name, "B");
        assert!(turn.npc_at(0).is_none());
        assert!(turn.npc_at(3).is_none());
    }

    #[test]
    fn test_done_without_player_needs_reload() {
        let mut turn = TurnState::new();
        turn.npcs = vec![npc("Lobo", "hostile")];
        let done = TurnComplete {
            turn_number: Some(8),
            world_tick_occurred: Some(true),
            ..TurnComplete::default()
        };

        assert!(turn.apply_done(&done));
        assert!(turn.world_ticked());
        assert_eq!(turn.turn_number, Some(8));
        assert_eq!(turn.npcs.len(), 1);
    }

    #[test]
    fn test_done_with_player_state() {
        let mut turn = TurnState::new();
        let done = TurnComplete {
            player_state: Some(Player::placeholder(3, "Mei")),
            npcs_in_scene: Some(Vec::new()),
            ..TurnComplete::default()
        };

        assert!(!turn.apply_done(&done));
        assert_eq!(turn.player.as_ref().unwrap().name, "Mei");
        assert!(!turn.world_ticked());
    }

    #[test]
    fn test_apply_blocking_turn_keeps_player_when_absent() {
        let mut turn = TurnState::new();
        turn.player = Some(Player::placeholder(1, "Lin"));
        let response = TurnResponse {
            scene_description: "Silêncio.".to_string(),
            action_result: None,
            player_state: None,
            npcs_in_scene: vec![npc("Lobo", "hostile")],
        };

        turn.apply_turn(&response);
        assert_eq!(turn.player.as_ref().unwrap().name, "Lin");
        assert!(turn.in_combat());
    }
}
