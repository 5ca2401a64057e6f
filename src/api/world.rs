//! Quests, world clock and skill catalog.

use super::client::GameClient;
use crate::error::NetworkError;
use crate::models::{ActiveQuests, CurrentTurn, Skill, WorldTime};

impl GameClient {
    /// `GET /quest/active/{player_id}`.
    pub async fn active_quests(&self, player_id: i64) -> Result<ActiveQuests, NetworkError> {
        self.get_json(&format!("/quest/active/{}", player_id)).await
    }

    /// `GET /game/current-turn`.
    pub async fn current_turn(&self) -> Result<i64, NetworkError> {
        let turn: CurrentTurn = self.get_json("/game/current-turn").await?;
        Ok(turn.current_turn)
    }

    /// `GET /world/time`.
    pub async fn world_time(&self) -> Result<WorldTime, NetworkError> {
        self.get_json("/world/time").await
    }

    /// `GET /skills`.
    pub async fn skills(&self) -> Result<Vec<Skill>, NetworkError> {
        self.get_json("/skills").await
    }
}
