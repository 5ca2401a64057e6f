//! Player and character creation endpoints.

use tracing::{info, warn};

use super::client::{decode, status_error, GameClient};
use crate::error::NetworkError;
use crate::models::{
    CreateCharacterRequest, CreatePlayerRequest, DeleteResponse, InventoryItem, Player,
    SessionZeroQuestions, SessionZeroRequest, FALLBACK_QUESTIONS,
};

impl GameClient {
    /// `POST /player/create`: quick character with only a name.
    pub async fn create_player(&self, name: &str) -> Result<Player, NetworkError> {
        let url = format!(
            "{}?name={}",
            self.url("/player/create"),
            urlencoding::encode(name)
        );
        let player: Player = self
            .post_json(&url, &CreatePlayerRequest {
                name: name.to_string(),
            })
            .await?;
        info!(player_id = player.id, "Created player");
        Ok(player)
    }

    /// `POST /player/create-full`: character from the creation wizard.
    pub async fn create_character(
        &self,
        request: &CreateCharacterRequest,
    ) -> Result<Player, NetworkError> {
        let player: Player = self
            .post_json(&self.url("/player/create-full"), request)
            .await?;
        info!(player_id = player.id, "Created character");
        Ok(player)
    }

    /// `GET /player/{id}`: full character sheet.
    pub async fn get_player(&self, player_id: i64) -> Result<Player, NetworkError> {
        self.get_json(&format!("/player/{}", player_id)).await
    }

    /// `GET /player/{id}/inventory`.
    ///
    /// Never fails: a transport error, a non-success status or an
    /// unreadable body all read as an empty inventory.
    pub async fn inventory(&self, player_id: i64) -> Vec<InventoryItem> {
        let url = self.url(&format!("/player/{}/inventory", player_id));
        let result: Result<Vec<InventoryItem>, NetworkError> =
            self.get_raw(&url).await.and_then(|response| decode(&response));

        result.unwrap_or_else(|e| {
            warn!(player_id, error = %e, "Inventory unavailable, showing it empty");
            Vec::new()
        })
    }

    /// `GET /player/list/all`.
    pub async fn list_players(&self) -> Result<Vec<Player>, NetworkError> {
        self.get_json("/player/list/all").await
    }

    /// `DELETE /player/{id}`.
    pub async fn delete_player(&self, player_id: i64) -> Result<DeleteResponse, NetworkError> {
        let url = self.url(&format!("/player/{}", player_id));
        let response = self
            .http()
            .delete(&url, &GameClient::json_headers())
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        if !response.is_success() {
            return Err(status_error(&response));
        }
        info!(player_id, "Deleted player");
        Ok(response.json().unwrap_or(DeleteResponse {
            success: true,
            message: None,
        }))
    }

    /// `POST /character/session-zero`.
    ///
    /// Never fails: any error, or an empty list, falls back to a fixed
    /// set of questions so character creation can always finish.
    pub async fn session_zero_questions(&self, request: &SessionZeroRequest) -> Vec<String> {
        let result: Result<SessionZeroQuestions, NetworkError> = self
            .post_json(&self.url("/character/session-zero"), request)
            .await;

        match result {
            Ok(response) if !response.questions.is_empty() => response.questions,
            Ok(_) => {
                warn!("Session Zero returned no questions, using fallback");
                fallback_questions()
            }
            Err(e) => {
                warn!(error = %e, "Session Zero failed, using fallback");
                fallback_questions()
            }
        }
    }
}

fn fallback_questions() -> Vec<String> {
    FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect()
}
