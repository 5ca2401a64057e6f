//! Turn and NPC endpoints.

use tracing::{info, info_span, Instrument};

use super::client::{decode, GameClient};
use crate::error::NetworkError;
use crate::models::{Observation, TurnResponse};
use crate::sse::{self, ActionCallbacks, ConsumeOutcome};
use crate::traits::Headers;

impl GameClient {
    /// `POST /game/turn`: resolve a turn and wait for the whole result.
    pub async fn play_turn(
        &self,
        player_id: i64,
        player_input: &str,
    ) -> Result<TurnResponse, NetworkError> {
        let url = self.turn_url("/game/turn", player_id, player_input);
        let response = self.post_raw(&url, "").await?;
        decode(&response)
    }

    /// `POST /v2/game/turn/stream`: resolve a turn as an event stream.
    ///
    /// Progress is delivered through `callbacks`; every failure, including
    /// a rejected request, arrives through their `on_error`.
    pub async fn stream_turn(
        &self,
        player_id: i64,
        player_input: &str,
        callbacks: &mut ActionCallbacks,
    ) -> ConsumeOutcome {
        let url = self.turn_url("/v2/game/turn/stream", player_id, player_input);
        let span = info_span!("turn_stream", player_id);

        async {
            info!("Opening turn stream");
            let opened = self.http().post_stream(&url, "", &Headers::new()).await;
            sse::consume(opened, callbacks).await
        }
        .instrument(span)
        .await
    }

    /// `POST /npc/{id}/observe`.
    pub async fn observe_npc(&self, npc_id: i64) -> Result<Observation, NetworkError> {
        let url = self.url(&format!("/npc/{}/observe", npc_id));
        let response = self.post_raw(&url, "").await?;
        decode(&response)
    }
}
