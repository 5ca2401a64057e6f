//! AppMessage enum for async results delivered to the UI loop.

use crate::error::{NetworkError, StreamError};
use crate::models::{
    ActiveQuests, DeleteResponse, InventoryItem, Observation, Player, Skill, TurnResponse,
    WorldTime,
};
use crate::sse::{ConsumeOutcome, TurnComplete};

/// Results of spawned API tasks.
///
/// Turn messages carry the correlation id of the turn that produced them;
/// anything from a turn that is no longer in flight is dropped.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Character list for the selection screen
    PlayersLoaded(Result<Vec<Player>, NetworkError>),
    /// A character was deleted from the selection screen
    PlayerDeleted {
        player_id: i64,
        result: Result<DeleteResponse, NetworkError>,
    },
    /// Quick character created from the selection screen
    PlayerCreated(Result<Player, NetworkError>),
    /// Session Zero questions for the wizard (never fails)
    QuestionsLoaded(Vec<String>),
    /// Character created by the wizard
    CharacterCreated(Result<Player, NetworkError>),
    /// Sheet refreshed after a turn that did not include it
    PlayerRefreshed(Result<Player, NetworkError>),
    /// Character sheet overlay data
    SheetLoaded(Result<Player, NetworkError>),
    /// Inventory overlay data
    InventoryLoaded(Vec<InventoryItem>),
    /// Skill catalog overlay data
    SkillsLoaded(Result<Vec<Skill>, NetworkError>),
    /// Quest log data with the current turn
    QuestsLoaded(Result<(ActiveQuests, i64), NetworkError>),
    /// World clock reading
    WorldTimeLoaded(Result<WorldTime, NetworkError>),
    /// NPC observation
    Observed {
        npc_id: i64,
        result: Result<Observation, NetworkError>,
    },
    /// Blocking turn result
    TurnResolved {
        correlation_id: String,
        result: Result<TurnResponse, NetworkError>,
    },
    /// Streamed narration slice
    NarratorChunk { correlation_id: String, text: String },
    /// Planner/executor/validator progress line
    StageUpdate { correlation_id: String, text: String },
    /// Streamed turn finished
    TurnDone {
        correlation_id: String,
        done: TurnComplete,
    },
    /// Streamed turn failed
    TurnFailed {
        correlation_id: String,
        error: StreamError,
    },
    /// The stream was fully consumed (always the last turn message)
    StreamClosed {
        correlation_id: String,
        outcome: ConsumeOutcome,
    },
}
