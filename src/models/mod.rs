pub mod creation;
mod npc;
mod player;
mod quest;
mod skill;
mod tier;
mod turn;
mod world;

pub use creation::{
    find_constitution, find_origin, Constitution, CreateCharacterRequest, CreatePlayerRequest,
    OriginLocation, SessionZeroQuestions, SessionZeroRequest, CONSTITUTIONS, FALLBACK_QUESTIONS,
    ORIGINS,
};
pub use npc::{scene_is_hostile, Npc};
pub use player::{Gauge, InventoryItem, Player};
pub use quest::{active_count, ActiveQuests, Quest, QuestStatus, Urgency};
pub use skill::{combat_skills, Skill, DEFAULT_COMBAT_SKILLS};
pub use tier::{tier_label, tier_name};
pub use turn::{DeleteResponse, Observation, TurnResponse};
pub use world::{CurrentTurn, WorldTime};
