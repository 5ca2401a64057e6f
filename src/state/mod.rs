//! Client-side game state
//!
//! Plain state containers mutated by the application loop:
//! - [`NarrativeLog`]: everything said during play
//! - [`TurnState`]: active character, scene and the in-flight turn
//! - [`NpcInspector`]: the NPC being observed
//! - [`QuestLogView`] and [`OverlayState`]: popup data
//! - [`CharacterList`]: character selection
//! - [`CreationWizard`]: the four-step character creation
//! - [`LoadingRotation`]: flavor line while a turn resolves

mod inspector;
mod loading;
mod narrative;
mod overlay;
mod quest_log;
mod select;
mod turn;
mod wizard;

pub use inspector::{NpcInspector, OBSERVE_FALLBACK};
pub use loading::{LoadingKind, LoadingRotation};
pub use narrative::{EntryKind, NarrativeEntry, NarrativeLog, MAX_ENTRIES};
pub use overlay::{OverlayKind, OverlayState};
pub use quest_log::QuestLogView;
pub use select::CharacterList;
pub use turn::TurnState;
pub use wizard::{CreationWizard, IdentityField, WizardAdvance, WizardStep, CREATE_FAILED};
