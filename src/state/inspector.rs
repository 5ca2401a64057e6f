//! NPC inspector panel state.

use crate::models::Npc;

/// Shown when observing an NPC fails or returns nothing.
pub const OBSERVE_FALLBACK: &str = "Sua percepção falha em discernir os detalhes.";

#[derive(Debug, Default)]
pub struct NpcInspector {
    selected: Option<Npc>,
    observing: bool,
    description: Option<String>,
}

impl NpcInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&Npc> {
        self.selected.as_ref()
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Select an NPC and start observing it.
    pub fn begin_observe(&mut self, npc: Npc) {
        self.selected = Some(npc);
        self.observing = true;
        self.description = None;
    }

    /// Store the observation for `npc_id`. Stale results for a previously
    /// selected NPC are dropped. Returns whether the result was applied.
    pub fn apply_observation(&mut self, npc_id: i64, description: Option<String>) -> bool {
        if self.selected.as_ref().map(|n| n.id) != Some(npc_id) {
            return false;
        }
        self.observing = false;
        self.description = Some(
            description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| OBSERVE_FALLBACK.to_string()),
        );
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
