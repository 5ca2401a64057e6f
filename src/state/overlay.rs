//! Popup overlays opened by slash commands.

use crate::models::{InventoryItem, Player, Skill};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    QuestLog,
    Sheet,
    Inventory,
    Skills,
}

impl OverlayKind {
    pub fn title(&self) -> &'static str {
        match self {
            OverlayKind::QuestLog => "REGISTRO DE MISSÕES",
            OverlayKind::Sheet => "FICHA DO CULTIVADOR",
            OverlayKind::Inventory => "INVENTÁRIO",
            OverlayKind::Skills => "HABILIDADES",
        }
    }
}

/// Which overlay is open and the data fetched for it.
///
/// Quest data lives in [`super::QuestLogView`].
#[derive(Debug, Default)]
pub struct OverlayState {
    open: Option<OverlayKind>,
    pub sheet: Option<Player>,
    pub inventory: Vec<InventoryItem>,
    pub skills: Vec<Skill>,
    pub loading: bool,
    pub error: Option<String>,
    pub scroll: u16,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<OverlayKind> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open `kind` in its loading state.
    pub fn open(&mut self, kind: OverlayKind) {
        self.open = Some(kind);
        self.loading = true;
        self.error = None;
        self.scroll = 0;
    }

    pub fn close(&mut self) {
        self.open = None;
        self.loading = false;
    }

    /// Whether a late result for `kind` should still be shown.
    pub fn accepts(&self, kind: OverlayKind) -> bool {
        self.open == Some(kind)
    }

    pub fn apply_sheet(&mut self, player: Player) {
        self.sheet = Some(player);
        self.loading = false;
    }

    pub fn apply_inventory(&mut self, items: Vec<InventoryItem>) {
        self.inventory = items;
        self.loading = false;
    }

    pub fn apply_skills(&mut self, skills: Vec<Skill>) {
        self.skills = skills;
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn scroll_by(&mut self, delta: i16) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }
}
