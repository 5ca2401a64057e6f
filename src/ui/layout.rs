//! Responsive layout
//!
//! The game screen puts the HUD column left of the narrative. Narrow
//! terminals stack it above instead.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal width breakpoints
pub mod breakpoints {
    /// Below this the side column is stacked on top
    pub const NARROW_WIDTH: u16 = 80;
    /// Below this the stacked column loses the NPC panels
    pub const SHORT_HEIGHT: u16 = 24;
}

/// Side column width on wide terminals
pub const SIDE_COLUMN_WIDTH: u16 = 34;

/// Terminal dimensions for responsive decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::NARROW_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SHORT_HEIGHT
    }

    /// Split the game body into (side column, main column).
    pub fn game_columns(&self, area: Rect) -> (Rect, Rect) {
        let chunks = if self.is_narrow() {
            let side = if self.is_short() { 6 } else { 10 };
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(side), Constraint::Min(6)])
                .split(area)
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDE_COLUMN_WIDTH), Constraint::Min(20)])
                .split(area)
        };
        (chunks[0], chunks[1])
    }

    /// Popup size: most of the screen, capped for readability.
    pub fn popup_size(&self) -> (u16, u16) {
        let width = (self.width.saturating_mul(4) / 5).clamp(20, 90);
        let height = (self.height.saturating_mul(4) / 5).clamp(8, 40);
        (width, height)
    }
}
