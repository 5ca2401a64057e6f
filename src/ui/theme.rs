//! Color theme constants for the Triluna UI
//!
//! Dark background with gold accents, after the game's web palette.

use ratatui::style::Color;

// ============================================================================
// Base palette
// ============================================================================

/// Panel borders
pub const COLOR_BORDER: Color = Color::Rgb(120, 96, 40);

/// Titles, headers and the player's own lines
pub const COLOR_GOLD: Color = Color::Rgb(212, 175, 55);

/// Body text
pub const COLOR_TEXT: Color = Color::Rgb(225, 220, 205);

/// Less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Errors and hostile NPCs
pub const COLOR_ERROR: Color = Color::Rgb(200, 60, 60);

/// Client notices
pub const COLOR_SYSTEM: Color = Color::Rgb(110, 160, 200);

/// Planner/executor/validator progress lines
pub const COLOR_STAGE: Color = Color::Rgb(128, 128, 128);

/// Highlighted list entry background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(50, 40, 20);

/// Popup background
pub const COLOR_DIALOG_BG: Color = Color::Rgb(15, 12, 10);

// ============================================================================
// Gauges
// ============================================================================

pub const COLOR_HP: Color = Color::Rgb(190, 50, 50);
pub const COLOR_QUINTESSENCE: Color = Color::Rgb(220, 190, 80);
pub const COLOR_SHADOW_CHI: Color = Color::Rgb(130, 80, 190);
pub const COLOR_YUAN_QI: Color = Color::Rgb(70, 160, 200);

/// Gauge color by HUD position (HP, Quintessence, Shadow Chi, Yuan Qi).
pub fn gauge_color(index: usize) -> Color {
    match index {
        0 => COLOR_HP,
        1 => COLOR_QUINTESSENCE,
        2 => COLOR_SHADOW_CHI,
        _ => COLOR_YUAN_QI,
    }
}

// ============================================================================
// Quests
// ============================================================================

pub const COLOR_URGENCY_COMFORTABLE: Color = Color::Rgb(80, 170, 90);
pub const COLOR_URGENCY_PRESSING: Color = Color::Rgb(220, 170, 50);
pub const COLOR_URGENCY_CRITICAL: Color = COLOR_ERROR;
