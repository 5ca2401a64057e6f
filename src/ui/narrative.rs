//! Narrative log with the loading line, anchored to the bottom.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::helpers::{estimate_wrapped_line_count, spinner_frame};
use super::theme::{COLOR_BORDER, COLOR_ERROR, COLOR_GOLD, COLOR_STAGE, COLOR_SYSTEM, COLOR_TEXT};
use crate::app::App;
use crate::state::{EntryKind, NarrativeEntry};

fn entry_style(kind: EntryKind) -> Style {
    match kind {
        EntryKind::Player => Style::default()
            .fg(COLOR_GOLD)
            .add_modifier(Modifier::ITALIC),
        EntryKind::Narrator => Style::default().fg(COLOR_TEXT),
        EntryKind::Error => Style::default()
            .fg(COLOR_ERROR)
            .add_modifier(Modifier::BOLD),
        EntryKind::System => Style::default().fg(COLOR_SYSTEM),
        EntryKind::Stage => Style::default().fg(COLOR_STAGE),
    }
}

/// Lines for one entry plus the blank separator that follows it. Stage
/// lines are kept together.
fn entry_lines(entry: &NarrativeEntry, out: &mut Vec<Line<'static>>) {
    let style = entry_style(entry.kind);
    for line in entry.display_text().split('\n') {
        out.push(Line::from(Span::styled(line.to_string(), style)));
    }
    if entry.kind != EntryKind::Stage {
        out.push(Line::default());
    }
}

/// Build every narrative line, the loading line last.
pub fn narrative_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in app.narrative.entries() {
        entry_lines(entry, &mut lines);
    }
    if let Some(message) = app.loading_line {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(app.tick_count)),
                Style::default().fg(COLOR_GOLD),
            ),
            Span::styled(
                message,
                Style::default().fg(COLOR_GOLD).add_modifier(Modifier::ITALIC),
            ),
        ]));
    }
    lines
}

pub fn render_narrative(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = narrative_lines(app);
    let total: usize = lines
        .iter()
        .map(|line| estimate_wrapped_line_count(&line.to_string(), inner.width))
        .sum();
    let bottom = total.saturating_sub(inner.height as usize);
    let scroll = bottom.saturating_sub(app.narrative_scroll as usize);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}
