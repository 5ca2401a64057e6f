//! NPCs present in the scene and the NPC inspector.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::helpers::truncate_string;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_GOLD, COLOR_TEXT};
use crate::app::App;
use crate::state::NpcInspector;

/// Numbered NPC list; the numbers are what `/observe` and `/attack` take.
pub fn render_npcs(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " Presentes na Cena: ",
            Style::default().fg(COLOR_GOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.turn.npcs.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Ninguém à vista.",
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
            )),
            inner,
        );
        return;
    }

    let selected = app.inspector.selected().map(|n| n.id);
    let width = inner.width.saturating_sub(5) as usize;
    let lines: Vec<Line> = app
        .turn
        .npcs
        .iter()
        .enumerate()
        .map(|(i, npc)| {
            let color = if npc.is_hostile() { COLOR_ERROR } else { COLOR_TEXT };
            let mut style = Style::default().fg(color);
            if selected == Some(npc.id) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(COLOR_DIM)),
                Span::styled(truncate_string(&npc.name, width), style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Details of the observed NPC. Draws nothing when no NPC is selected.
pub fn render_inspector(frame: &mut Frame, area: Rect, inspector: &NpcInspector) {
    let Some(npc) = inspector.selected() else {
        return;
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", npc.name),
            Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_GOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Rank: ", Style::default().fg(COLOR_DIM)),
            Span::styled(npc.rank.to_string(), Style::default().fg(COLOR_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Estado Emocional: ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                npc.emotional_state_label().to_string(),
                Style::default().fg(COLOR_TEXT).add_modifier(Modifier::ITALIC),
            ),
        ]),
        Line::default(),
    ];
    if inspector.is_observing() {
        lines.push(Line::from(Span::styled(
            "Observando...",
            Style::default().fg(COLOR_DIM),
        )));
    } else if let Some(description) = inspector.description() {
        lines.push(Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::ITALIC),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
