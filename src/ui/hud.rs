//! Header bar and the player HUD.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use super::theme::{gauge_color, COLOR_BORDER, COLOR_DIM, COLOR_GOLD, COLOR_TEXT};
use crate::app::App;
use crate::models::{tier_label, Player};

/// Rows the HUD needs inside its border.
pub const HUD_CONTENT_HEIGHT: u16 = 8;

/// Title on the left, world clock on the right.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(1)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Códice Triluna",
        Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    let clock = match &app.turn.world_time {
        Some(time) => Span::styled(format!("{} ", time), Style::default().fg(COLOR_TEXT)),
        None => Span::styled("Sincronizando o relógio... ", Style::default().fg(COLOR_DIM)),
    };
    frame.render_widget(
        Paragraph::new(Line::from(clock)).alignment(ratatui::layout::Alignment::Right),
        chunks[1],
    );
}

/// Name, tier, the four pools, gold and location.
pub fn render_hud(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(player) = app.turn.player.as_ref() else {
        frame.render_widget(
            Paragraph::new("Carregando status...").style(Style::default().fg(COLOR_DIM)),
            inner,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            player.name.as_str(),
            Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(tier_label(player.cultivation_tier))
            .style(Style::default().fg(COLOR_TEXT))
            .alignment(ratatui::layout::Alignment::Center),
        rows[1],
    );

    for (i, gauge) in player.gauges().iter().enumerate() {
        let widget = Gauge::default()
            .gauge_style(Style::default().fg(gauge_color(i)).bg(ratatui::style::Color::Black))
            .ratio(gauge.ratio())
            .label(format!("{} {}", gauge.label, gauge.label_value()));
        frame.render_widget(widget, rows[2 + i]);
    }

    frame.render_widget(Paragraph::new(gold_line(player)), rows[6]);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Local: ", Style::default().fg(COLOR_DIM)),
            Span::styled(player.location().to_string(), Style::default().fg(COLOR_TEXT)),
        ])),
        rows[7],
    );
}

fn gold_line(player: &Player) -> Line<'static> {
    Line::from(vec![
        Span::styled("Ouro: ", Style::default().fg(COLOR_DIM)),
        Span::styled(player.gold.to_string(), Style::default().fg(COLOR_GOLD)),
    ])
}
