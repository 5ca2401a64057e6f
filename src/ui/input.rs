//! Action input, combat skill grid and keybind hints.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_GOLD, COLOR_TEXT};
use crate::app::App;
use crate::widgets::InputBoxWidget;

/// Input box rows including its border
pub const INPUT_BOX_HEIGHT: u16 = 3;

/// Combat grid rows including its border
pub const COMBAT_GRID_HEIGHT: u16 = 4;

/// Height of the whole input area for the current state.
pub fn input_area_height(app: &App) -> u16 {
    let grid = if app.turn.in_combat() {
        COMBAT_GRID_HEIGHT
    } else {
        0
    };
    grid + INPUT_BOX_HEIGHT + 1
}

pub fn render_input_area(frame: &mut Frame, area: Rect, app: &App) {
    let in_combat = app.turn.in_combat();
    let grid = if in_combat { COMBAT_GRID_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(grid),
            Constraint::Length(INPUT_BOX_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    if in_combat {
        render_combat_grid(frame, chunks[0], app);
    }

    let enabled = app.input_enabled() && !app.overlay.is_open();
    let (title, placeholder) = if app.turn.is_in_flight() {
        (" Aguarde ", "O destino está sendo tecido...")
    } else {
        (" Ação ", "O que você faz? (/help para comandos)")
    };
    frame.render_widget(
        InputBoxWidget::new(&app.input, title, enabled).placeholder(placeholder),
        chunks[1],
    );

    frame.render_widget(Paragraph::new(keybind_line(app)), chunks[2]);
}

/// Skills by grid position and the hostile targets by scene position.
fn render_combat_grid(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " COMBATE ",
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut skills = vec![Span::styled("Habilidades: ", Style::default().fg(COLOR_DIM))];
    for (i, skill) in app.turn.combat_skills().iter().enumerate() {
        skills.push(Span::styled(
            format!("[{}] {}  ", i + 1, skill),
            Style::default().fg(COLOR_GOLD),
        ));
    }

    let mut targets = vec![Span::styled("Alvos: ", Style::default().fg(COLOR_DIM))];
    for (i, npc) in app.turn.npcs.iter().enumerate() {
        if npc.is_hostile() {
            targets.push(Span::styled(
                format!("[{}] {}  ", i + 1, npc.name),
                Style::default().fg(COLOR_TEXT),
            ));
        }
    }

    let lines = vec![Line::from(skills), Line::from(targets)];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn keybind_line(app: &App) -> Line<'static> {
    let style = Style::default().fg(COLOR_DIM);
    let hint = if app.overlay.is_open() {
        " Esc fechar · ↑↓ rolar"
    } else if app.turn.in_combat() {
        " /attack <alvo> [habilidade] · /observe <n> · PgUp/PgDn rolar · Ctrl+C sair"
    } else {
        " Enter enviar · /help comandos · PgUp/PgDn rolar · Ctrl+C sair"
    };
    Line::from(Span::styled(hint, style))
}
