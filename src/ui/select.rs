//! Character selection screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_GOLD, COLOR_SELECTED_BG, COLOR_TEXT};
use crate::app::App;
use crate::models::{tier_name, Player};

fn player_line(player: &Player, selected: bool, confirming: bool) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let mut name_style = Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD);
    let mut detail_style = Style::default().fg(COLOR_TEXT);
    if selected {
        name_style = name_style.bg(COLOR_SELECTED_BG);
        detail_style = detail_style.bg(COLOR_SELECTED_BG);
    }
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(COLOR_GOLD)),
        Span::styled(player.name.clone(), name_style),
        Span::styled(
            format!(
                "  {} · {} · {} · {} ouro",
                player.constitution_type,
                tier_name(player.cultivation_tier),
                player.location(),
                player.gold
            ),
            detail_style,
        ),
    ];
    if confirming {
        spans.push(Span::styled(
            "  d de novo para confirmar, Esc cancela",
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

pub fn render_select(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = vec![
        Line::from(Span::styled(
            "Selecione Seu Cultivador",
            Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Escolha um personagem ou crie um novo",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(title).alignment(ratatui::layout::Alignment::Center),
        chunks[0],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let list = &app.select;
    let mut lines = Vec::new();
    if let Some(error) = &list.error {
        lines.push(Line::from(Span::styled(
            format!("Erro: {}", error),
            Style::default().fg(COLOR_ERROR),
        )));
    }
    if list.loading {
        lines.push(Line::from(Span::styled(
            "Carregando cultivadores...",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )));
    } else if list.players.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nenhum cultivador encontrado. Pressione n para criar um.",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )));
    } else {
        let pending = list.pending_delete();
        for (i, player) in list.players.iter().enumerate() {
            let selected = i == list.cursor();
            lines.push(player_line(player, selected, selected && pending == Some(player.id)));
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " ↑↓ escolher · Enter jogar · n novo · v viajante rápido · d excluir · r recarregar · q sair",
            Style::default().fg(COLOR_DIM),
        )),
        chunks[2],
    );
}
