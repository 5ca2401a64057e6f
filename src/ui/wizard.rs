//! Character creation wizard screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_GOLD, COLOR_SELECTED_BG, COLOR_TEXT,
};
use crate::models::{CONSTITUTIONS, ORIGINS};
use crate::state::{CreationWizard, IdentityField, WizardStep};

const STEP_COUNT: usize = 4;

fn text_field(label: &str, value: &str, placeholder: &str, active: bool) -> Vec<Line<'static>> {
    let label_style = if active {
        Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let value_line = if value.is_empty() {
        Span::styled(
            placeholder.to_string(),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(value.to_string(), Style::default().fg(COLOR_TEXT))
    };
    let cursor = if active { "█" } else { "" };
    vec![
        Line::from(Span::styled(label.to_string(), label_style)),
        Line::from(vec![Span::raw("  "), value_line, Span::styled(cursor, label_style)]),
        Line::default(),
    ]
}

fn identity_lines(wizard: &CreationWizard) -> Vec<Line<'static>> {
    let mut lines = text_field(
        "Nome",
        &wizard.name,
        "Ex: Zhang Wei, Lin Feng, Xiao Yan...",
        wizard.field == IdentityField::Name,
    );
    lines.extend(text_field(
        "Aparência (opcional)",
        &wizard.appearance,
        "Descreva a aparência do seu personagem...",
        wizard.field == IdentityField::Appearance,
    ));
    lines
}

fn list_style(selected: bool, chosen: bool) -> Style {
    let mut style = Style::default().fg(if chosen { COLOR_GOLD } else { COLOR_TEXT });
    if selected {
        style = style.bg(COLOR_SELECTED_BG).add_modifier(Modifier::BOLD);
    }
    style
}

fn constitution_lines(wizard: &CreationWizard) -> Vec<Line<'static>> {
    let chosen = wizard.constitution().map(|c| c.id);
    let mut lines = Vec::new();
    for (i, constitution) in CONSTITUTIONS.iter().enumerate() {
        let selected = i == wizard.constitution_cursor();
        let mark = if chosen == Some(constitution.id) { "◆" } else { "◇" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", mark, constitution.name),
                list_style(selected, chosen == Some(constitution.id)),
            ),
            Span::styled(
                format!("  ({})", constitution.rarity),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
    }

    if let Some(current) = CONSTITUTIONS.get(wizard.constitution_cursor()) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            current.description,
            Style::default().fg(COLOR_TEXT),
        )));
        for pro in current.pros {
            lines.push(Line::from(Span::styled(
                format!("  + {}", pro),
                Style::default().fg(super::theme::COLOR_URGENCY_COMFORTABLE),
            )));
        }
        for con in current.cons {
            lines.push(Line::from(Span::styled(
                format!("  - {}", con),
                Style::default().fg(COLOR_ERROR),
            )));
        }
    }
    lines
}

fn origin_lines(wizard: &CreationWizard) -> Vec<Line<'static>> {
    let chosen = wizard.origin().map(|o| o.id);
    ORIGINS
        .iter()
        .enumerate()
        .map(|(i, origin)| {
            let selected = i == wizard.origin_cursor();
            let mark = if chosen == Some(origin.id) { "◆" } else { "◇" };
            let danger_color = match origin.danger {
                "Alto" => COLOR_ERROR,
                "Médio" => super::theme::COLOR_URGENCY_PRESSING,
                _ => super::theme::COLOR_URGENCY_COMFORTABLE,
            };
            Line::from(vec![
                Span::styled(
                    format!("{} {}", mark, origin.name),
                    list_style(selected, chosen == Some(origin.id)),
                ),
                Span::styled(
                    format!("  Perigo: {}", origin.danger),
                    Style::default().fg(danger_color),
                ),
            ])
        })
        .collect()
}

fn session_zero_lines(wizard: &CreationWizard) -> Vec<Line<'static>> {
    if wizard.questions().is_empty() {
        return vec![Line::from(Span::styled(
            "Gerando perguntas...",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ))];
    }
    let mut lines = Vec::new();
    for (question, answer) in wizard.questions().iter().zip(wizard.answers()) {
        lines.push(Line::from(Span::styled(
            question.clone(),
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", answer),
            Style::default().fg(COLOR_TEXT),
        )));
    }
    match wizard.current_question() {
        Some((idx, question)) => {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Pergunta {} de {}", idx + 1, wizard.questions().len()),
                Style::default().fg(COLOR_DIM),
            )));
            lines.extend(text_field(question, &wizard.answer, "Sua resposta...", !wizard.is_loading()));
        }
        None => lines.push(Line::from(Span::styled(
            "Criando personagem...",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ))),
    }
    lines
}

fn hint(wizard: &CreationWizard) -> &'static str {
    match wizard.step() {
        WizardStep::Identity => " Tab alterna campo · Enter avançar · Esc voltar",
        WizardStep::Constitution | WizardStep::Origin => " ↑↓ escolher · Enter confirmar · Esc voltar",
        WizardStep::SessionZero => " Enter responder · Esc voltar",
    }
}

pub fn render_wizard(frame: &mut Frame, area: Rect, wizard: &CreationWizard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let step = wizard.step();
    let header = vec![
        Line::from(Span::styled(
            "Criação de Personagem",
            Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Etapa {} de {}", step.number(), STEP_COUNT),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(header).alignment(ratatui::layout::Alignment::Center),
        chunks[0],
    );

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", step.title()),
            Style::default().fg(COLOR_GOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let lines = match step {
        WizardStep::Identity => identity_lines(wizard),
        WizardStep::Constitution => constitution_lines(wizard),
        WizardStep::Origin => origin_lines(wizard),
        WizardStep::SessionZero => session_zero_lines(wizard),
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    let status = match (wizard.status(), wizard.is_loading()) {
        (Some(status), _) => Span::styled(status.to_string(), Style::default().fg(COLOR_ERROR)),
        (None, true) => Span::styled("Aguarde...", Style::default().fg(COLOR_DIM)),
        (None, false) => Span::raw(""),
    };
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[2]);
    frame.render_widget(
        Paragraph::new(Span::styled(hint(wizard), Style::default().fg(COLOR_DIM))),
        chunks[3],
    );
}
