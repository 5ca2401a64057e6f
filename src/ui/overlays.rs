//! Popup overlays: quest log, character sheet, inventory and skills.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::dialog::render_dialog_frame;
use super::theme::{
    COLOR_DIM, COLOR_ERROR, COLOR_GOLD, COLOR_TEXT, COLOR_URGENCY_COMFORTABLE,
    COLOR_URGENCY_CRITICAL, COLOR_URGENCY_PRESSING,
};
use crate::app::App;
use crate::models::{tier_label, InventoryItem, Player, Quest, Skill, Urgency};
use crate::state::{OverlayKind, QuestLogView};

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
    ))
}

fn dim(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
    ))
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value.into(), Style::default().fg(COLOR_TEXT)),
    ])
}

fn urgency_color(urgency: Urgency) -> ratatui::style::Color {
    match urgency {
        Urgency::Comfortable | Urgency::Completed => COLOR_URGENCY_COMFORTABLE,
        Urgency::Pressing => COLOR_URGENCY_PRESSING,
        Urgency::Critical | Urgency::Failed => COLOR_URGENCY_CRITICAL,
    }
}

/// Quest log body.
pub fn quest_lines(view: &QuestLogView) -> Vec<Line<'static>> {
    if view.loading {
        return vec![dim("Consultando o registro de missões...")];
    }
    if let Some(error) = &view.error {
        return vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        ))];
    }

    let mut lines = vec![heading(&view.header()), Line::default()];
    if view.quests.is_empty() {
        lines.push(dim("Nenhuma missão disponível"));
        return lines;
    }
    for quest in &view.quests {
        push_quest(quest, view.current_turn, &mut lines);
    }
    lines.push(dim("Missões falham automaticamente ao atingir o prazo limite"));
    lines
}

fn push_quest(quest: &Quest, current_turn: i64, lines: &mut Vec<Line<'static>>) {
    let urgency = quest.urgency(current_turn);
    lines.push(Line::from(vec![
        Span::styled(
            quest.title.clone(),
            Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}] {}", quest.type_label(), quest.status.label()),
            Style::default().fg(COLOR_DIM),
        ),
    ]));
    if !quest.description.is_empty() {
        lines.push(Line::from(Span::styled(
            quest.description.clone(),
            Style::default().fg(COLOR_TEXT),
        )));
    }
    lines.push(field(
        "Progresso",
        format!(
            "{}/{} ({:.0}%)",
            quest.current_progress,
            quest.required_progress,
            quest.progress_percent()
        ),
    ));
    let remaining = quest.turns_remaining(current_turn);
    let deadline = if remaining > 0 {
        format!("Prazo: {} turnos restantes", remaining)
    } else {
        "Prazo: EXPIRADO".to_string()
    };
    lines.push(Line::from(Span::styled(
        deadline,
        Style::default().fg(urgency_color(urgency)),
    )));
    let rewards = quest.reward_summary();
    if !rewards.is_empty() {
        lines.push(field("Recompensas", rewards));
    }
    lines.push(Line::default());
}

/// Character sheet body.
pub fn sheet_lines(player: &Player) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(&player.name),
        field("Cultivo", tier_label(player.cultivation_tier)),
        field("Constituição", player.constitution_type.clone()),
        field(
            "Origem",
            if player.origin_location.is_empty() {
                "Desconhecida".to_string()
            } else {
                player.origin_location.clone()
            },
        ),
        field(
            "Aparência",
            player
                .appearance
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| "Não especificada".to_string()),
        ),
        field("Local", player.location().to_string()),
        Line::default(),
    ];
    for gauge in player.gauges() {
        lines.push(field(gauge.label, gauge.label_value()));
    }
    lines.push(field("Força", format!("{}", player.strength.round())));
    lines.push(field("Defesa", format!("{}", player.defense.round())));
    lines.push(field("Velocidade", format!("{}", player.speed.round())));
    lines.push(field("Força de Vontade", format!("{}", player.willpower.round())));
    lines.push(field("Corrupção", format!("{}", player.corruption.round())));
    lines.push(field("Ouro", player.gold.to_string()));
    lines.push(Line::default());

    lines.push(heading("Habilidades Aprendidas"));
    if player.learned_skills.is_empty() {
        lines.push(dim("Nenhuma habilidade aprendida ainda"));
    } else {
        for skill in &player.learned_skills {
            lines.push(Line::from(format!("• {}", skill)));
        }
    }

    if let Some(backstory) = player.backstory.as_deref().filter(|b| !b.is_empty()) {
        lines.push(Line::default());
        lines.push(heading("História"));
        for line in backstory.split('\n') {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(COLOR_TEXT),
            )));
        }
    }
    lines
}

/// Inventory body.
pub fn inventory_lines(items: &[InventoryItem]) -> Vec<Line<'static>> {
    if items.is_empty() {
        return vec![dim("Inventário vazio")];
    }
    let mut lines = Vec::new();
    for item in items {
        let mut spans = vec![Span::styled(
            item.display_name(),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )];
        if let Some(price) = item.buy_price {
            spans.push(Span::styled(
                format!("  {} ouro", price),
                Style::default().fg(COLOR_GOLD),
            ));
        }
        lines.push(Line::from(spans));
        let details = item.details();
        if !details.is_empty() {
            lines.push(Line::from(Span::styled(details, Style::default().fg(COLOR_DIM))));
        }
    }
    lines
}

/// Skill catalog body.
pub fn skill_lines(skills: &[Skill]) -> Vec<Line<'static>> {
    if skills.is_empty() {
        return vec![dim("Nenhuma habilidade catalogada")];
    }
    let mut lines = Vec::new();
    for skill in skills {
        lines.push(Line::from(vec![
            Span::styled(
                skill.name.clone(),
                Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({}) Tier {}", skill.skill_id, skill.tier_requirement),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
        lines.push(field("Custo", skill.cost_label()));
        if !skill.description.is_empty() {
            lines.push(Line::from(Span::styled(
                skill.description.clone(),
                Style::default().fg(COLOR_TEXT),
            )));
        }
        lines.push(Line::default());
    }
    lines
}

/// Render the open overlay, if any, over everything else.
pub fn render_overlay(frame: &mut Frame, app: &App) {
    let Some(kind) = app.overlay.current() else {
        return;
    };
    let inner = render_dialog_frame(frame, frame.area(), kind.title());

    let lines = match kind {
        OverlayKind::QuestLog => quest_lines(&app.quest_log),
        _ if app.overlay.loading => vec![dim(match kind {
            OverlayKind::Sheet => "Carregando dados do cultivador...",
            _ => "Carregando...",
        })],
        _ if app.overlay.error.is_some() => vec![Line::from(Span::styled(
            app.overlay.error.clone().unwrap_or_default(),
            Style::default().fg(COLOR_ERROR),
        ))],
        OverlayKind::Sheet => match &app.overlay.sheet {
            Some(player) => sheet_lines(player),
            None => vec![dim("Carregando dados do cultivador...")],
        },
        OverlayKind::Inventory => inventory_lines(&app.overlay.inventory),
        OverlayKind::Skills => skill_lines(&app.overlay.skills),
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.overlay.scroll, 0)),
        inner,
    );
}
