//! UI rendering for the Triluna client
//!
//! Three screens, chosen by [`Screen`]:
//! - Character selection: list, quick create and delete
//! - Creation: the four-step wizard
//! - Game: header with the world clock, a side column (HUD, NPCs present,
//!   NPC inspector) and the main column (narrative log, input)
//!
//! Overlays (quest log, sheet, inventory, skills) are drawn last as
//! centered popups. Narrow terminals stack the side column on top, see
//! [`LayoutContext`].

mod dialog;
mod helpers;
mod hud;
mod input;
mod layout;
mod narrative;
mod overlays;
mod scene;
mod select;
mod theme;
mod wizard;

pub use helpers::{estimate_wrapped_line_count, truncate_string, SPINNER_FRAMES};
pub use layout::{breakpoints, LayoutContext};
pub use narrative::narrative_lines;
pub use overlays::{inventory_lines, quest_lines, sheet_lines, skill_lines};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders},
    Frame,
};

use crate::app::{App, Screen};
use hud::{render_header, render_hud, HUD_CONTENT_HEIGHT};
use theme::COLOR_BORDER;

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = outer.inner(size);
    frame.render_widget(outer, size);

    match app.screen {
        Screen::CharacterSelect => select::render_select(frame, inner, app),
        Screen::Creation => wizard::render_wizard(frame, inner, &app.wizard),
        Screen::Game => render_game(frame, inner, app),
    }

    overlays::render_overlay(frame, app);
}

fn render_game(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(6)])
        .split(area);
    render_header(frame, chunks[0], app);

    let ctx = LayoutContext::from_rect(chunks[1]);
    let (side, main) = ctx.game_columns(chunks[1]);
    render_side_column(frame, side, app, &ctx);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(input::input_area_height(app)),
        ])
        .split(main);
    narrative::render_narrative(frame, main_chunks[0], app);
    input::render_input_area(frame, main_chunks[1], app);
}

fn render_side_column(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    if ctx.is_narrow() {
        // Stacked: HUD and NPCs side by side in a short band.
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        render_hud(frame, chunks[0], app);
        if app.inspector.selected().is_some() {
            scene::render_inspector(frame, chunks[1], &app.inspector);
        } else {
            scene::render_npcs(frame, chunks[1], app);
        }
        return;
    }

    let inspector_height = if app.inspector.selected().is_some() { 9 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HUD_CONTENT_HEIGHT + 2),
            Constraint::Min(3),
            Constraint::Length(inspector_height),
        ])
        .split(area);
    render_hud(frame, chunks[0], app);
    scene::render_npcs(frame, chunks[1], app);
    scene::render_inspector(frame, chunks[2], &app.inspector);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionStore, MockHttpClient};
    use crate::api::GameClient;
    use crate::models::{Npc, Player, Quest, QuestStatus};
    use crate::session::SessionContext;
    use crate::state::{EntryKind, OverlayKind};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn create_test_app() -> App {
        let client = GameClient::new("http://test", Arc::new(MockHttpClient::new()));
        let session = SessionContext::new(Arc::new(InMemorySessionStore::new()));
        App::new(client, session, true)
    }

    fn draw(app: &App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn game_app() -> App {
        let mut app = create_test_app();
        app.screen = Screen::Game;
        let mut player = Player::placeholder(1, "Lin Feng");
        player.cultivation_tier = 3;
        player.gold = 250;
        player.current_location = "Vila Tranquila".to_string();
        app.turn.player = Some(player);
        app
    }

    fn hostile_wolf() -> Npc {
        Npc {
            id: 7,
            name: "Lobo Sombrio".to_string(),
            emotional_state: "hostile".to_string(),
            ..Npc::default()
        }
    }

    #[test]
    fn test_select_screen_empty_list() {
        let app = create_test_app();
        let text = buffer_text(&draw(&app, 100, 24));
        assert!(text.contains("Selecione Seu Cultivador"));
        assert!(text.contains("Nenhum cultivador encontrado"));
    }

    #[test]
    fn test_select_screen_lists_players() {
        let mut app = create_test_app();
        app.select
            .apply(vec![Player::placeholder(1, "Lin"), Player::placeholder(2, "Mei")]);
        let text = buffer_text(&draw(&app, 100, 24));
        assert!(text.contains("▸ Lin"));
        assert!(text.contains("Mei"));
    }

    #[test]
    fn test_wizard_shows_step_number() {
        let mut app = create_test_app();
        app.screen = Screen::Creation;
        let text = buffer_text(&draw(&app, 100, 24));
        assert!(text.contains("Etapa 1 de 4"));
        assert!(text.contains("Nome do Cultivador"));
    }

    #[test]
    fn test_game_screen_hud_and_scene() {
        let app = game_app();
        let text = buffer_text(&draw(&app, 120, 40));
        assert!(text.contains("Lin Feng"));
        assert!(text.contains("Tier 3 · Ascensão"));
        assert!(text.contains("Ouro: 250"));
        assert!(text.contains("Vila Tranquila"));
        assert!(text.contains("Presentes na Cena:"));
        assert!(text.contains("Ninguém à vista."));
        assert!(text.contains("Sincronizando o relógio"));
    }

    #[test]
    fn test_game_screen_narrative_and_loading_line() {
        let mut app = game_app();
        app.narrative.push_player("olhar ao redor");
        app.narrative.push(EntryKind::Narrator, "A névoa cobre a floresta.");
        app.loading_line = Some("O karma se manifesta...");
        let text = buffer_text(&draw(&app, 120, 40));
        assert!(text.contains("> olhar ao redor"));
        assert!(text.contains("A névoa cobre a floresta."));
        assert!(text.contains("O karma se manifesta..."));
    }

    #[test]
    fn test_combat_grid_when_hostile() {
        let mut app = game_app();
        app.turn.npcs = vec![hostile_wolf()];
        let text = buffer_text(&draw(&app, 120, 40));
        assert!(text.contains("COMBATE"));
        assert!(text.contains("[1] meteor_soul"));
        assert!(text.contains("[2] shadowstep"));
        assert!(text.contains(" 1. Lobo Sombrio"));
    }

    #[test]
    fn test_inspector_panel() {
        let mut app = game_app();
        app.turn.npcs = vec![hostile_wolf()];
        app.inspector.begin_observe(hostile_wolf());
        app.inspector
            .apply_observation(7, Some("Olhos vermelhos na escuridão.".to_string()));
        let text = buffer_text(&draw(&app, 120, 40));
        assert!(text.contains("Estado Emocional: hostil"));
        assert!(text.contains("Olhos vermelhos"));
    }

    #[test]
    fn test_quest_overlay() {
        let mut app = game_app();
        app.overlay.open(OverlayKind::QuestLog);
        app.quest_log.quests = vec![Quest {
            id: 1,
            quest_type: "hunt".to_string(),
            title: "Caçar lobos".to_string(),
            description: String::new(),
            location: None,
            status: QuestStatus::Active,
            current_progress: 1,
            required_progress: 4,
            deadline_turn: 30,
            reward_xp: 100.0,
            reward_gold: 20,
            reward_items: Vec::new(),
        }];
        app.quest_log.current_turn = 12;
        let text = buffer_text(&draw(&app, 120, 40));
        assert!(text.contains("REGISTRO DE MISSÕES"));
        assert!(text.contains("Turno Atual: 12 | Missões Ativas: 1"));
        assert!(text.contains("Caçar lobos"));
        assert!(text.contains("18 turnos restantes"));
    }

    #[test]
    fn test_empty_quest_log_text() {
        let lines = quest_lines(&crate::state::QuestLogView::new());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l == "Nenhuma missão disponível"));
    }

    #[test]
    fn test_sheet_overlay_loading_and_skills() {
        let mut app = game_app();
        app.overlay.open(OverlayKind::Sheet);
        let text = buffer_text(&draw(&app, 120, 40));
        assert!(text.contains("Carregando dados do cultivador..."));

        let lines = sheet_lines(&Player::placeholder(1, "Lin"));
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l == "Habilidades Aprendidas"));
        assert!(text.iter().any(|l| l == "Nenhuma habilidade aprendida ainda"));
    }

    #[test]
    fn test_empty_inventory_text() {
        let lines = inventory_lines(&[]);
        assert_eq!(lines[0].to_string(), "Inventário vazio");
    }

    #[test]
    fn test_narrow_terminal_renders() {
        let mut app = game_app();
        app.turn.npcs = vec![hostile_wolf()];
        let text = buffer_text(&draw(&app, 60, 20));
        assert!(text.contains("Lin Feng"));
    }
}
