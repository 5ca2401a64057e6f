//! Message and key handlers for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use super::{App, AppMessage, Screen};
use crate::models::Player;
use crate::state::{OverlayKind, WizardAdvance, WizardStep};

/// Lines moved by PageUp/PageDown in the narrative.
const PAGE_SCROLL: u16 = 10;

impl App {
    /// Handle an async message from a spawned task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PlayersLoaded(result) => match result {
                Ok(players) => self.select.apply(players),
                Err(e) => {
                    warn!(error = %e, "Could not list characters");
                    self.select.fail(e.user_message());
                }
            },
            AppMessage::PlayerDeleted { player_id, result } => match result {
                Ok(response) => {
                    info!(player_id, "Character deleted");
                    if self.session.player_id() == Some(player_id) {
                        if let Err(e) = self.session.clear() {
                            warn!(error = %e, "Could not clear session");
                        }
                    }
                    if !response.success {
                        if let Some(message) = response.message {
                            self.select.error = Some(message);
                        }
                    }
                    self.load_players();
                }
                Err(e) => self.select.fail(e.user_message()),
            },
            AppMessage::PlayerCreated(result) => match result {
                Ok(player) => self.welcome_new(player),
                Err(e) => self.select.fail(e.user_message()),
            },
            AppMessage::QuestionsLoaded(questions) => {
                if self.screen == Screen::Creation {
                    self.wizard.apply_questions(questions);
                }
            }
            AppMessage::CharacterCreated(result) => {
                if self.screen != Screen::Creation {
                    return;
                }
                match result {
                    Ok(player) => self.welcome_new(player),
                    Err(e) => {
                        warn!(error = %e, code = e.error_code(), "Character creation failed");
                        self.wizard.fail_submit();
                    }
                }
            }
            AppMessage::PlayerRefreshed(result) => match result {
                Ok(player) if self.session.player_id() == Some(player.id) => {
                    self.turn.player = Some(player)
                }
                Ok(_) => {}
                Err(e) => warn!(error = %e, "Could not refresh character sheet"),
            },
            AppMessage::SheetLoaded(result) => {
                if !self.overlay.accepts(OverlayKind::Sheet) {
                    return;
                }
                match result {
                    Ok(player) => self.overlay.apply_sheet(player),
                    Err(e) => self.overlay.fail(e.user_message()),
                }
            }
            AppMessage::InventoryLoaded(items) => {
                if self.overlay.accepts(OverlayKind::Inventory) {
                    self.overlay.apply_inventory(items);
                }
            }
            AppMessage::SkillsLoaded(result) => {
                if !self.overlay.accepts(OverlayKind::Skills) {
                    return;
                }
                match result {
                    Ok(skills) => self.overlay.apply_skills(skills),
                    Err(e) => self.overlay.fail(e.user_message()),
                }
            }
            AppMessage::QuestsLoaded(result) => {
                match result {
                    Ok((quests, turn)) => self.quest_log.apply(quests, turn),
                    Err(e) => self.quest_log.fail(e.user_message()),
                }
                if self.overlay.accepts(OverlayKind::QuestLog) {
                    self.overlay.loading = false;
                }
            }
            AppMessage::WorldTimeLoaded(result) => match result {
                Ok(time) => self.turn.world_time = Some(time),
                Err(e) => warn!(error = %e, "Could not read world time"),
            },
            AppMessage::Observed { npc_id, result } => {
                let description = match result {
                    Ok(observation) => Some(observation.description),
                    Err(e) => {
                        warn!(npc_id, error = %e, "Observation failed");
                        None
                    }
                };
                self.inspector.apply_observation(npc_id, description);
            }
            AppMessage::TurnResolved {
                correlation_id,
                result,
            } => self.apply_turn_resolved(&correlation_id, result),
            AppMessage::NarratorChunk {
                correlation_id,
                text,
            } => self.apply_narrator_chunk(&correlation_id, &text),
            AppMessage::StageUpdate {
                correlation_id,
                text,
            } => self.apply_stage(&correlation_id, text),
            AppMessage::TurnDone {
                correlation_id,
                done,
            } => self.apply_turn_done(&correlation_id, done),
            AppMessage::TurnFailed {
                correlation_id,
                error,
            } => self.apply_turn_failed(&correlation_id, error),
            AppMessage::StreamClosed {
                correlation_id,
                outcome,
            } => self.apply_stream_closed(&correlation_id, outcome),
        }
    }

    /// A character was just created: make it active and enter the world.
    fn welcome_new(&mut self, player: Player) {
        info!(player_id = player.id, "Character created");
        let greeting = format!("Bem-vindo, {}.", player.name);
        let (id, name) = (player.id, player.name.clone());
        self.select_character(id, &name, greeting);
        self.turn.player = Some(player);
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        self.mark_dirty();
        match self.screen {
            Screen::CharacterSelect => self.handle_select_key(key),
            Screen::Creation => self.handle_wizard_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn handle_select_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.select.move_cursor(-1),
            KeyCode::Down => self.select.move_cursor(1),
            KeyCode::Enter => {
                if let Some(player) = self.select.selected().cloned() {
                    let greeting = format!("Bem-vindo de volta, {}.", player.name);
                    self.select_character(player.id, &player.name, greeting);
                    self.turn.player = Some(player);
                }
            }
            KeyCode::Char('n') => self.open_wizard(),
            KeyCode::Char('v') => self.quick_create(),
            KeyCode::Char('r') => self.load_players(),
            KeyCode::Char('d') => {
                if let Some(player_id) = self.select.request_delete() {
                    self.delete_player(player_id);
                }
            }
            KeyCode::Esc if self.select.pending_delete().is_some() => self.select.cancel_delete(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        let step = self.wizard.step();
        match key.code {
            KeyCode::Esc => {
                if !self.wizard.back() && !self.wizard.is_loading() {
                    self.show_select();
                }
            }
            KeyCode::Enter => match step {
                WizardStep::Constitution | WizardStep::Origin => {
                    self.wizard.choose();
                    self.advance_wizard();
                }
                WizardStep::Identity => self.advance_wizard(),
                WizardStep::SessionZero => {
                    if let Some(request) = self.wizard.submit_answer() {
                        self.create_character(request);
                    }
                }
            },
            KeyCode::Tab if step == WizardStep::Identity => self.wizard.toggle_field(),
            KeyCode::Up => self.wizard.move_cursor(-1),
            KeyCode::Down => self.wizard.move_cursor(1),
            KeyCode::Backspace => self.wizard.backspace(),
            KeyCode::Char(c) => self.wizard.input_char(c),
            _ => {}
        }
    }

    fn advance_wizard(&mut self) {
        if let WizardAdvance::NeedQuestions(request) = self.wizard.advance() {
            self.fetch_questions(request);
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        if self.overlay.is_open() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.overlay.close(),
                KeyCode::Up => self.overlay.scroll_by(-1),
                KeyCode::Down => self.overlay.scroll_by(1),
                KeyCode::PageUp => self.overlay.scroll_by(-(PAGE_SCROLL as i16)),
                KeyCode::PageDown => self.overlay.scroll_by(PAGE_SCROLL as i16),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::PageUp => {
                self.narrative_scroll = self.narrative_scroll.saturating_add(PAGE_SCROLL)
            }
            KeyCode::PageDown => {
                self.narrative_scroll = self.narrative_scroll.saturating_sub(PAGE_SCROLL)
            }
            KeyCode::Esc => self.inspector.clear(),
            _ if !self.input_enabled() => {}
            KeyCode::Enter => self.submit_input(),
            KeyCode::Up => {
                let current = self.input.content().to_string();
                if let Some(entry) = self.history.older(&current).map(str::to_string) {
                    self.input.set_content(entry);
                }
            }
            KeyCode::Down => {
                if let Some(entry) = self.history.newer().map(str::to_string) {
                    self.input.set_content(entry);
                }
            }
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete_char(),
            KeyCode::Char(c) => self.input.insert_char(c),
            _ => {}
        }
    }

    /// Insert pasted text into the action input.
    pub fn handle_paste(&mut self, text: &str) {
        if self.input_enabled() && !self.overlay.is_open() {
            self.input.insert_str(text);
            self.mark_dirty();
        }
    }
}
