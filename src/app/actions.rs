//! Spawned API calls and slash command execution.
//!
//! Every call runs on its own tokio task and reports back with a single
//! [`AppMessage`]; nothing here blocks the UI loop.

use std::future::Future;

use tracing::{debug, info};

use super::{App, AppMessage, GameCommand, HELP_LINES};
use crate::error::NetworkError;
use crate::models::{CreateCharacterRequest, SessionZeroRequest};
use crate::state::OverlayKind;

/// Name used by the quick create on the selection screen.
pub const QUICK_CREATE_NAME: &str = "Viajante";

impl App {
    /// Run `task` on the runtime and deliver its message to the UI loop.
    fn spawn_task<F>(&self, task: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(task.await);
        });
    }

    pub fn load_players(&mut self) {
        self.select.begin_loading();
        let client = self.client.clone();
        self.spawn_task(async move { AppMessage::PlayersLoaded(client.list_players().await) });
    }

    pub fn delete_player(&mut self, player_id: i64) {
        info!(player_id, "Deleting character");
        self.select.begin_loading();
        let client = self.client.clone();
        self.spawn_task(async move {
            AppMessage::PlayerDeleted {
                player_id,
                result: client.delete_player(player_id).await,
            }
        });
    }

    pub fn quick_create(&mut self) {
        self.select.begin_loading();
        let client = self.client.clone();
        self.spawn_task(async move {
            AppMessage::PlayerCreated(client.create_player(QUICK_CREATE_NAME).await)
        });
    }

    pub fn fetch_questions(&mut self, request: SessionZeroRequest) {
        let client = self.client.clone();
        self.spawn_task(async move {
            AppMessage::QuestionsLoaded(client.session_zero_questions(&request).await)
        });
    }

    pub fn create_character(&mut self, request: CreateCharacterRequest) {
        info!(name = %request.name, constitution = %request.constitution, "Creating character");
        let client = self.client.clone();
        self.spawn_task(async move {
            AppMessage::CharacterCreated(client.create_character(&request).await)
        });
    }

    /// Fetch the sheet after a turn that did not carry it.
    pub fn refresh_player(&mut self, player_id: i64) {
        let client = self.client.clone();
        self.spawn_task(async move { AppMessage::PlayerRefreshed(client.get_player(player_id).await) });
    }

    pub fn refresh_world_time(&mut self) {
        let client = self.client.clone();
        self.spawn_task(async move { AppMessage::WorldTimeLoaded(client.world_time().await) });
    }

    /// Open an overlay in its loading state and fetch its data.
    pub fn open_overlay(&mut self, kind: OverlayKind) {
        let player_id = match kind {
            OverlayKind::Skills => None,
            _ => match self.session.require_player() {
                Ok(id) => Some(id),
                Err(e) => {
                    self.narrative.push_error(e.user_message());
                    return;
                }
            },
        };
        self.overlay.open(kind);
        let client = self.client.clone();
        match (kind, player_id) {
            (OverlayKind::QuestLog, Some(id)) => {
                self.quest_log.begin_loading();
                self.spawn_task(async move {
                    let result = async {
                        let quests = client.active_quests(id).await?;
                        let turn = client.current_turn().await?;
                        Ok::<_, NetworkError>((quests, turn))
                    }
                    .await;
                    AppMessage::QuestsLoaded(result)
                });
            }
            (OverlayKind::Sheet, Some(id)) => {
                self.spawn_task(async move { AppMessage::SheetLoaded(client.get_player(id).await) });
            }
            (OverlayKind::Inventory, Some(id)) => {
                self.spawn_task(async move {
                    AppMessage::InventoryLoaded(client.inventory(id).await)
                });
            }
            (OverlayKind::Skills, _) => {
                self.spawn_task(async move { AppMessage::SkillsLoaded(client.skills().await) });
            }
            _ => {}
        }
        self.mark_dirty();
    }

    /// Select the NPC at `position` (1-based) and observe it.
    pub fn observe(&mut self, position: usize) {
        let Some(npc) = self.turn.npc_at(position).cloned() else {
            self.narrative
                .push_error(format!("Não há NPC na posição {}.", position));
            return;
        };
        let npc_id = npc.id;
        debug!(npc_id, "Observing NPC");
        self.inspector.begin_observe(npc);
        let client = self.client.clone();
        self.spawn_task(async move {
            AppMessage::Observed {
                npc_id,
                result: client.observe_npc(npc_id).await,
            }
        });
        self.mark_dirty();
    }

    /// Execute one parsed line of game input.
    pub fn execute(&mut self, command: GameCommand) {
        match command {
            GameCommand::Action(text) => self.send_action(&text),
            GameCommand::Attack { target, skill } => self.attack(target, skill.as_deref()),
            GameCommand::Observe(position) => self.observe(position),
            GameCommand::Quests => self.open_overlay(OverlayKind::QuestLog),
            GameCommand::Sheet => self.open_overlay(OverlayKind::Sheet),
            GameCommand::Inventory => self.open_overlay(OverlayKind::Inventory),
            GameCommand::Skills => self.open_overlay(OverlayKind::Skills),
            GameCommand::Time => self.refresh_world_time(),
            GameCommand::Logout => self.logout(),
            GameCommand::Help => {
                for line in HELP_LINES {
                    self.narrative.push_system(line);
                }
            }
            GameCommand::Quit => self.quit(),
            GameCommand::Invalid(message) => self.narrative.push_error(message),
        }
        self.mark_dirty();
    }
}
