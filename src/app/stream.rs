//! Turn submission and streamed turn processing for the App.
//!
//! A submitted action gets a correlation id. The spawned task forwards
//! stream callbacks as [`AppMessage`]s tagged with that id, and the
//! handlers drop anything whose id no longer matches the in-flight turn.

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::{App, AppMessage};
use crate::error::{NetworkError, StreamError};
use crate::models::TurnResponse;
use crate::sse::{
    ActionCallbacks, ConsumeOutcome, ExecutorUpdate, PlannerUpdate, TurnComplete, ValidatorUpdate,
};
use crate::state::{EntryKind, LoadingKind};

/// Shown when an action is sent before a character is active.
pub const MISSING_PLAYER: &str = "Ainda criando o jogador...";

/// "Planejando: atacar → Lobo Sombrio"
pub fn planner_line(update: &PlannerUpdate) -> String {
    match (&update.intent, &update.target) {
        (Some(intent), Some(target)) => format!("Planejando: {} → {}", intent, target),
        (Some(intent), None) => format!("Planejando: {}", intent),
        (None, Some(target)) => format!("Planejando: → {}", target),
        (None, None) => "Planejando...".to_string(),
    }
}

/// "Execução bem-sucedida: <summary>" or "Execução falhou: <summary>"
pub fn executor_line(update: &ExecutorUpdate) -> String {
    let head = match update.success {
        Some(true) => "Execução bem-sucedida",
        Some(false) => "Execução falhou",
        None => "Executando",
    };
    match &update.summary {
        Some(summary) => format!("{}: {}", head, summary),
        None => format!("{}...", head),
    }
}

/// "Validação: approved (2 tentativas)"
pub fn validator_line(update: &ValidatorUpdate) -> String {
    let status = update.status.as_deref().unwrap_or("em andamento");
    match update.attempts {
        Some(1) => format!("Validação: {} (1 tentativa)", status),
        Some(n) => format!("Validação: {} ({} tentativas)", status, n),
        None => format!("Validação: {}", status),
    }
}

impl App {
    /// Submit the input box: record it in history and run it.
    pub fn submit_input(&mut self) {
        if !self.input_enabled() {
            return;
        }
        let text = self.input.take();
        self.history.reset_navigation();
        if let Some(command) = super::GameCommand::parse(&text) {
            self.history.add(&text);
            self.execute(command);
        }
    }

    /// Send a free-text action for the active character.
    ///
    /// Ignored while another turn is in flight.
    pub fn send_action(&mut self, input: &str) {
        if self.turn.is_in_flight() {
            return;
        }
        let Some(player_id) = self.session.player_id() else {
            self.narrative.push(EntryKind::Error, MISSING_PLAYER);
            return;
        };

        self.narrative.push_player(input);
        self.inspector.clear();
        self.narrative_scroll = 0;

        let correlation_id = Uuid::new_v4().to_string();
        if !self.turn.begin(correlation_id.clone()) {
            return;
        }
        let kind = if self.first_turn {
            LoadingKind::Init
        } else {
            LoadingKind::for_action(input, self.turn.world_ticked())
        };
        self.first_turn = false;
        self.loading_line = Some(self.loading.next(kind));
        info!(player_id, correlation_id = %correlation_id, streaming = self.streaming, "Submitting action");

        if self.streaming {
            self.spawn_stream(player_id, input.to_string(), correlation_id);
        } else {
            self.spawn_blocking_turn(player_id, input.to_string(), correlation_id);
        }
        self.mark_dirty();
    }

    /// `/attack`: attack the scene NPC at `target` (1-based) with a combat
    /// skill given by id or grid position, defaulting to the first.
    pub fn attack(&mut self, target: usize, skill: Option<&str>) {
        if !self.turn.in_combat() {
            self.narrative
                .push_error("Você não está em combate.");
            return;
        }
        let Some(npc) = self.turn.npc_at(target) else {
            self.narrative
                .push_error(format!("Não há NPC na posição {}.", target));
            return;
        };
        if !npc.is_hostile() {
            self.narrative
                .push_error(format!("{} não é um alvo hostil.", npc.name));
            return;
        }
        let skills = self.turn.combat_skills();
        let skill_id = match skill {
            None => skills.first().cloned(),
            Some(arg) => match arg.parse::<usize>() {
                Ok(position) => position.checked_sub(1).and_then(|i| skills.get(i)).cloned(),
                Err(_) => skills.iter().find(|s| s.as_str() == arg).cloned(),
            },
        };
        let Some(skill_id) = skill_id else {
            self.narrative
                .push_error(format!("Habilidade desconhecida: {}", skill.unwrap_or_default()));
            return;
        };
        let action = format!("Eu ataco {} usando {}", npc.name, skill_id);
        self.send_action(&action);
    }

    fn spawn_stream(&self, player_id: i64, input: String, correlation_id: String) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let span = info_span!("turn", correlation_id = %correlation_id);

        tokio::spawn(
            async move {
                let mut callbacks = stream_callbacks(&tx, &correlation_id);
                let outcome = client.stream_turn(player_id, &input, &mut callbacks).await;
                info!(
                    completed = outcome.is_completed(),
                    dispatched = outcome.dispatched,
                    done = outcome.done_received,
                    "Turn stream closed"
                );
                let _ = tx.send(AppMessage::StreamClosed {
                    correlation_id,
                    outcome,
                });
            }
            .instrument(span),
        );
    }

    fn spawn_blocking_turn(&self, player_id: i64, input: String, correlation_id: String) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let span = info_span!("turn", correlation_id = %correlation_id);

        tokio::spawn(
            async move {
                let result = client.play_turn(player_id, &input).await;
                if let Err(e) = &result {
                    warn!(error = %e, code = e.error_code(), "Turn failed");
                }
                let _ = tx.send(AppMessage::TurnResolved {
                    correlation_id,
                    result,
                });
            }
            .instrument(span),
        );
    }

    /// Whether a turn message belongs to the in-flight turn.
    fn is_current_turn(&self, correlation_id: &str) -> bool {
        self.turn.correlation_id() == Some(correlation_id)
    }

    pub(super) fn apply_turn_resolved(
        &mut self,
        correlation_id: &str,
        result: Result<TurnResponse, NetworkError>,
    ) {
        if !self.is_current_turn(correlation_id) {
            return;
        }
        match result {
            Ok(turn) => {
                if !turn.scene_description.is_empty() {
                    self.narrative.push_narrator(turn.scene_description.clone());
                }
                if let Some(result) = turn.action_result.as_deref().filter(|r| !r.is_empty()) {
                    self.narrative.push_narrator(result);
                }
                self.turn.apply_turn(&turn);
            }
            Err(e) => self.narrative.push_error(e.user_message()),
        }
        self.end_turn();
    }

    pub(super) fn apply_narrator_chunk(&mut self, correlation_id: &str, text: &str) {
        if self.is_current_turn(correlation_id) {
            self.narrative.append_chunk(text);
        }
    }

    pub(super) fn apply_stage(&mut self, correlation_id: &str, text: String) {
        if self.is_current_turn(correlation_id) {
            self.narrative.push_stage(text);
        }
    }

    pub(super) fn apply_turn_done(&mut self, correlation_id: &str, done: TurnComplete) {
        if !self.is_current_turn(correlation_id) {
            return;
        }
        self.narrative.close_narration();
        let needs_sheet = self.turn.apply_done(&done);
        if needs_sheet {
            if let Some(player_id) = self.session.player_id() {
                self.refresh_player(player_id);
            }
        }
        if done.world_ticked() {
            self.narrative
                .push_system("O mundo avançou enquanto você agia.");
            self.refresh_world_time();
        }
    }

    pub(super) fn apply_turn_failed(&mut self, correlation_id: &str, error: StreamError) {
        if !self.is_current_turn(correlation_id) {
            return;
        }
        warn!(error = %error, code = error.error_code(), "Turn stream failed");
        self.narrative.push_error(error.user_message());
    }

    pub(super) fn apply_stream_closed(&mut self, correlation_id: &str, outcome: ConsumeOutcome) {
        if !self.is_current_turn(correlation_id) {
            return;
        }
        if outcome.is_completed() && !outcome.done_received {
            warn!(dispatched = outcome.dispatched, "Turn stream ended without done");
        }
        self.end_turn();
    }

    fn end_turn(&mut self) {
        self.narrative.close_narration();
        self.turn.finish();
        self.loading_line = None;
    }
}

/// Callbacks forwarding every stream event to the UI loop.
fn stream_callbacks(
    tx: &tokio::sync::mpsc::UnboundedSender<AppMessage>,
    correlation_id: &str,
) -> ActionCallbacks {
    let chunk_tx = tx.clone();
    let chunk_id = correlation_id.to_string();
    let planner_tx = tx.clone();
    let planner_id = correlation_id.to_string();
    let executor_tx = tx.clone();
    let executor_id = correlation_id.to_string();
    let validator_tx = tx.clone();
    let validator_id = correlation_id.to_string();
    let done_tx = tx.clone();
    let done_id = correlation_id.to_string();
    let error_tx = tx.clone();
    let error_id = correlation_id.to_string();

    ActionCallbacks::new()
        .on_narrator_chunk(move |chunk| {
            let _ = chunk_tx.send(AppMessage::NarratorChunk {
                correlation_id: chunk_id.clone(),
                text: chunk.text,
            });
        })
        .on_planner(move |update| {
            let _ = planner_tx.send(AppMessage::StageUpdate {
                correlation_id: planner_id.clone(),
                text: planner_line(&update),
            });
        })
        .on_executor(move |update| {
            let _ = executor_tx.send(AppMessage::StageUpdate {
                correlation_id: executor_id.clone(),
                text: executor_line(&update),
            });
        })
        .on_validator(move |update| {
            let _ = validator_tx.send(AppMessage::StageUpdate {
                correlation_id: validator_id.clone(),
                text: validator_line(&update),
            });
        })
        .on_done(move |done| {
            let _ = done_tx.send(AppMessage::TurnDone {
                correlation_id: done_id.clone(),
                done,
            });
        })
        .on_error(move |error| {
            let _ = error_tx.send(AppMessage::TurnFailed {
                correlation_id: error_id.clone(),
                error,
            });
        })
}
