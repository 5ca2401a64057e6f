//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`AppMessage`] - Results of spawned API tasks
//! - [`GameCommand`] - Parsed slash commands
//!
//! Key handling lives in `handlers`, spawned API calls in `actions` and
//! turn submission in `stream`.

mod actions;
mod commands;
mod handlers;
mod messages;
mod stream;

pub use commands::{GameCommand, HELP_LINES};
pub use messages::AppMessage;
pub use stream::{executor_line, planner_line, validator_line};

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::api::GameClient;
use crate::input_history::InputHistory;
use crate::session::SessionContext;
use crate::state::{
    CharacterList, CreationWizard, LoadingRotation, NarrativeLog, NpcInspector, OverlayState,
    QuestLogView, TurnState,
};
use crate::widgets::InputBox;

/// First action sent when entering the world.
pub const LOOK_AROUND: &str = "olhar ao redor";

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// List, create or delete characters
    #[default]
    CharacterSelect,
    /// Four-step creation wizard
    Creation,
    /// Playing
    Game,
}

/// Main application state
pub struct App {
    /// Current screen being displayed
    pub screen: Screen,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Backend client (clones share one HTTP client)
    pub client: GameClient,
    /// Active character
    pub session: SessionContext,
    /// Use the event-stream turn endpoint instead of the blocking one
    pub streaming: bool,
    /// Everything said during play
    pub narrative: NarrativeLog,
    /// Player sheet, scene and in-flight turn
    pub turn: TurnState,
    /// Selected NPC and its observation
    pub inspector: NpcInspector,
    /// Quest log overlay data
    pub quest_log: QuestLogView,
    /// Which overlay is open and its data
    pub overlay: OverlayState,
    /// Character creation wizard
    pub wizard: CreationWizard,
    /// Character selection list
    pub select: CharacterList,
    /// Action input
    pub input: InputBox,
    /// Up/Down recall of submitted inputs
    pub history: InputHistory,
    /// Flavor line rotation while a turn resolves
    pub loading: LoadingRotation,
    /// Flavor line shown for the in-flight turn
    pub loading_line: Option<&'static str>,
    /// Lines scrolled up from the bottom of the narrative
    pub narrative_scroll: u16,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for async messages, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// No action has been sent yet in this run
    pub first_turn: bool,
}

impl App {
    pub fn new(client: GameClient, session: SessionContext, streaming: bool) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::default(),
            should_quit: false,
            client,
            session,
            streaming,
            narrative: NarrativeLog::new(),
            turn: TurnState::new(),
            inspector: NpcInspector::new(),
            quest_log: QuestLogView::new(),
            overlay: OverlayState::new(),
            wizard: CreationWizard::new(),
            select: CharacterList::new(),
            input: InputBox::new(),
            history: InputHistory::new(),
            loading: LoadingRotation::new(),
            loading_line: None,
            narrative_scroll: 0,
            tick_count: 0,
            needs_redraw: true,
            message_tx,
            message_rx: Some(message_rx),
            first_turn: true,
        }
    }

    /// Use a persisted input history.
    pub fn with_history(mut self, history: InputHistory) -> Self {
        self.history = history;
        self
    }

    /// Hand the message receiver to the event loop. Returns None after the
    /// first call.
    pub fn take_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<AppMessage>> {
        self.message_rx.take()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Only the loading spinner moves.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.turn.is_in_flight() {
            self.mark_dirty();
        }
    }

    /// Resume the stored character, or show character selection.
    pub fn start(&mut self) {
        let resumed = self
            .session
            .load()
            .map(|s| (s.player_id, s.player_name.clone()));
        match resumed {
            Some((player_id, name)) => {
                info!(player_id, "Resuming session");
                self.enter_game(player_id, &name, format!("Bem-vindo de volta, {}.", name));
            }
            None => self.show_select(),
        }
    }

    /// Switch to the game screen for `player_id`, greet and look around.
    ///
    /// The session must already point at this character.
    pub fn enter_game(&mut self, player_id: i64, name: &str, greeting: String) {
        self.screen = Screen::Game;
        self.narrative.clear();
        self.turn.reset();
        self.turn.player = Some(crate::models::Player::placeholder(player_id, name));
        self.inspector.clear();
        self.overlay.close();
        self.input.clear();
        self.narrative_scroll = 0;
        self.narrative.push_narrator(greeting);
        self.refresh_world_time();
        self.send_action(LOOK_AROUND);
        self.mark_dirty();
    }

    /// Make the chosen character active and enter the game.
    pub fn select_character(&mut self, player_id: i64, name: &str, greeting: String) {
        if let Err(e) = self.session.save(player_id, name) {
            warn!(error = %e, code = e.error_code(), "Could not persist session");
        }
        self.enter_game(player_id, name, greeting);
    }

    /// Show character selection and reload the list.
    pub fn show_select(&mut self) {
        self.screen = Screen::CharacterSelect;
        self.select.cancel_delete();
        self.load_players();
        self.mark_dirty();
    }

    /// Open the creation wizard from scratch.
    pub fn open_wizard(&mut self) {
        self.wizard = CreationWizard::new();
        self.screen = Screen::Creation;
        self.mark_dirty();
    }

    /// Forget the active character and return to selection.
    ///
    /// An in-flight turn keeps running but its messages are ignored.
    pub fn logout(&mut self) {
        if let Err(e) = self.session.clear() {
            warn!(error = %e, code = e.error_code(), "Could not clear session");
        }
        info!("Logged out");
        self.turn.reset();
        self.narrative.clear();
        self.inspector.clear();
        self.overlay.close();
        self.loading_line = None;
        self.first_turn = true;
        self.show_select();
    }

    pub fn quit(&mut self) {
        self.history.save();
        self.should_quit = true;
    }

    /// Whether the action input accepts typing.
    pub fn input_enabled(&self) -> bool {
        self.screen == Screen::Game && !self.turn.is_in_flight()
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("session", &self.session)
            .field("streaming", &self.streaming)
            .field("in_flight", &self.turn.is_in_flight())
            .finish_non_exhaustive()
    }
}
