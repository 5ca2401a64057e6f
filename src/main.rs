use triluna::adapters::{FileSessionStore, ReqwestHttpClient};
use triluna::api::GameClient;
use triluna::app::{App, Screen};
use triluna::cli::{parse_args, run_cli_command, CliArgs};
use triluna::config::ClientConfig;
use triluna::input_history::InputHistory;
use triluna::session::SessionContext;
use triluna::terminal::{install_panic_hook, TerminalManager};
use triluna::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tracing::{error, info};

/// Frame tick for the spinner and redraws.
const TICK: Duration = Duration::from_millis(16);

fn build_config(args: &CliArgs) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &args.api_url {
        config = config.with_api_url(url.clone())?;
    }
    if args.no_stream {
        config = config.with_streaming(false);
    }
    Ok(config)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args(std::env::args())?;
    let config = build_config(&args)?;
    let log_path = logging::init(&config.data_dir)?;
    info!(
        version = triluna::cli::VERSION,
        api_url = %config.api_url,
        streaming = config.streaming,
        log = %log_path.display(),
        "Starting"
    );

    let http = ReqwestHttpClient::new().with_request_timeout(config.request_timeout());
    let client = GameClient::new(config.api_url.clone(), Arc::new(http));
    let mut session = SessionContext::new(Arc::new(FileSessionStore::in_dir(&config.data_dir)));
    session.load();

    let runtime = tokio::runtime::Runtime::new()?;

    if let Some(result) = runtime.block_on(run_cli_command(&args.command, &client, &mut session)) {
        return result;
    }

    install_panic_hook();

    let history = InputHistory::load(&config.data_dir);
    let mut app = App::new(client, session, config.streaming).with_history(history);

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(async {
        app.start();
        run_app(manager.terminal(), &mut app, config.clock_poll_interval()).await
    });
    manager.restore();

    if let Err(e) = &result {
        error!(error = %e, "Exited with error");
    }
    info!("Exited");
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    clock_poll: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app.take_receiver();
    let mut clock = interval_at(Instant::now() + clock_poll, clock_poll);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            _ = clock.tick() => {
                if app.screen == Screen::Game {
                    app.refresh_world_time();
                }
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                        app.mark_dirty();
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                        app.mark_dirty();
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!(error = %e, "Terminal event stream failed");
                        app.quit();
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                    app.mark_dirty();
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
