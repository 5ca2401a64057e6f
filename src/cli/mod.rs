//! CLI module for the Triluna client.
//!
//! - Argument parsing
//! - Version and usage display
//! - One-shot character commands (list, delete, logout)
//!
//! # Usage
//!
//! Parse early in `main()`, build the client from the adjusted
//! configuration, then give the command a chance to run before the TUI
//! starts:
//!
//! ```ignore
//! use triluna::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&args.command, &client, &mut session).await {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, USAGE};
pub use commands::{delete_character, list_characters, logout};
pub use version::{version_line, VERSION};

use color_eyre::Result;

use crate::api::GameClient;
use crate::session::SessionContext;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub async fn run_cli_command(
    command: &CliCommand,
    client: &GameClient,
    session: &mut SessionContext,
) -> Option<Result<()>> {
    let mut out = std::io::stdout();
    let result = match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::List => list_characters(client, session, &mut out).await,
        CliCommand::Delete(id) => delete_character(client, session, *id, &mut out).await,
        CliCommand::Logout => logout(session, &mut out),
        CliCommand::RunTui => return None,
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionStore, MockHttpClient};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_run_tui_returns_none() {
        let client = GameClient::new("http://test", Arc::new(MockHttpClient::new()));
        let mut session = SessionContext::new(Arc::new(InMemorySessionStore::new()));
        let result = run_cli_command(&CliCommand::RunTui, &client, &mut session).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_version_runs() {
        let client = GameClient::new("http://test", Arc::new(MockHttpClient::new()));
        let mut session = SessionContext::new(Arc::new(InMemorySessionStore::new()));
        let result = run_cli_command(&CliCommand::Version, &client, &mut session).await;
        assert!(matches!(result, Some(Ok(()))));
    }
}
