//! Command-line argument parsing for the Triluna client.
//!
//! One command per invocation plus options that adjust the configuration.
//! With no command the TUI runs.

use crate::error::GameError;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print every character on the backend
    List,
    /// Delete a character by id
    Delete(i64),
    /// Forget the active character
    Logout,
    /// Run the TUI application (default)
    RunTui,
}

/// Command plus configuration overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--api-url <url>`, wins over `TRILUNA_API_URL`
    pub api_url: Option<String>,
    /// `--no-stream`: use the blocking turn endpoint
    pub no_stream: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            command: CliCommand::RunTui,
            api_url: None,
            no_stream: false,
        }
    }
}

pub const USAGE: &str = "\
Uso: triluna [opções] [comando]

Comandos:
  --list              lista os cultivadores
  --delete <id>       exclui um cultivador
  --logout            esquece o cultivador ativo
  -V, --version       mostra a versão
  -h, --help          mostra esta ajuda

Opções:
  --api-url <url>     endereço do servidor (padrão: TRILUNA_API_URL)
  --no-stream         resolve turnos sem streaming

Sem comando, abre o jogo.";

fn usage_error(message: impl Into<String>) -> GameError {
    GameError::Config {
        message: message.into(),
    }
}

/// Parse command-line arguments.
///
/// The first argument (program name) is skipped. The first command flag
/// wins; later ones are ignored. Unknown flags are errors.
///
/// # Examples
///
/// ```
/// use triluna::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["triluna".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, GameError>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut command = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let next = match arg.as_str() {
            "--version" | "-V" => Some(CliCommand::Version),
            "--help" | "-h" => Some(CliCommand::Help),
            "--list" => Some(CliCommand::List),
            "--logout" => Some(CliCommand::Logout),
            "--delete" => {
                let raw = args
                    .next()
                    .ok_or_else(|| usage_error("--delete requires a character id"))?;
                let id = raw
                    .parse::<i64>()
                    .map_err(|_| usage_error(format!("invalid character id: '{}'", raw)))?;
                Some(CliCommand::Delete(id))
            }
            "--api-url" => {
                let url = args
                    .next()
                    .ok_or_else(|| usage_error("--api-url requires a value"))?;
                parsed.api_url = Some(url);
                None
            }
            "--no-stream" => {
                parsed.no_stream = true;
                None
            }
            other => return Err(usage_error(format!("unknown argument: '{}'", other))),
        };
        if command.is_none() {
            command = next;
        }
    }

    parsed.command = command.unwrap_or(CliCommand::RunTui);
    Ok(parsed)
}
