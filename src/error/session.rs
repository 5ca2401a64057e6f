//! Session (active character) errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors around the locally persisted active character.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An action needs a character but none is selected.
    #[error("no active character selected")]
    NoActivePlayer,

    /// The session file could not be read.
    #[error("failed to read session file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The session file could not be written or removed.
    #[error("failed to write session file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The session file exists but is not valid JSON.
    #[error("session file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No data directory could be determined.
    #[error("could not determine a data directory")]
    NoDataDir,
}

impl SessionError {
    /// Player-facing message.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::NoActivePlayer => {
                "Nenhum cultivador selecionado. Crie ou escolha um personagem.".to_string()
            }
            SessionError::Read { .. } | SessionError::Corrupt { .. } => {
                "Não foi possível carregar a sessão salva.".to_string()
            }
            SessionError::Write { .. } => "Não foi possível salvar a sessão.".to_string(),
            SessionError::NoDataDir => "Diretório de dados indisponível.".to_string(),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::NoActivePlayer => "E_SESSION_NONE",
            SessionError::Read { .. } => "E_SESSION_READ",
            SessionError::Write { .. } => "E_SESSION_WRITE",
            SessionError::Corrupt { .. } => "E_SESSION_CORRUPT",
            SessionError::NoDataDir => "E_SESSION_DIR",
        }
    }
}
