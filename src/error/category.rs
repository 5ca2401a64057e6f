//! Error category classification.
//!
//! Categories drive how an error is presented: whether the player is told
//! to simply try the action again, to check the backend, or to fix input.

use std::fmt;

/// High-level categorization of client errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Backend unreachable, connection dropped, timeouts.
    Network,

    /// Backend answered with a 5xx or reported a failure mid-turn.
    Server,

    /// Malformed data that the client could not interpret.
    Client,

    /// Something the player has to fix (missing character, bad input).
    User,

    /// Local filesystem and OS errors.
    System,

    /// Invalid configuration (bad API URL, unusable data directory).
    Configuration,
}

impl ErrorCategory {
    /// Whether the same action is likely to succeed if the player submits it again.
    ///
    /// The client never resubmits on its own; this only shapes the hint text.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Hint appended to error entries in the narrative log.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Verifique se o servidor do jogo está acessível.",
            ErrorCategory::Server => "O servidor encontrou um problema. Tente a ação novamente.",
            ErrorCategory::Client => "Resposta inesperada do servidor.",
            ErrorCategory::User => "Revise sua entrada e tente novamente.",
            ErrorCategory::System => "Verifique as permissões do diretório de dados.",
            ErrorCategory::Configuration => "Verifique TRILUNA_API_URL e TRILUNA_DATA_DIR.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_transient() {
        assert!(ErrorCategory::Network.is_transient());
        assert!(ErrorCategory::Server.is_transient());
        assert!(!ErrorCategory::Client.is_transient());
        assert!(!ErrorCategory::User.is_transient());
        assert!(!ErrorCategory::System.is_transient());
        assert!(!ErrorCategory::Configuration.is_transient());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Network), "network");
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }

    #[test]
    fn test_recovery_hints_present() {
        for cat in [
            ErrorCategory::Network,
            ErrorCategory::Server,
            ErrorCategory::Client,
            ErrorCategory::User,
            ErrorCategory::System,
            ErrorCategory::Configuration,
        ] {
            assert!(!cat.recovery_hint().is_empty());
        }
    }
}
