//! Unified error type for the client.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::network::NetworkError;
use super::session::SessionError;
use super::stream::StreamError;

/// Unified error type.
///
/// Every error eventually either ends up as an `Error` entry in the
/// narrative log or, before the TUI starts, as a report on stderr.
#[derive(Debug)]
pub enum GameError {
    /// Request/response calls to the backend.
    Network(NetworkError),

    /// The turn event stream.
    Stream(StreamError),

    /// Active character persistence.
    Session(SessionError),

    /// Invalid configuration.
    Config { message: String },

    /// Local I/O outside the session store.
    Io(std::io::Error),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<GameError>,
        context: ErrorContext,
    },
}

impl GameError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::Network(err) => match err {
                NetworkError::HttpStatus { status, .. } if *status >= 500 => ErrorCategory::Server,
                NetworkError::HttpStatus { .. } => ErrorCategory::User,
                NetworkError::InvalidResponse { .. } => ErrorCategory::Client,
                _ => ErrorCategory::Network,
            },
            GameError::Stream(err) => match err {
                StreamError::ConnectionFailed { .. } | StreamError::ConnectionLost { .. } => {
                    ErrorCategory::Network
                }
                StreamError::Rejected { status, .. } if *status < 500 => ErrorCategory::User,
                StreamError::Rejected { .. } | StreamError::Backend { .. } => {
                    ErrorCategory::Server
                }
                StreamError::Decode { .. } | StreamError::MalformedFrame { .. } => {
                    ErrorCategory::Client
                }
            },
            GameError::Session(SessionError::NoActivePlayer) => ErrorCategory::User,
            GameError::Session(SessionError::NoDataDir) => ErrorCategory::Configuration,
            GameError::Session(_) => ErrorCategory::System,
            GameError::Config { .. } => ErrorCategory::Configuration,
            GameError::Io(_) => ErrorCategory::System,
            GameError::WithContext { error, .. } => error.category(),
        }
    }

    /// Player-facing message.
    pub fn user_message(&self) -> String {
        match self {
            GameError::Network(err) => err.user_message(),
            GameError::Stream(err) => err.user_message(),
            GameError::Session(err) => err.user_message(),
            GameError::Config { message } => format!("Configuração inválida: {}", message),
            GameError::Io(err) => format!("Erro de E/S: {}", err),
            GameError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            GameError::Network(err) => err.error_code(),
            GameError::Stream(err) => err.error_code(),
            GameError::Session(err) => err.error_code(),
            GameError::Config { .. } => "E_CONFIG",
            GameError::Io(_) => "E_IO",
            GameError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        GameError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            GameError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the innermost error without context.
    pub fn inner(&self) -> &GameError {
        match self {
            GameError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Whether this is the missing-character guard condition.
    pub fn is_missing_player(&self) -> bool {
        matches!(self.inner(), GameError::Session(SessionError::NoActivePlayer))
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Network(err) => write!(f, "{}", err),
            GameError::Stream(err) => write!(f, "{}", err),
            GameError::Session(err) => write!(f, "{}", err),
            GameError::Config { message } => write!(f, "Configuration error: {}", message),
            GameError::Io(err) => write!(f, "I/O error: {}", err),
            GameError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Network(err) => Some(err),
            GameError::Stream(err) => Some(err),
            GameError::Session(err) => Some(err),
            GameError::Config { .. } => None,
            GameError::Io(err) => Some(err),
            GameError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<NetworkError> for GameError {
    fn from(err: NetworkError) -> Self {
        GameError::Network(err)
    }
}

impl From<StreamError> for GameError {
    fn from(err: StreamError) -> Self {
        GameError::Stream(err)
    }
}

impl From<SessionError> for GameError {
    fn from(err: SessionError) -> Self {
        GameError::Session(err)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_categories() {
        let conn: GameError = NetworkError::ConnectionFailed {
            url: "http://localhost:8000".to_string(),
            message: "refused".to_string(),
        }
        .into();
        assert_eq!(conn.category(), ErrorCategory::Network);

        let not_found: GameError = NetworkError::HttpStatus {
            status: 404,
            message: "Player not found".to_string(),
        }
        .into();
        assert_eq!(not_found.category(), ErrorCategory::User);

        let server: GameError = NetworkError::HttpStatus {
            status: 502,
            message: String::new(),
        }
        .into();
        assert_eq!(server.category(), ErrorCategory::Server);
    }

    #[test]
    fn test_stream_categories() {
        let lost: GameError = StreamError::ConnectionLost {
            message: "reset".to_string(),
        }
        .into();
        assert_eq!(lost.category(), ErrorCategory::Network);

        let backend: GameError = StreamError::Backend {
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(backend.category(), ErrorCategory::Server);

        let decode: GameError = StreamError::Decode {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(decode.category(), ErrorCategory::Client);
    }

    #[test]
    fn test_missing_player_through_context() {
        let err: GameError = SessionError::NoActivePlayer.into();
        let err = err.with_context(ErrorContext::new("send_action"));
        assert!(err.is_missing_player());
        assert_eq!(err.category(), ErrorCategory::User);
        assert_eq!(err.context().map(|c| c.operation.as_str()), Some("send_action"));
    }

    #[test]
    fn test_display_with_context() {
        let err: GameError = GameError::Config {
            message: "empty api url".to_string(),
        }
        .with_context(ErrorContext::new("load_config"));
        assert_eq!(
            err.to_string(),
            "Configuration error: empty api url (operation=load_config)"
        );
        assert_eq!(err.error_code(), "E_CONFIG");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GameError = io.into();
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
