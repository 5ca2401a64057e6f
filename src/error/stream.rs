//! Action-stream error types.
//!
//! Every variant except [`StreamError::MalformedFrame`] is terminal for the
//! stream it occurred on and is reported through the `error` callback once.

use std::fmt;

use crate::traits::HttpError;

/// Errors raised while consuming the turn event stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError {
    /// The stream endpoint answered with a non-success status.
    Rejected { status: u16, message: String },

    /// The stream could not be opened at all.
    ConnectionFailed { message: String },

    /// The connection dropped while reading.
    ConnectionLost { message: String },

    /// The byte stream was not valid UTF-8.
    Decode { message: String },

    /// The backend sent an `error` event.
    Backend { message: String },

    /// A `data:` line that is not JSON or does not fit its event.
    ///
    /// Logged and skipped, never delivered to callbacks.
    MalformedFrame { event_type: String, message: String },
}

impl StreamError {
    /// Classify the failure to open a stream.
    pub fn from_open_error(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => StreamError::Rejected { status, message },
            other => StreamError::ConnectionFailed {
                message: other.to_string(),
            },
        }
    }

    /// Classify a transport error raised mid-stream.
    pub fn from_read_error(err: HttpError) -> Self {
        StreamError::ConnectionLost {
            message: err.to_string(),
        }
    }

    /// Player-facing message.
    pub fn user_message(&self) -> String {
        match self {
            StreamError::Rejected { message, .. } if !message.is_empty() => {
                format!("O servidor recusou a ação: {}", message)
            }
            StreamError::Rejected { status, .. } => {
                format!("O servidor recusou a ação (HTTP {}).", status)
            }
            StreamError::ConnectionFailed { .. } => {
                "Não foi possível conectar ao servidor do jogo.".to_string()
            }
            StreamError::ConnectionLost { .. } => {
                "A conexão com o servidor foi perdida durante o turno.".to_string()
            }
            StreamError::Decode { .. } => "O servidor enviou texto ilegível.".to_string(),
            StreamError::Backend { message } => message.clone(),
            StreamError::MalformedFrame { event_type, .. } => {
                format!("Evento '{}' ilegível.", event_type)
            }
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::Rejected { .. } => "E_STREAM_REJECTED",
            StreamError::ConnectionFailed { .. } => "E_STREAM_CONN",
            StreamError::ConnectionLost { .. } => "E_STREAM_LOST",
            StreamError::Decode { .. } => "E_STREAM_DECODE",
            StreamError::Backend { .. } => "E_STREAM_BACKEND",
            StreamError::MalformedFrame { .. } => "E_STREAM_FRAME",
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Rejected { status, message } => {
                write!(f, "Stream rejected with HTTP {}: {}", status, message)
            }
            StreamError::ConnectionFailed { message } => {
                write!(f, "Stream connection failed: {}", message)
            }
            StreamError::ConnectionLost { message } => {
                write!(f, "Stream connection lost: {}", message)
            }
            StreamError::Decode { message } => write!(f, "Stream decode error: {}", message),
            StreamError::Backend { message } => write!(f, "Backend error: {}", message),
            StreamError::MalformedFrame {
                event_type,
                message,
            } => write!(f, "Malformed '{}' frame: {}", event_type, message),
        }
    }
}

impl std::error::Error for StreamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_with_status_is_rejected() {
        let err = StreamError::from_open_error(HttpError::ServerError {
            status: 500,
            message: "Internal Server Error".to_string(),
        });
        assert_eq!(
            err,
            StreamError::Rejected {
                status: 500,
                message: "Internal Server Error".to_string()
            }
        );
    }

    #[test]
    fn test_open_error_transport() {
        let err = StreamError::from_open_error(HttpError::ConnectionFailed("refused".into()));
        assert!(matches!(err, StreamError::ConnectionFailed { .. }));
        assert_eq!(err.error_code(), "E_STREAM_CONN");
    }

    #[test]
    fn test_backend_message_passthrough() {
        let err = StreamError::Backend {
            message: "GameGraph not initialized".to_string(),
        };
        assert_eq!(err.user_message(), "GameGraph not initialized");
    }

    #[test]
    fn test_display() {
        let err = StreamError::Decode {
            message: "invalid utf-8 sequence".to_string(),
        };
        assert_eq!(err.to_string(), "Stream decode error: invalid utf-8 sequence");
    }
}
