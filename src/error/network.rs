//! Network-related error types.
//!
//! Covers request/response calls to the game backend: transport failures
//! and non-2xx answers carrying the backend's `detail` message.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Could not reach the backend.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { operation: String, message: String },

    /// Non-2xx response; `message` is the backend `detail` when present.
    HttpStatus { status: u16, message: String },

    /// Body did not match the expected shape.
    InvalidResponse { message: String },

    /// Anything else reported by the HTTP layer.
    Other { message: String },
}

impl NetworkError {
    /// Whether the failure came from the backend rather than the transport.
    pub fn is_server_side(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { status, .. } if *status >= 500)
    }

    /// Player-facing message shown in the narrative log.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Não foi possível conectar ao servidor do jogo.".to_string()
            }
            NetworkError::Timeout { operation, .. } => {
                format!("A operação '{}' excedeu o tempo limite.", operation)
            }
            NetworkError::HttpStatus { message, .. } if !message.is_empty() => message.clone(),
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "Recurso não encontrado.".to_string(),
                500..=599 => "Ocorreu um erro no servidor.".to_string(),
                _ => format!("O servidor respondeu com erro (HTTP {}).", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "O servidor enviou uma resposta inválida.".to_string()
            }
            NetworkError::Other { message } => format!("Erro de rede: {}", message),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }

    /// Classify an [`HttpError`] raised while calling `url`.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(message) => NetworkError::Timeout {
                operation: url.to_string(),
                message,
            },
            HttpError::ServerError { status, message } => {
                NetworkError::HttpStatus { status, message }
            }
            HttpError::InvalidUrl(message) => NetworkError::Other {
                message: format!("invalid url: {}", message),
            },
            HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { operation, message } => {
                write!(f, "{} timed out: {}", operation, message)
            }
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}
