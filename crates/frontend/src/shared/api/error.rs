use super::request::ResponseBody;
use thiserror::Error;

pub(crate) const GENERIC_STATUS_MESSAGE: &str = "An error occurred";
pub(crate) const GENERIC_TRANSPORT_MESSAGE: &str = "An unexpected error occurred";

/// Failure reported by a transport before any HTTP status is available.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request was aborted")]
    Aborted,

    #[error("Network error: {0}")]
    Network(String),
}

/// Classified API error
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Request was cancelled")]
    Cancelled,

    #[error("{message}")]
    Transport { message: String },

    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        body: ResponseBody,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a status error; the server's own `message` field wins when present.
    pub fn from_status(status: u16, body: ResponseBody) -> Self {
        let message = body
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_STATUS_MESSAGE.to_string());
        ApiError::Status {
            status,
            message,
            body,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Aborted => ApiError::Cancelled,
            TransportError::Network(message) if message.trim().is_empty() => {
                ApiError::Transport {
                    message: GENERIC_TRANSPORT_MESSAGE.to_string(),
                }
            }
            TransportError::Network(message) => ApiError::Transport { message },
        }
    }
}
