use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("orders service returned {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("request to orders service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body from orders service: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid orders service url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    /// Text suitable for a flash message. Service errors surface their own
    /// message verbatim.
    pub fn display_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(err) | Self::Decode(err) => err.status(),
            Self::InvalidUrl { .. } => None,
        }
    }
}
