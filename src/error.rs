use thiserror::Error;

/// Errors returned by the Personio client.
#[derive(Debug, Error)]
pub enum PersonioError {
    /// Network failure or client-side timeout reaching the upstream host.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller's cancellation token fired while a call was in flight.
    #[error("request cancelled")]
    Cancelled,

    /// Upstream answered with a non-2xx status.
    #[error("HTTP error {status}: {reason}")]
    Status { status: u16, reason: String },

    /// Upstream answered 2xx but flagged the call as unsuccessful.
    #[error("Personio API error [{code}]: {message}")]
    Api { code: i64, message: String },

    /// Payload could not be decoded into the expected shape.
    #[error("deserialization error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid local configuration or credentials.
    #[error("config error: {0}")]
    Config(String),
}

impl PersonioError {
    /// Returns the HTTP status code for [`PersonioError::Status`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            PersonioError::Status { status, .. } => Some(*status),
            PersonioError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if upstream answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if upstream answered 401.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Returns the upstream error code for envelope errors.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            PersonioError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// A specialized Result type for Personio operations.
pub type Result<T> = std::result::Result<T, PersonioError>;
