use serde::{Deserialize, Serialize};

/// Unified error type for all secret store operations.
///
/// All variants are serializable for structured error reporting. The
/// [`Display`](std::fmt::Display) output is what ends up in front of the user,
/// so [`Http`](Self::Http) renders its message verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// The server answered with a non-success HTTP status.
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body text, or `"HTTP <status> <reason>"` when the body was blank.
        message: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// Failed to parse the server's response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ClientError {
    /// Whether this is expected behavior (a 4xx answer from the server), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Http { status, .. } if (400..500).contains(status))
    }

    /// Build an [`Http`](Self::Http) error from a failed response.
    ///
    /// Uses the body when it has visible content, otherwise synthesizes the status line.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            match reason {
                Some(reason) => format!("HTTP {status} {reason}"),
                None => format!("HTTP {status}"),
            }
        } else {
            body.to_string()
        };
        Self::Http { status, message }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http { message, .. } => write!(f, "{message}"),
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
