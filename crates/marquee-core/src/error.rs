//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }
}

/// Why a single query attempt failed.
///
/// Carried inside messages and query states, so unlike [`Error`] it is
/// `Clone` and deliberately small: the view layer only ever surfaces a
/// boolean error flag, the detail exists for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, timeout, connection reset).
    #[error("network failure: {0}")]
    Network(String),

    /// Non-2xx HTTP status from the movie metadata service.
    #[error("upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Upstream 404 for an entity looked up by id.
    #[error("not found")]
    NotFound,

    /// Response body did not match the expected shape.
    #[error("decode failure: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("missing api token");
        assert_eq!(err.to_string(), "Configuration error: missing api token");

        // The send error keeps the dropped message's description.
        let err = Error::channel_send("Search(\"batman\")");
        assert!(err.to_string().contains("Search(\"batman\")"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::upstream(503, "service unavailable");
        assert!(err.to_string().contains("503"));

        let err = FetchError::network("connection reset");
        assert!(err.to_string().contains("connection reset"));

        assert_eq!(FetchError::NotFound.to_string(), "not found");
    }

    #[test]
    fn test_fetch_error_is_cloneable_and_comparable() {
        let err = FetchError::decode("missing field `results`");
        assert_eq!(err.clone(), err);
    }
}
