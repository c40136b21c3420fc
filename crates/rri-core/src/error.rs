//! Error types for the RRI client
//!
//! Every status-derived variant is a request-level failure reported by the
//! reporting API. Connectivity problems are carried unmodified in
//! [`Error::Transport`].

use thiserror::Error;

/// Result type alias for RRI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a transport implementation
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error type for the RRI client
#[derive(Error, Debug)]
pub enum Error {
    /// The caller passed arguments the resource cannot accept
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP/400 where the operation does not treat it as an outcome
    #[error("Invalid input: request rejected by the reporting API (HTTP {0})")]
    Rejected(u16),

    /// A date string did not match the resource's date format
    #[error("Invalid date '{value}' for format '{format}': {reason}")]
    InvalidDate {
        /// The rejected input
        value: String,
        /// The strftime pattern the input was checked against
        format: &'static str,
        /// Why parsing failed
        reason: String,
    },

    /// HTTP/401
    #[error("Invalid tld credentials")]
    InvalidCredentials,

    /// HTTP/403
    #[error("Access to the resource is forbidden")]
    InvalidAccess,

    /// HTTP/405
    #[error("Request method not allowed by the resource")]
    InvalidMethod,

    /// HTTP/500
    #[error("General failure reported by the reporting API")]
    GeneralFailure,

    /// HTTP/501
    #[error("Operation not implemented by the reporting API")]
    NotImplemented,

    /// Any status the reporting API does not document
    #[error("Unknown HTTP status: {0}")]
    UnknownStatus(u16),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed URL template
    #[error("Template error: {0}")]
    Template(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local I/O errors (reading configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The transport failed before a response was received
    #[error("Transport error ({transport}): {source}")]
    Transport {
        /// Transport name
        transport: String,
        /// The underlying error, untouched
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid date error
    pub fn invalid_date(
        value: impl Into<String>,
        format: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDate {
            value: value.into(),
            format,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a template error
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Wrap a transport failure
    pub fn transport(transport: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            transport: transport.into(),
            source: source.into(),
        }
    }

    /// True for caller errors: rejected input and malformed dates
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::Rejected(_) | Self::InvalidDate { .. }
        )
    }

    /// True if the error was caused by the transport, not by the API
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// The HTTP status this error was derived from, if any
    ///
    /// A rejection by the API reports its status; caller misuse caught
    /// before any request (`InvalidInput`, `InvalidDate`) carries none.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected(code) => Some(*code),
            Self::InvalidCredentials => Some(401),
            Self::InvalidAccess => Some(403),
            Self::InvalidMethod => Some(405),
            Self::GeneralFailure => Some(500),
            Self::NotImplemented => Some(501),
            Self::UnknownStatus(code) => Some(*code),
            _ => None,
        }
    }
}
