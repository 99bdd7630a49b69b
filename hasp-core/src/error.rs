//! Error types for the binding boundary.

use thiserror::Error;

/// Result type for handle operations.
pub type HaspResult<T> = Result<T, HaspError>;

/// Errors surfaced to the caller of a [`DeviceHandle`](crate::DeviceHandle) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HaspError {
    /// Argument count or type violation, detected before the session is touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The session reported failure after a delegated call.
    ///
    /// Displays the session's message verbatim.
    #[error("{0}")]
    Session(String),
}

impl HaspError {
    /// Stable machine-readable code for host envelopes.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Session(_) => "session_error",
        }
    }

    /// The bare message without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::Session(msg) => msg,
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
