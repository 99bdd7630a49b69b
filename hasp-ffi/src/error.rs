//! Error types for host calls.

use hasp_core::HaspError;
use thiserror::Error;

/// Why a host call failed.
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Hasp(#[from] HaspError),

    #[error("unknown method: {0}")]
    UnknownMethod(String),
}

impl CallError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hasp(e) => e.code(),
            Self::UnknownMethod(_) => "unknown_method",
        }
    }

    /// Message text for the host, without kind prefixes.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Hasp(e) => e.message().to_string(),
            Self::UnknownMethod(_) => self.to_string(),
        }
    }
}
