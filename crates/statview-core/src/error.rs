//! Shared error type across statview crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / parameter out of range.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum StatError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("insufficient data: need at least {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("zero variance in {0}")]
    ZeroVariance(&'static str),
    #[error("{0} is not finite")]
    NonFinite(&'static str),
    #[error("chart render failed: {0}")]
    Render(String),
    #[error("png encode failed: {0}")]
    Encode(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl StatError {
    /// Map internal error to a stable client-facing code.
    ///
    /// Only caller-supplied parameters are the client's fault; a degenerate
    /// sample produced by the service itself is an internal failure.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StatError::InvalidParameter(_) => ClientCode::BadRequest,
            StatError::InsufficientData { .. }
            | StatError::LengthMismatch { .. }
            | StatError::ZeroVariance(_)
            | StatError::NonFinite(_)
            | StatError::Render(_)
            | StatError::Encode(_)
            | StatError::Internal(_) => ClientCode::Internal,
        }
    }
}
