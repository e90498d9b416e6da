//! Shared error type across rtgate crates.

use thiserror::Error;

/// Host-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid input / malformed payload or config.
    BadRequest,
    /// Name does not resolve to a catalog operation.
    UnknownOperation,
    /// The host already holds a registration under this key.
    Duplicate,
    /// No such RPC or hook.
    NotFound,
    /// Upstream dependency failed.
    Unavailable,
    /// Response could not be serialized.
    Marshal,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and RPC error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnknownOperation => "UNKNOWN_OPERATION",
            ErrorCode::Duplicate => "DUPLICATE",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Unavailable => "UNAVAILABLE",
            ErrorCode::Marshal => "MARSHAL",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }

    /// gRPC status code the host reports to clients.
    pub fn grpc_code(self) -> i32 {
        match self {
            ErrorCode::BadRequest | ErrorCode::UnknownOperation | ErrorCode::UnsupportedVersion => 3,
            ErrorCode::NotFound => 5,
            ErrorCode::Duplicate => 6,
            ErrorCode::Internal | ErrorCode::Marshal => 13,
            ErrorCode::Unavailable => 14,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RtGateError>;

/// Unified error type used by core and module.
#[derive(Debug, Error)]
pub enum RtGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unknown {family} operation: {name}")]
    UnknownOperation { family: &'static str, name: String },
    #[error("already registered: {0}")]
    Duplicate(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
    #[error("cannot marshal type: {0}")]
    Marshal(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RtGateError {
    /// Map internal error to a stable host-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            RtGateError::BadRequest(_) => ErrorCode::BadRequest,
            RtGateError::UnknownOperation { .. } => ErrorCode::UnknownOperation,
            RtGateError::Duplicate(_) => ErrorCode::Duplicate,
            RtGateError::NotFound(_) => ErrorCode::NotFound,
            RtGateError::Unavailable(_) => ErrorCode::Unavailable,
            RtGateError::Marshal(_) => ErrorCode::Marshal,
            RtGateError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            RtGateError::Internal(_) => ErrorCode::Internal,
        }
    }
}
