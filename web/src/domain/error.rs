//! Domain-level error types.
//!
//! These errors are what callers of the service layer see. Each code carries
//! one fixed message that is safe to show to an end user; diagnostic detail
//! is logged where the failure is classified and never stored here.

use serde::Serialize;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The backend could not be reached.
    BackendUnavailable,
    /// The backend does not know the requested game.
    NotFound,
    /// Any other failure, including malformed backend data.
    InternalError,
}

impl ErrorCode {
    /// User-facing message for this code.
    pub fn message(self) -> &'static str {
        match self {
            Self::BackendUnavailable => "Backend is not available",
            Self::NotFound => "Game not found",
            Self::InternalError => "Something went wrong",
        }
    }
}

/// Failure outcome of a service operation.
///
/// # Examples
/// ```
/// use web::domain::{Error, ErrorCode};
///
/// let err = Error::backend_unavailable();
/// assert_eq!(err.code(), ErrorCode::BackendUnavailable);
/// assert_eq!(err.message(), "Backend is not available");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: &'static str,
}

impl Error {
    /// Create an error for the given code.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.message(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to callers.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Convenience constructor for [`ErrorCode::BackendUnavailable`].
    pub fn backend_unavailable() -> Self {
        Self::new(ErrorCode::BackendUnavailable)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found() -> Self {
        Self::new(ErrorCode::NotFound)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError)
    }
}

/// Outcome of every service operation: exactly one of a value or an error.
pub type ServiceResult<T> = Result<T, Error>;
