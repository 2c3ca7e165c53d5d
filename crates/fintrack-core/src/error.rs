use fintrack_domain::MonthWindowError;
use thiserror::Error;

/// Unified error type for the service layer.
///
/// Every failure maps to exactly one of these kinds so callers can
/// distinguish bad input from missing records from business-rule violations.
/// The core performs no retries and no partial commits; errors surface to
/// the immediate caller as-is.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("User not authenticated")]
    Unauthenticated,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl From<MonthWindowError> for CoreError {
    fn from(err: MonthWindowError) -> Self {
        CoreError::InvalidArgument(err.to_string())
    }
}
