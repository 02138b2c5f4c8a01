//! # API Error Type
//!
//! The one error type the presentation layer ever sees.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Resto Manager                          │
//! │                                                                         │
//! │  StaffScreen flow                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Validation Error? ── ValidationError ──► ApiError(VALIDATION_ERROR)   │
//! │         │                 (before any I/O, blocks submit)               │
//! │         ▼                                                               │
//! │  Duplicate email?  ─────────────────────► ApiError(DUPLICATE_EMAIL)    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Database Error?   ── DbError ──────────► ApiError(QUERY_ERROR /       │
//! │         │                                  CONNECTION_ERROR)            │
//! │         ▼                                                               │
//! │  Success ──► Notice                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures are terminal for the user action that caused them. Nothing is
//! retried.

use serde::Serialize;
use std::fmt;

use resto_core::CoreError;
use resto_db::DbError;

/// Error surfaced to the user.
///
/// ## Serialization
/// ```json
/// {
///   "code": "DUPLICATE_EMAIL",
///   "message": "This email already exists"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for user-facing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Store unreachable. Fatal to the screen.
    ConnectionError,

    /// A single operation failed. The screen stays usable.
    QueryError,

    /// Form input rejected before any I/O.
    ValidationError,

    /// Email already used by another user.
    DuplicateEmail,

    /// Requested record does not exist.
    NotFound,

    /// Anything else (e.g. the password hasher failed).
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates the fatal "store unreachable" error.
    pub fn connection() -> Self {
        ApiError::new(
            ErrorCode::ConnectionError,
            "Unable to connect to the database",
        )
    }

    /// Creates the duplicate-email error of the add flow.
    pub fn duplicate_email() -> Self {
        ApiError::new(ErrorCode::DuplicateEmail, "This email already exists")
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Keeps the code, replaces the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Keeps the code, prefixes the message with what the user was doing.
    pub fn context(mut self, action: &str) -> Self {
        self.message = format!("{}: {}", action, self.message);
        self
    }

    /// Checks if this error ends the screen session.
    pub fn is_fatal(&self) -> bool {
        self.code == ErrorCode::ConnectionError
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { field, .. } if field.ends_with("email") => {
                ApiError::duplicate_email()
            }
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::connection()
            }
            DbError::PoolExhausted => ApiError::connection(),
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::connection()
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                ApiError::new(ErrorCode::QueryError, "Invalid reference")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::QueryError, "Database operation failed")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::QueryError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::Hashing(e) => {
                tracing::error!("Password hashing failed: {}", e);
                ApiError::new(ErrorCode::Internal, "Password could not be secured")
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use resto_core::ValidationError;

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::duplicate_email()).unwrap();

        assert_eq!(json["code"], "DUPLICATE_EMAIL");
        assert_eq!(json["message"], "This email already exists");
    }

    #[test]
    fn test_db_error_mapping() {
        let err: ApiError = DbError::duplicate("users.email", "unknown").into();
        assert_eq!(err.code, ErrorCode::DuplicateEmail);

        let err: ApiError = DbError::ConnectionFailed("Pool is closed".to_string()).into();
        assert!(err.is_fatal());

        let err: ApiError = DbError::QueryFailed("no such table: roles".to_string()).into();
        assert_eq!(err.code, ErrorCode::QueryError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::from(ValidationError::required("name")).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");

        let err: ApiError = CoreError::Hashing("no entropy".to_string()).into();
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_context_keeps_code() {
        let err = ApiError::new(ErrorCode::QueryError, "Database operation failed")
            .context("Error while adding");

        assert_eq!(err.code, ErrorCode::QueryError);
        assert_eq!(err.message, "Error while adding: Database operation failed");
        assert_eq!(
            err.to_string(),
            "[QueryError] Error while adding: Database operation failed"
        );
    }
}
