//! # Error Types
//!
//! Domain-specific error types for resto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  resto-core errors (this file)                                         │
//! │  ├── CoreError        - Domain failures (hashing, wrapped validation)  │
//! │  └── ValidationError  - Form validation failures (no I/O involved)     │
//! │                                                                         │
//! │  resto-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the user sees                             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → user message           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The password hasher could not produce a digest.
    ///
    /// ## When This Occurs
    /// - Salt generation failed (no OS randomness)
    /// - Hasher parameters rejected the input
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any I/O; they block a submission but are never reported
/// as system errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// A confirmation field does not match its original.
    #[error("{field} confirmation does not match")]
    Mismatch { field: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
