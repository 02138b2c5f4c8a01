//! # Validation Module
//!
//! Rules gating the "add staff" dialog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  └── Calls is_valid_staff_form() on every input event                  │
//! │      to enable/disable the save action                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: StaffScreen controller                                       │
//! │  ├── THIS MODULE: validate_staff_form() before any I/O                 │
//! │  └── email_exists() pre-insert guard                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE(email)                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The validator holds no state; the same form always yields the same answer.
//!
//! ## Usage
//! ```rust
//! use resto_core::validation::{is_valid_staff_form, validate_staff_form};
//! use resto_core::StaffForm;
//!
//! let form = StaffForm::new("Bob", "a@b.com", "short", "short");
//! assert!(!is_valid_staff_form(&form));
//! assert!(validate_staff_form(&form).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::StaffForm;
use crate::MIN_PASSWORD_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks whether a form may be submitted.
///
/// ## Rules
/// - `name` is not empty
/// - `email` is not empty
/// - `password` has at least [`MIN_PASSWORD_LEN`] characters
/// - `password` equals `confirm_password`
///
/// Fields are checked as typed, without trimming.
pub fn is_valid_staff_form(form: &StaffForm) -> bool {
    validate_staff_form(form).is_ok()
}

/// Validates a form, reporting the first rule it breaks.
///
/// ## Rule Order
/// ```text
/// name empty?              → Required { field: "name" }
/// email empty?             → Required { field: "email" }
/// password < 6 chars?      → TooShort { field: "password", min: 6 }
/// password != confirmation → Mismatch { field: "password" }
/// ```
pub fn validate_staff_form(form: &StaffForm) -> ValidationResult<()> {
    if form.name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if form.email.is_empty() {
        return Err(ValidationError::required("email"));
    }

    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    if form.password != form.confirm_password {
        return Err(ValidationError::Mismatch {
            field: "password".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
