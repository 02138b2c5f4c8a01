//! # resto-core: Pure Domain Logic for Resto Manager
//!
//! Types and rules behind the staff-management screen, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Resto Manager Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (CLI / screen)                     │   │
//! │  │     list ──► add dialog ──► edit dialog ──► delete confirm      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 StaffScreen controller (app)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ resto-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐   ┌────────────┐   ┌────────────┐             │   │
//! │  │   │   types    │   │ validation │   │  password  │             │   │
//! │  │   │ StaffRecord│   │ StaffForm  │   │  Argon2    │             │   │
//! │  │   │  RoleId    │   │   rules    │   │  hasher    │             │   │
//! │  │   └────────────┘   └────────────┘   └────────────┘             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   resto-db (Database Layer)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (StaffRecord, StaffForm, RoleId)
//! - [`validation`] - Add-form validation rules
//! - [`password`] - Password hashing behind the [`CredentialHasher`] trait
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use resto_core::{is_valid_staff_form, StaffForm};
//!
//! let form = StaffForm::new("Bob", "bob@resto.test", "secret1", "secret1");
//! assert!(is_valid_staff_form(&form));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod password;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use password::{Argon2Hasher, CredentialHasher};
pub use types::*;
pub use validation::{is_valid_staff_form, validate_staff_form};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum password length, in characters, for a new staff account.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Display name of the staff role, used for records built before they are
/// persisted (the store joins the real name on read).
pub const STAFF_ROLE_NAME: &str = "Staff";
