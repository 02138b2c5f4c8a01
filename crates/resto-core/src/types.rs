//! # Domain Types
//!
//! Core domain types behind the staff-management screen.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  StaffRecord    │   │   StaffForm     │   │     RoleId      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (store)     │   │  name           │   │  ADMIN = 1      │       │
//! │  │  name, email    │   │  email          │   │  STAFF = 2      │       │
//! │  │  role_id        │   │  password       │   │                 │       │
//! │  │  role_name (RO) │   │  confirm        │   │                 │       │
//! │  │  password (hash)│   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Lifecycle
//! ```text
//!  add dialog        confirm                 edit confirm        delete confirm
//!  ──────────        ───────                 ────────────        ──────────────
//!  id = 0       ──►  id = store-assigned ──► name/email only ──► row removed
//!  plaintext         hashed password         (id immutable)      (role 2 only)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::STAFF_ROLE_NAME;

// =============================================================================
// Role
// =============================================================================

/// Identifier of a row in the `roles` table.
///
/// Role ids are plain integers in the store; the named constants keep the
/// well-known ones from drifting across the codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
#[ts(export)]
pub struct RoleId(pub i64);

impl RoleId {
    /// Administrators (managers). Never reachable through the staff flows.
    pub const ADMIN: RoleId = RoleId(1);

    /// Staff members, the only role the staff screen may modify.
    pub const STAFF: RoleId = RoleId(2);

    /// Returns the raw integer id.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Checks if this is the staff role.
    #[inline]
    pub const fn is_staff(self) -> bool {
        self.0 == RoleId::STAFF.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RoleId {
    fn from(id: i64) -> Self {
        RoleId(id)
    }
}

// =============================================================================
// Staff Record
// =============================================================================

/// One row of the `users` table, with its role name joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct StaffRecord {
    /// Store-assigned primary key. `0` means "not persisted yet".
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Login email, unique across all users regardless of role.
    pub email: String,

    /// Role of this user.
    pub role_id: RoleId,

    /// Role display name, joined from `roles`. Read-only.
    pub role_name: String,

    /// Password digest at rest. Holds plaintext only between the add dialog
    /// and the hashing step, and is never serialized out.
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password: String,
}

impl StaffRecord {
    /// Builds an unsaved staff record from the add dialog.
    ///
    /// ## Example
    /// ```rust
    /// use resto_core::{RoleId, StaffRecord};
    ///
    /// let ana = StaffRecord::new_staff("Ana", "ana@x.com", "secret1");
    /// assert_eq!(ana.id, 0);
    /// assert_eq!(ana.role_id, RoleId::STAFF);
    /// ```
    pub fn new_staff(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        StaffRecord {
            id: 0,
            name: name.into(),
            email: email.into(),
            role_id: RoleId::STAFF,
            role_name: STAFF_ROLE_NAME.to_string(),
            password: password.into(),
        }
    }

    /// Checks if the store has assigned an id to this record.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Returns a copy carrying the given password digest.
    pub fn with_password(mut self, digest: impl Into<String>) -> Self {
        self.password = digest.into();
        self
    }
}

impl From<&StaffForm> for StaffRecord {
    fn from(form: &StaffForm) -> Self {
        StaffRecord::new_staff(&form.name, &form.email, &form.password)
    }
}

// =============================================================================
// Staff Form
// =============================================================================

/// Raw field values of the "add staff" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StaffForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl StaffForm {
    /// Creates a form from its four fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        StaffForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
