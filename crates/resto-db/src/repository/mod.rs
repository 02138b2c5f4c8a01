//! # Repository Module
//!
//! Database repository implementations for Resto Manager.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  StaffScreen controller                                                │
//! │       │                                                                 │
//! │       │  db.staff().list_by_role(RoleId::STAFF)                        │
//! │       ▼                                                                 │
//! │  StaffRepository                                                       │
//! │  ├── list_by_role(&self, role_id)                                      │
//! │  ├── email_exists(&self, email)                                        │
//! │  ├── add(&self, record)                                                │
//! │  ├── update(&self, record)        (role 2 only)                        │
//! │  └── delete(&self, id)            (role 2 only)                        │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`staff::StaffRepository`] - Users and staff CRUD

pub mod staff;
