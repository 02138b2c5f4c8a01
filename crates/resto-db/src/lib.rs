//! # resto-db: Database Layer for Resto Manager
//!
//! Database access for the staff-management screen, using SQLite through
//! sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Resto Manager Data Flow                            │
//! │                                                                         │
//! │  StaffScreen::submit(form)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     resto-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────┐  ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repositories   │  │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │    │   (staff.rs)    │  │  (embedded)  │   │   │
//! │  │   │               │    │                 │  │              │   │   │
//! │  │   │  SqlitePool   │◄───│ StaffRepository │  │ 001_initial  │   │   │
//! │  │   └───────────────┘    └─────────────────┘  └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              SQLite Database (users, roles)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use resto_db::{Database, DbConfig};
//! use resto_core::RoleId;
//!
//! let db = Database::new(DbConfig::new("path/to/resto.db")).await?;
//! let staff = db.staff().list_by_role(RoleId::STAFF).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::staff::StaffRepository;
