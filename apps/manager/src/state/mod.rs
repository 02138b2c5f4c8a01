//! # Application State
//!
//! State owned by the manager for the lifetime of the process.
//!
//! ## State Types
//! - [`ConfigState`]: Resolved configuration (read-only)
//! - [`StaffScreen`]: Staff list plus the add/edit/delete flows

mod config;
mod screen;

pub use config::{ConfigError, ConfigState, DEFAULT_LOG_FILTER};
pub use screen::{FlowState, Notice, StaffScreen};
