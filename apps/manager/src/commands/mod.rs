//! # Commands Module
//!
//! Every CLI command runs through the [`StaffScreen`](crate::state::StaffScreen).
//!
//! ## Command Flow
//! ```text
//! resto-manager add --name Ana ...
//!        │
//!        ▼
//! cli::Command::Add ──► commands::staff::execute ──► StaffScreen::submit
//!                                  │
//!                                  ▼
//!                     Notice / Vec<StaffDto> rendered as text or JSON
//! ```

pub mod staff;
