//! # Resto Manager Library
//!
//! Staff management for the restaurant manager: the screen controller and
//! the command-line front end that drives it.
//!
//! ## Module Organization
//! ```text
//! resto_manager/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── screen.rs   ◄─── StaffScreen controller
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── staff.rs    ◄─── list / show / add / edit / delete
//! └── error.rs        ◄─── API error type shown to the user
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::{ApiError, ErrorCode};
use state::{ConfigState, StaffScreen, DEFAULT_LOG_FILTER};

/// Runs one command and returns what to print.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Resolve Configuration ────────────────────────────────────────────► │
/// │     • --db flag, then RESTO_DB_PATH, then the app data directory        │
/// │                                                                         │
/// │  2. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  3. Open the Staff Screen ────────────────────────────────────────────► │
/// │     • Initial staff load (fatal on failure)                             │
/// │                                                                         │
/// │  4. Execute the Command ──────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<String, ApiError> {
    let config = ConfigState::resolve(cli.db.clone())
        .map_err(|e| ApiError::new(ErrorCode::Internal, e.to_string()))?;
    info!(db_path = ?config.database_path, "Configuration resolved");

    let mut screen = StaffScreen::connect(config.db_config()).await?;
    commands::staff::execute(&mut screen, cli.command, cli.json).await
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so command output stays pipeable.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=resto=trace` - Show trace for resto crates only
/// - Default: [`DEFAULT_LOG_FILTER`]
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
