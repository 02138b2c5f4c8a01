//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every staff member, ordered by name
    List,
    /// Show one staff member
    Show { id: i64 },
    /// Add a staff member
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Change the name and email of a staff member
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a staff member
    Delete { id: i64 },
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Manage the staff accounts of a restaurant",
    long_about = "Manage the staff accounts of a restaurant.\n\nEnvironment:\n  RESTO_DB_PATH          SQLite database file\n  RESTO_MAX_CONNECTIONS  Connection pool size (default 5)\n  RUST_LOG               Log filter\n"
)]
pub struct Cli {
    #[arg(long, value_name = "PATH", help = "SQLite database file")]
    pub db: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Print results as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

pub fn parse() -> Cli {
    Cli::parse()
}
