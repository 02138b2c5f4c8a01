//! # Resto Manager Entry Point
//!
//! ```text
//! main.rs ──► init_tracing ──► cli::parse ──► resto_manager::run ──► stdout
//!                                                     │
//!                                                     └── ApiError ──► stderr, exit 1
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    resto_manager::init_tracing();

    let cli = resto_manager::cli::parse();
    match resto_manager::run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.message);
            ExitCode::FAILURE
        }
    }
}
