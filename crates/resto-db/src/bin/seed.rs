//! # Seed Data Generator
//!
//! Populates the database with demo staff members for development.
//!
//! ## Usage
//! ```bash
//! # Generate 20 staff members (default)
//! cargo run -p resto-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p resto-db --bin seed -- --count 50
//!
//! # Specify database path
//! cargo run -p resto-db --bin seed -- --db ./data/resto.db
//! ```
//!
//! Also creates one admin account (`admin@resto.local`). Every seeded
//! account uses the password `changeme`, stored hashed. Emails that already
//! exist are skipped, so the seeder can be re-run safely.

use std::env;

use resto_core::{Argon2Hasher, CredentialHasher, RoleId, StaffRecord};
use resto_db::{Database, DbConfig, StaffRepository};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_PASSWORD: &str = "changeme";

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Camille", "Diego", "Elena", "Farid", "Giulia", "Hugo", "Ines", "Jonas",
    "Karim", "Lea", "Marco", "Nadia", "Oscar", "Paula", "Quentin", "Rosa", "Samir", "Tara",
];

const LAST_NAMES: &[&str] = &[
    "Martin", "Bernard", "Dubois", "Moreau", "Laurent", "Simon", "Michel", "Garcia", "Roux",
    "Fournier",
];

struct Args {
    db_path: String,
    count: usize,
}

fn parse_args() -> Args {
    let mut args = Args {
        db_path: "./resto.db".to_string(),
        count: 20,
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "--db" if i + 1 < raw.len() => {
                args.db_path = raw[i + 1].clone();
                i += 1;
            }
            "--count" if i + 1 < raw.len() => {
                args.count = raw[i + 1].parse().unwrap_or(args.count);
                i += 1;
            }
            other => warn!(arg = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    args
}

/// Builds the n-th demo staff member (plaintext password).
fn demo_staff(n: usize) -> StaffRecord {
    let first = FIRST_NAMES[n % FIRST_NAMES.len()];
    let last = LAST_NAMES[(n / FIRST_NAMES.len()) % LAST_NAMES.len()];
    let name = format!("{} {}", first, last);
    let email = format!(
        "{}.{}{}@resto.local",
        first.to_lowercase(),
        last.to_lowercase(),
        n
    );

    StaffRecord::new_staff(name, email, DEFAULT_PASSWORD)
}

async fn insert_if_new(
    repo: &StaffRepository,
    hasher: &Argon2Hasher,
    record: StaffRecord,
) -> Result<bool, Box<dyn std::error::Error>> {
    if repo.email_exists(&record.email).await? {
        return Ok(false);
    }

    let digest = hasher.hash(&record.password)?;
    repo.add(&record.with_password(digest)).await?;
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let args = parse_args();
    info!(db = %args.db_path, count = args.count, "Seeding staff");

    let db = Database::new(DbConfig::new(&args.db_path)).await?;
    let repo = db.staff();
    let hasher = Argon2Hasher;

    let mut admin = StaffRecord::new_staff("Admin", "admin@resto.local", DEFAULT_PASSWORD);
    admin.role_id = RoleId::ADMIN;
    admin.role_name = "Admin".to_string();
    if insert_if_new(&repo, &hasher, admin).await? {
        info!("Admin account created");
    }

    let mut created = 0;
    for n in 0..args.count {
        if insert_if_new(&repo, &hasher, demo_staff(n)).await? {
            created += 1;
        }
    }

    let total = repo.count_by_role(RoleId::STAFF).await?;
    println!("✅ Seeded {} new staff members ({} total)", created, total);

    db.close().await;
    Ok(())
}
