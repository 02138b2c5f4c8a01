//! # Database Migrations
//!
//! Embedded SQL migrations for Resto Manager.
//!
//! ## How Migrations Work
//! ```text
//! App Startup
//!      │
//!      ▼
//! Check _sqlx_migrations table (create if missing)
//!      │
//!      ▼
//! Compare embedded migrations vs applied
//!      │
//!      └── 001_initial_schema.sql   roles + users
//!      │
//!      ▼
//! Run pending migrations in order, record each one
//! ```
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Name format: `NNN_description.sql`
//! 3. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// Each migration runs in its own transaction; already-applied ones are
/// skipped.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns `(total_migrations, applied_migrations)`.
///
/// For diagnostics. A store that was never migrated reports zero applied.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = match sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
    {
        Ok(count) => count,
        Err(sqlx::Error::Database(e)) if e.message().contains("no such table") => 0,
        Err(e) => return Err(e.into()),
    };

    Ok((total, applied as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_migrations_applied_once() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // second run is a no-op
        db.run_migrations().await.unwrap();

        let (total, applied) = migration_status(db.pool()).await.unwrap();
        assert_eq!(total, applied);
        assert!(total >= 1);
    }

    #[tokio::test]
    async fn test_unmigrated_store_reports_zero() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();

        let (_, applied) = migration_status(db.pool()).await.unwrap();
        assert_eq!(applied, 0);
    }

    #[tokio::test]
    async fn test_status_on_closed_pool_is_an_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        let err = migration_status(db.pool()).await.unwrap_err();
        assert!(err.is_connection());
    }

    #[tokio::test]
    async fn test_roles_seeded() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM roles ORDER BY id")
            .fetch_all(db.pool())
            .await
            .unwrap();

        assert_eq!(names, vec!["Admin".to_string(), "Staff".to_string()]);
    }
}
