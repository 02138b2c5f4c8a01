//! # Staff Repository
//!
//! Database operations for users and staff members.
//!
//! ## Role Scoping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Which rows each operation can touch                  │
//! │                                                                         │
//! │  Operation       Reads / writes            Filter                       │
//! │  ─────────────   ───────────────────────   ─────────────────────────    │
//! │  list_by_role    users ⋈ roles             role_id = ?                  │
//! │  email_exists    users                     any role                     │
//! │  add             users                     role from the record         │
//! │  update          users.name, users.email   id = ? AND role_id = 2       │
//! │  delete          users                     id = ? AND role_id = 2       │
//! │                                                                         │
//! │  An admin row can never be edited or deleted through this path.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `update` and `delete` report how many rows they touched. Zero is not an
//! error: the id may belong to a non-staff user or may not exist at all.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use resto_core::{RoleId, StaffRecord};

/// Columns and join shared by every read.
const SELECT_USERS: &str = r#"
    SELECT
        u.id,
        u.name,
        u.email,
        u.password,
        u.role_id,
        r.name AS role_name
    FROM users u
    INNER JOIN roles r ON u.role_id = r.id
"#;

/// Repository for user/staff database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = StaffRepository::new(pool);
///
/// let staff = repo.list_by_role(RoleId::STAFF).await?;
/// if !repo.email_exists("ana@x.com").await? {
///     let ana = repo.add(&StaffRecord::new_staff("Ana", "ana@x.com", digest)).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StaffRepository {
    pool: SqlitePool,
}

impl StaffRepository {
    /// Creates a new StaffRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StaffRepository { pool }
    }

    /// Lists the users of one role, ordered by name ascending, ignoring case.
    ///
    /// ## Returns
    /// * `Ok(vec![])` - No user has this role
    /// * `Err(DbError)` - The query failed
    pub async fn list_by_role(&self, role_id: RoleId) -> DbResult<Vec<StaffRecord>> {
        debug!(role_id = %role_id, "Listing users by role");

        let sql = format!("{SELECT_USERS} WHERE u.role_id = ?1 ORDER BY u.name COLLATE NOCASE");

        let records = sqlx::query_as::<_, StaffRecord>(&sql)
            .bind(role_id)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = records.len(), "Listed users");
        Ok(records)
    }

    /// Lists all staff members, ordered by name.
    pub async fn list_staff(&self) -> DbResult<Vec<StaffRecord>> {
        self.list_by_role(RoleId::STAFF).await
    }

    /// Gets a user of any role by id.
    ///
    /// ## Returns
    /// * `Ok(Some(StaffRecord))` - User found
    /// * `Ok(None)` - No user with this id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<StaffRecord>> {
        let sql = format!("{SELECT_USERS} WHERE u.id = ?1");

        let record = sqlx::query_as::<_, StaffRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Checks whether any user, of any role, already has this exact email.
    ///
    /// The add flow calls this before [`add`](Self::add).
    pub async fn email_exists(&self, email: &str) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new user and returns it with the store-assigned id.
    ///
    /// The password must already be hashed; this method stores it as given.
    ///
    /// ## Returns
    /// * `Ok(StaffRecord)` - The record with `id` populated
    /// * `Err(DbError::UniqueViolation)` - Email already taken
    /// * `Err(DbError::QueryFailed)` - The insert affected no rows
    pub async fn add(&self, record: &StaffRecord) -> DbResult<StaffRecord> {
        debug!(email = %record.email, role_id = %record.role_id, "Inserting user");

        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password, role_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.password)
        .bind(record.role_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::QueryFailed(
                "Insert failed, no rows affected".to_string(),
            ));
        }

        let mut saved = record.clone();
        saved.id = result.last_insert_rowid();

        debug!(id = saved.id, "User inserted");
        Ok(saved)
    }

    /// Updates the name and email of a staff member.
    ///
    /// Password and role are never touched. Only rows with `role_id = 2`
    /// match.
    ///
    /// ## Returns
    /// * `Ok(1)` - Staff member updated
    /// * `Ok(0)` - No staff member with this id (not an error)
    /// * `Err(DbError::UniqueViolation)` - New email belongs to another user
    pub async fn update(&self, record: &StaffRecord) -> DbResult<u64> {
        debug!(id = record.id, "Updating staff member");

        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = ?1, email = ?2
            WHERE id = ?3 AND role_id = ?4
            "#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(record.id)
        .bind(RoleId::STAFF)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a staff member.
    ///
    /// Only rows with `role_id = 2` match.
    ///
    /// ## Returns
    /// * `Ok(1)` - Staff member deleted
    /// * `Ok(0)` - No staff member with this id (not an error)
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id = id, "Deleting staff member");

        let result = sqlx::query("DELETE FROM users WHERE id = ?1 AND role_id = ?2")
            .bind(id)
            .bind(RoleId::STAFF)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts users of one role (for diagnostics).
    pub async fn count_by_role(&self, role_id: RoleId) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role_id = ?1")
            .bind(role_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn setup() -> (Database, StaffRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.staff();
        (db, repo)
    }

    async fn add_staff(repo: &StaffRepository, name: &str, email: &str) -> StaffRecord {
        repo.add(&StaffRecord::new_staff(name, email, "$argon2id$digest"))
            .await
            .unwrap()
    }

    async fn add_admin(repo: &StaffRepository, name: &str, email: &str) -> StaffRecord {
        let mut admin = StaffRecord::new_staff(name, email, "$argon2id$digest");
        admin.role_id = RoleId::ADMIN;
        repo.add(&admin).await.unwrap()
    }

    #[tokio::test]
    async fn test_empty_list_is_not_an_error() {
        let (_db, repo) = setup().await;

        assert!(repo.list_staff().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_lists() {
        let (_db, repo) = setup().await;

        let ana = add_staff(&repo, "Ana", "ana@x.com").await;
        assert!(ana.is_persisted());

        let staff = repo.list_by_role(RoleId::STAFF).await.unwrap();
        assert!(staff.iter().any(|s| s.id == ana.id));

        let listed = staff.iter().find(|s| s.id == ana.id).unwrap();
        assert_eq!(listed.role_name, "Staff");
        assert_eq!(listed.password, "$argon2id$digest");
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let (_db, repo) = setup().await;

        let a = add_staff(&repo, "Ana", "ana@x.com").await;
        let b = add_staff(&repo, "Bob", "bob@x.com").await;

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_list_ordered_by_name() {
        let (_db, repo) = setup().await;

        for (name, email) in [
            ("Zoe", "zoe@x.com"),
            ("Ana", "ana@x.com"),
            ("Mia", "mia@x.com"),
            ("Bob", "bob@x.com"),
        ] {
            add_staff(&repo, name, email).await;
        }

        let names: Vec<String> = repo
            .list_staff()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names, vec!["Ana", "Bob", "Mia", "Zoe"]);
    }

    #[tokio::test]
    async fn test_list_order_ignores_case() {
        let (_db, repo) = setup().await;

        add_staff(&repo, "ana", "ana@x.com").await;
        add_staff(&repo, "Zoe", "zoe@x.com").await;
        add_staff(&repo, "Bob", "bob@x.com").await;

        let names: Vec<String> = repo
            .list_staff()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["ana", "Bob", "Zoe"]);
    }

    #[tokio::test]
    async fn test_list_filters_by_role() {
        let (_db, repo) = setup().await;

        add_staff(&repo, "Ana", "ana@x.com").await;
        add_admin(&repo, "Boss", "boss@x.com").await;

        let staff = repo.list_by_role(RoleId::STAFF).await.unwrap();
        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0].name, "Ana");

        let admins = repo.list_by_role(RoleId::ADMIN).await.unwrap();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].role_name, "Admin");
    }

    #[tokio::test]
    async fn test_email_exists() {
        let (_db, repo) = setup().await;

        assert!(!repo.email_exists("ana@x.com").await.unwrap());

        add_staff(&repo, "Ana", "ana@x.com").await;
        assert!(repo.email_exists("ana@x.com").await.unwrap());
        assert!(!repo.email_exists("never@x.com").await.unwrap());

        // exact match only
        assert!(!repo.email_exists("ana@x.co").await.unwrap());
    }

    #[tokio::test]
    async fn test_email_exists_across_roles() {
        let (_db, repo) = setup().await;

        add_admin(&repo, "Boss", "boss@x.com").await;

        assert!(repo.email_exists("boss@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_by_store() {
        let (_db, repo) = setup().await;

        add_staff(&repo, "Ana", "ana@x.com").await;
        let err = repo
            .add(&StaffRecord::new_staff("Other Ana", "ana@x.com", "digest"))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_unknown_role_rejected_by_store() {
        let (_db, repo) = setup().await;

        let mut ghost = StaffRecord::new_staff("Ghost", "ghost@x.com", "digest");
        ghost.role_id = RoleId(99);
        let err = repo.add(&ghost).await.unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_update_changes_name_and_email_only() {
        let (_db, repo) = setup().await;

        let mut ana = add_staff(&repo, "Ana", "ana@x.com").await;
        ana.name = "Ana Maria".to_string();
        ana.email = "anamaria@x.com".to_string();
        ana.password = "plaintext-should-not-land".to_string();

        assert_eq!(repo.update(&ana).await.unwrap(), 1);

        let stored = repo.get_by_id(ana.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Ana Maria");
        assert_eq!(stored.email, "anamaria@x.com");
        assert_eq!(stored.password, "$argon2id$digest");
        assert_eq!(stored.role_id, RoleId::STAFF);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let (_db, repo) = setup().await;

        let mut ghost = StaffRecord::new_staff("Ghost", "ghost@x.com", "digest");
        ghost.id = 4242;

        assert_eq!(repo.update(&ghost).await.unwrap(), 0);
        assert!(repo.list_staff().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_never_touches_other_roles() {
        let (_db, repo) = setup().await;

        let boss = add_admin(&repo, "Boss", "boss@x.com").await;
        let mut edited = boss.clone();
        edited.name = "Hacked".to_string();
        edited.email = "hacked@x.com".to_string();

        assert_eq!(repo.update(&edited).await.unwrap(), 0);

        let stored = repo.get_by_id(boss.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Boss");
        assert_eq!(stored.email, "boss@x.com");
    }

    #[tokio::test]
    async fn test_delete_never_touches_other_roles() {
        let (_db, repo) = setup().await;

        let boss = add_admin(&repo, "Boss", "boss@x.com").await;

        assert_eq!(repo.delete(boss.id).await.unwrap(), 0);
        assert!(repo.get_by_id(boss.id).await.unwrap().is_some());
        assert_eq!(repo.count_by_role(RoleId::ADMIN).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let (_db, repo) = setup().await;

        add_staff(&repo, "Ana", "ana@x.com").await;

        assert_eq!(repo.delete(4242).await.unwrap(), 0);
        assert_eq!(repo.list_staff().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_then_delete_scenario() {
        let (_db, repo) = setup().await;

        let ana = add_staff(&repo, "Ana", "ana@x.com").await;

        let staff = repo.list_by_role(RoleId::STAFF).await.unwrap();
        assert_eq!(staff.iter().filter(|s| s.name == "Ana").count(), 1);
        assert_eq!(staff.len(), 1);

        assert_eq!(repo.delete(ana.id).await.unwrap(), 1);
        assert!(repo.list_by_role(RoleId::STAFF).await.unwrap().is_empty());
        assert!(!repo.email_exists("ana@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let (_db, repo) = setup().await;

        assert!(repo.get_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failures_propagate_after_close() {
        let (db, repo) = setup().await;
        db.close().await;

        let err = repo.list_staff().await.unwrap_err();
        assert!(err.is_connection());
        assert!(repo.email_exists("ana@x.com").await.is_err());
        assert!(repo.delete(1).await.is_err());
    }
}
