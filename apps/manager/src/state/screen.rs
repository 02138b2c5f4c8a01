//! # Staff Screen State
//!
//! The controller behind the staff-management screen: it owns the list of
//! staff shown to the user and runs the add, edit and delete flows.
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Idle ──open_form()──► FormOpen ──input()──► Validating ─┬─► Valid      │
//! │                                                          └─► Invalid    │
//! │                                                                         │
//! │  submit() from Valid:                                                   │
//! │                                                                         │
//! │  CheckingEmail ──┬── duplicate ──► Invalid                              │
//! │                  └── unique ─► Hashing ─► Persisting ─► Refreshing ─► Idle
//! │                                                                         │
//! │  Any failure from CheckingEmail on ──► Idle, error surfaced,            │
//! │  displayed list untouched.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Edit / Delete Flow
//! ```text
//! Confirm ──► Apply ──► Refreshing ──► Idle
//!                │
//!                └── failure ──► Idle, error surfaced, no retry
//! ```
//!
//! The displayed list is only ever replaced wholesale by a successful
//! reload, so a failed flow never leaves a half-applied change on screen.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ErrorCode};
use resto_core::{
    validate_staff_form, Argon2Hasher, CoreError, CredentialHasher, StaffForm, StaffRecord,
};
use resto_db::{Database, DbConfig};

/// Where the screen currently is in one of its flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowState {
    Idle,
    FormOpen,
    Validating,
    Valid,
    Invalid,
    CheckingEmail,
    Hashing,
    Persisting,
    Refreshing,
    Confirm,
    Apply,
}

/// Success message of a completed flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub message: String,

    /// Staff member the flow acted on, if any.
    pub staff_id: Option<i64>,
}

impl Notice {
    fn new(message: &str, staff_id: i64) -> Self {
        Notice {
            message: message.to_string(),
            staff_id: Some(staff_id),
        }
    }
}

/// Staff screen controller.
///
/// Holds a [`Database`] handle, never a connection: every repository call
/// borrows a pooled connection for its own duration.
pub struct StaffScreen<H = Argon2Hasher> {
    db: Database,
    hasher: H,
    staff: Vec<StaffRecord>,
    state: FlowState,
}

impl StaffScreen<Argon2Hasher> {
    /// Connects to the store and opens the screen with the Argon2 hasher.
    ///
    /// ## Returns
    /// * `Err(ApiError)` with `ErrorCode::ConnectionError` - store unreachable
    pub async fn connect(config: DbConfig) -> Result<Self, ApiError> {
        let db = Database::new(config).await.map_err(|e| {
            tracing::error!(error = %e, "Database unavailable");
            ApiError::connection()
        })?;

        StaffScreen::open(db, Argon2Hasher).await
    }
}

impl<H: CredentialHasher> StaffScreen<H> {
    /// Opens the screen on an existing database and loads the staff list.
    ///
    /// ## Returns
    /// * `Err(ApiError)` with `ErrorCode::ConnectionError` - store unreachable
    /// * `Err(ApiError)` with `ErrorCode::QueryError` - store reachable but the
    ///   listing failed ("Failed to load staff")
    pub async fn open(db: Database, hasher: H) -> Result<Self, ApiError> {
        let mut screen = StaffScreen {
            db,
            hasher,
            staff: Vec::new(),
            state: FlowState::Idle,
        };

        if let Err(e) = screen.reload().await {
            tracing::error!(error = %e, "Initial staff load failed");
            if e.is_connection() {
                return Err(ApiError::connection());
            }
            return Err(ApiError::new(ErrorCode::QueryError, "Failed to load staff"));
        }

        info!(count = screen.staff.len(), "Staff screen opened");
        Ok(screen)
    }

    /// Staff members currently displayed, ordered by name.
    pub fn staff(&self) -> &[StaffRecord] {
        &self.staff
    }

    /// Looks up a displayed staff member.
    pub fn find(&self, id: i64) -> Option<&StaffRecord> {
        self.staff.iter().find(|s| s.id == id)
    }

    /// Current flow state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    fn transition(&mut self, next: FlowState) {
        debug!(from = ?self.state, to = ?next, "Staff screen transition");
        self.state = next;
    }

    /// Ends the current flow with an error.
    fn abort(&mut self, err: ApiError) -> ApiError {
        self.transition(FlowState::Idle);
        err
    }

    /// Replaces the displayed list with a fresh one, or leaves it untouched.
    async fn reload(&mut self) -> Result<(), resto_db::DbError> {
        let fresh = self.db.staff().list_staff().await?;
        self.staff = fresh;
        Ok(())
    }

    // =========================================================================
    // Add
    // =========================================================================

    /// Opens the add dialog.
    pub fn open_form(&mut self) {
        self.transition(FlowState::FormOpen);
    }

    /// Re-validates the dialog after an input event.
    ///
    /// Returns whether the save action should be enabled.
    pub fn input(&mut self, form: &StaffForm) -> bool {
        self.transition(FlowState::Validating);

        let valid = validate_staff_form(form).is_ok();
        self.transition(if valid {
            FlowState::Valid
        } else {
            FlowState::Invalid
        });

        valid
    }

    /// Closes the add dialog without saving.
    pub fn cancel(&mut self) {
        self.transition(FlowState::Idle);
    }

    /// Submits the add dialog.
    ///
    /// ## Steps
    /// 1. Validate (no I/O) - failure leaves the screen `Invalid`
    /// 2. Check the email against every user - duplicate leaves it `Invalid`
    /// 3. Hash the password
    /// 4. Insert the record
    /// 5. Reload the list
    pub async fn submit(&mut self, form: &StaffForm) -> Result<Notice, ApiError> {
        if !self.input(form) {
            let err = validate_staff_form(form)
                .err()
                .map(|e| ApiError::from(CoreError::from(e)))
                .unwrap_or_else(|| ApiError::validation("Invalid form"));
            return Err(err);
        }

        self.transition(FlowState::CheckingEmail);
        match self.db.staff().email_exists(&form.email).await {
            Ok(false) => {}
            Ok(true) => {
                info!(email = %form.email, "Rejected duplicate email");
                self.transition(FlowState::Invalid);
                return Err(ApiError::duplicate_email());
            }
            Err(e) => {
                return Err(self.abort(ApiError::from(e).context("Error while adding")));
            }
        }

        self.transition(FlowState::Hashing);
        let digest = match self.hasher.hash(&form.password) {
            Ok(digest) => digest,
            Err(e) => return Err(self.abort(ApiError::from(e).context("Error while adding"))),
        };

        self.transition(FlowState::Persisting);
        let record = StaffRecord::from(form).with_password(digest);
        let saved = match self.db.staff().add(&record).await {
            Ok(saved) => saved,
            Err(e) => return Err(self.abort(ApiError::from(e).context("Error while adding"))),
        };
        info!(id = saved.id, "Staff member added");

        self.refresh_after_apply().await?;
        Ok(Notice::new("Staff added successfully", saved.id))
    }

    // =========================================================================
    // Edit / Delete
    // =========================================================================

    /// Applies the edit dialog: new name and email for one staff member.
    ///
    /// An id that matches no staff row changes nothing and is still reported
    /// as a success, with a warning in the log.
    pub async fn edit(&mut self, id: i64, name: &str, email: &str) -> Result<Notice, ApiError> {
        self.transition(FlowState::Confirm);

        let mut record = StaffRecord::new_staff(name, email, String::new());
        record.id = id;

        self.transition(FlowState::Apply);
        match self.db.staff().update(&record).await {
            Ok(0) => warn!(id, "Edit matched no staff member"),
            Ok(_) => info!(id, "Staff member updated"),
            Err(e) => {
                let err = ApiError::from(e);
                let err = if err.code == ErrorCode::DuplicateEmail {
                    err
                } else {
                    err.with_message("Error while updating")
                };
                return Err(self.abort(err));
            }
        }

        self.refresh_after_apply().await?;
        Ok(Notice::new("Staff updated successfully", id))
    }

    /// Deletes one staff member after the user confirmed.
    ///
    /// Same zero-row policy as [`edit`](Self::edit). Non-staff users are never
    /// deleted.
    pub async fn delete(&mut self, id: i64) -> Result<Notice, ApiError> {
        self.transition(FlowState::Confirm);

        self.transition(FlowState::Apply);
        match self.db.staff().delete(id).await {
            Ok(0) => warn!(id, "Delete matched no staff member"),
            Ok(_) => info!(id, "Staff member deleted"),
            Err(e) => {
                return Err(self.abort(ApiError::from(e).with_message("Error while deleting")));
            }
        }

        self.refresh_after_apply().await?;
        Ok(Notice::new("Staff deleted successfully", id))
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Reloads the displayed list.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.refresh_after_apply().await
    }

    async fn refresh_after_apply(&mut self) -> Result<(), ApiError> {
        self.transition(FlowState::Refreshing);

        if let Err(e) = self.reload().await {
            return Err(self.abort(ApiError::from(e).with_message("Error while refreshing")));
        }

        self.transition(FlowState::Idle);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use resto_core::{CoreResult, RoleId};

    /// Skips Argon2 to keep the flow tests fast.
    struct PlainHasher;

    impl CredentialHasher for PlainHasher {
        fn hash(&self, plaintext: &str) -> CoreResult<String> {
            Ok(format!("hashed:{}", plaintext))
        }

        fn verify(&self, plaintext: &str, digest: &str) -> bool {
            digest == format!("hashed:{}", plaintext)
        }
    }

    struct FailingHasher;

    impl CredentialHasher for FailingHasher {
        fn hash(&self, _plaintext: &str) -> CoreResult<String> {
            Err(CoreError::Hashing("no entropy".to_string()))
        }

        fn verify(&self, _plaintext: &str, _digest: &str) -> bool {
            false
        }
    }

    async fn setup() -> (Database, StaffScreen<PlainHasher>) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let screen = StaffScreen::open(db.clone(), PlainHasher).await.unwrap();
        (db, screen)
    }

    fn form(name: &str, email: &str) -> StaffForm {
        StaffForm::new(name, email, "secret1", "secret1")
    }

    #[tokio::test]
    async fn test_open_empty() {
        let (_db, screen) = setup().await;

        assert!(screen.staff().is_empty());
        assert_eq!(screen.state(), FlowState::Idle);
    }

    #[tokio::test]
    async fn test_input_toggles_validity() {
        let (_db, mut screen) = setup().await;
        screen.open_form();
        assert_eq!(screen.state(), FlowState::FormOpen);

        assert!(!screen.input(&StaffForm::new("Bob", "a@b.com", "secret1", "secret")));
        assert_eq!(screen.state(), FlowState::Invalid);

        assert!(screen.input(&StaffForm::new("Bob", "a@b.com", "secret1", "secret1")));
        assert_eq!(screen.state(), FlowState::Valid);

        screen.cancel();
        assert_eq!(screen.state(), FlowState::Idle);
    }

    #[tokio::test]
    async fn test_submit_adds_and_refreshes() {
        let (db, mut screen) = setup().await;

        let notice = screen.submit(&form("Ana", "ana@x.com")).await.unwrap();

        assert_eq!(notice.message, "Staff added successfully");
        assert_eq!(screen.state(), FlowState::Idle);
        assert_eq!(screen.staff().len(), 1);

        let ana = &screen.staff()[0];
        assert_eq!(Some(ana.id), notice.staff_id);
        assert_eq!(ana.role_id, RoleId::STAFF);

        // stored hashed, never as typed
        let stored = db.staff().get_by_id(ana.id).await.unwrap().unwrap();
        assert_eq!(stored.password, "hashed:secret1");
    }

    #[tokio::test]
    async fn test_submit_invalid_form_does_no_io() {
        let (db, mut screen) = setup().await;
        db.close().await;

        let err = screen
            .submit(&StaffForm::new("", "a@b.com", "secret1", "secret1"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(screen.state(), FlowState::Invalid);
    }

    #[tokio::test]
    async fn test_submit_duplicate_email() {
        let (_db, mut screen) = setup().await;
        screen.submit(&form("Ana", "ana@x.com")).await.unwrap();

        let err = screen.submit(&form("Other", "ana@x.com")).await.unwrap_err();

        assert_eq!(err, ApiError::duplicate_email());
        assert_eq!(screen.state(), FlowState::Invalid);
        assert_eq!(screen.staff().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_duplicate_of_admin_email() {
        let (db, mut screen) = setup().await;
        let mut boss = StaffRecord::new_staff("Boss", "boss@x.com", "hashed:x");
        boss.role_id = RoleId::ADMIN;
        db.staff().add(&boss).await.unwrap();

        let err = screen.submit(&form("Bob", "boss@x.com")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateEmail);
    }

    #[tokio::test]
    async fn test_hashing_failure_leaves_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut screen = StaffScreen::open(db.clone(), FailingHasher).await.unwrap();

        let err = screen.submit(&form("Ana", "ana@x.com")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Internal);
        assert!(err.message.starts_with("Error while adding"));
        assert_eq!(screen.state(), FlowState::Idle);
        assert!(db.staff().list_staff().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_persist_failure_leaves_list() {
        let (db, mut screen) = setup().await;
        screen.submit(&form("Ana", "ana@x.com")).await.unwrap();

        sqlx::query(
            "CREATE TRIGGER reject_users BEFORE INSERT ON users \
             BEGIN SELECT RAISE(ABORT, 'insert rejected'); END",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let err = screen.submit(&form("Bob", "bob@x.com")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::QueryError);
        assert!(err.message.starts_with("Error while adding"));
        assert_eq!(screen.state(), FlowState::Idle);
        assert_eq!(screen.staff().len(), 1);
        assert_eq!(screen.staff()[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_list() {
        let (db, mut screen) = setup().await;
        screen.submit(&form("Ana", "ana@x.com")).await.unwrap();

        // the listing join needs `roles`; inserts keep working
        sqlx::query("ALTER TABLE roles RENAME TO roles_old")
            .execute(db.pool())
            .await
            .unwrap();

        let err = screen.submit(&form("Bob", "bob@x.com")).await.unwrap_err();

        assert_eq!(err.message, "Error while refreshing");
        assert_eq!(screen.state(), FlowState::Idle);
        assert_eq!(screen.staff().len(), 1);
        assert_eq!(screen.staff()[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_edit() {
        let (_db, mut screen) = setup().await;
        screen.submit(&form("Ana", "ana@x.com")).await.unwrap();
        let id = screen.staff()[0].id;

        let notice = screen.edit(id, "Ana Maria", "anamaria@x.com").await.unwrap();

        assert_eq!(notice.message, "Staff updated successfully");
        assert_eq!(screen.find(id).unwrap().name, "Ana Maria");
        assert_eq!(screen.find(id).unwrap().email, "anamaria@x.com");
        assert_eq!(screen.state(), FlowState::Idle);
    }

    #[tokio::test]
    async fn test_edit_unknown_id_is_success() {
        let (_db, mut screen) = setup().await;

        let notice = screen.edit(4242, "Ghost", "ghost@x.com").await.unwrap();

        assert_eq!(notice.staff_id, Some(4242));
        assert!(screen.staff().is_empty());
    }

    #[tokio::test]
    async fn test_edit_to_taken_email() {
        let (_db, mut screen) = setup().await;
        screen.submit(&form("Ana", "ana@x.com")).await.unwrap();
        screen.submit(&form("Bob", "bob@x.com")).await.unwrap();
        let bob = screen.staff()[1].id;

        let err = screen.edit(bob, "Bob", "ana@x.com").await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateEmail);
        assert_eq!(screen.find(bob).unwrap().email, "bob@x.com");
    }

    #[tokio::test]
    async fn test_delete() {
        let (_db, mut screen) = setup().await;
        screen.submit(&form("Ana", "ana@x.com")).await.unwrap();
        let id = screen.staff()[0].id;

        let notice = screen.delete(id).await.unwrap();

        assert_eq!(notice.message, "Staff deleted successfully");
        assert!(screen.staff().is_empty());
    }

    #[tokio::test]
    async fn test_delete_admin_is_noop() {
        let (db, mut screen) = setup().await;
        let mut boss = StaffRecord::new_staff("Boss", "boss@x.com", "hashed:x");
        boss.role_id = RoleId::ADMIN;
        let boss = db.staff().add(&boss).await.unwrap();

        screen.delete(boss.id).await.unwrap();

        assert!(db.staff().get_by_id(boss.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_apply_failure_surfaced() {
        let (db, mut screen) = setup().await;
        screen.submit(&form("Ana", "ana@x.com")).await.unwrap();
        let id = screen.staff()[0].id;
        db.close().await;

        let err = screen.delete(id).await.unwrap_err();

        assert_eq!(err.message, "Error while deleting");
        assert_eq!(screen.state(), FlowState::Idle);
        assert_eq!(screen.staff().len(), 1);
    }

    #[tokio::test]
    async fn test_open_load_failure_is_not_fatal() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query("ALTER TABLE roles RENAME TO roles_old")
            .execute(db.pool())
            .await
            .unwrap();
        assert!(db.health_check().await);

        let err = StaffScreen::open(db, PlainHasher).await.err().unwrap();

        assert_eq!(err.code, ErrorCode::QueryError);
        assert_eq!(err.message, "Failed to load staff");
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn test_open_on_closed_pool_is_fatal() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        let err = StaffScreen::open(db, PlainHasher).await.err().unwrap();

        assert_eq!(err, ApiError::connection());
        assert!(err.is_fatal());
    }
}
