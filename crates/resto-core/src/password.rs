//! # Password Hashing
//!
//! One-way digests for user passwords.
//!
//! The repository stores whatever it is given, so callers hash before
//! calling `add`:
//! ```text
//! StaffForm.password ──► CredentialHasher::hash() ──► StaffRecord.password ──► add()
//!     (plaintext)            (Argon2id + salt)            (PHC string)
//! ```
//!
//! ## Usage
//! ```rust
//! use resto_core::{Argon2Hasher, CredentialHasher};
//!
//! let hasher = Argon2Hasher::default();
//! let digest = hasher.hash("secret1").unwrap();
//!
//! assert!(digest.starts_with("$argon2"));
//! assert!(hasher.verify("secret1", &digest));
//! ```

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{CoreError, CoreResult};

/// Maps plaintext passwords to salted one-way digests.
pub trait CredentialHasher: Send + Sync {
    /// Hashes a plaintext password with a fresh salt.
    fn hash(&self, plaintext: &str) -> CoreResult<String>;

    /// Checks a plaintext password against a stored digest.
    ///
    /// A digest that cannot be parsed never verifies.
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}

/// Argon2id hasher with the crate's default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> CoreResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| CoreError::Hashing(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let parsed = match PasswordHash::new(digest) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
