// Password hashing and verification

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::auth::error::AuthError;

/// Password service for hashing and verification
///
/// Inputs are trimmed before hashing and before comparison, so incidental
/// leading/trailing whitespace from the client never changes the outcome.
/// Hashing is CPU-bound; callers on the request path run these through
/// `tokio::task::spawn_blocking`.
pub struct PasswordService;

impl PasswordService {
    /// Argon2id tuned for interactive API calls: moderate memory and a single
    /// iteration keep verification well under the request latency budget
    fn hasher() -> Argon2<'static> {
        const MEMORY_COST_KIB: u32 = 768;
        const ITERATIONS: u32 = 1;
        const PARALLELISM: u32 = 1;
        let params = Params::new(MEMORY_COST_KIB, ITERATIONS, PARALLELISM, Some(32))
            .expect("valid Argon2 parameters");
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }

    /// Hash a password with a fresh random salt
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Self::hasher()
            .hash_password(password.trim().as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::PasswordHashError)
    }

    /// Verify a password against a stored hash
    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(stored_hash.trim())
            .map_err(|_| AuthError::PasswordHashError)?;
        Ok(Self::hasher()
            .verify_password(password.trim().as_bytes(), &parsed)
            .is_ok())
    }
}
