// Database repository for account records

use sha2::{Digest, Sha256};
use sqlx::PgPool;

use crate::auth::{error::AuthError, models::Account};

const ACCOUNT_COLUMNS: &str =
    "id, username, email, password_hash, verified, verification_token_hash, token_issued_at, created_at";

/// Account repository for database operations
///
/// Verification tokens are stored as SHA-256 digests, so a database dump
/// never exposes a usable verification link.
#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hash a verification token for at-rest storage and lookup
    fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Create a new unverified account holding an unconsumed token digest
    ///
    /// Duplicate emails surface as `AlreadyRegistered` via the unique index,
    /// never via a separate existence check, so two concurrent registrations
    /// for the same address cannot both succeed.
    pub async fn create_account(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        verification_token: &str,
    ) -> Result<Account, AuthError> {
        let token_hash = Self::hash_token(verification_token);

        let account = sqlx::query_as::<_, Account>(&format!(
            "INSERT INTO accounts (username, email, password_hash, verified, verification_token_hash, token_issued_at)
             VALUES ($1, $2, $3, FALSE, $4, NOW())
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(token_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AuthError::AlreadyRegistered;
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        Ok(account)
    }

    /// Find an account by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthError> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(account)
    }

    /// Atomically consume a verification token: flip the account to verified
    /// and clear the digest in one statement, so a token can only ever be
    /// redeemed once. Tokens older than 24 hours read as unknown.
    pub async fn consume_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, AuthError> {
        let token_hash = Self::hash_token(token);

        let account = sqlx::query_as::<_, Account>(&format!(
            "UPDATE accounts
             SET verified = TRUE, verification_token_hash = NULL, token_issued_at = NULL
             WHERE verification_token_hash = $1
               AND token_issued_at > NOW() - INTERVAL '24 hours'
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(account)
    }

    /// Replace the verification token on an unverified account
    /// Returns None when the email is unknown or the account is already
    /// verified; callers treat both as a silent no-op.
    pub async fn replace_verification_token(
        &self,
        email: &str,
        verification_token: &str,
    ) -> Result<Option<Account>, AuthError> {
        let token_hash = Self::hash_token(verification_token);

        let account = sqlx::query_as::<_, Account>(&format!(
            "UPDATE accounts
             SET verification_token_hash = $2, token_issued_at = NOW()
             WHERE LOWER(email) = LOWER($1) AND verified = FALSE
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(email)
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(account)
    }
}
