// Token issuance: opaque email-verification tokens and signed session JWTs

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// Mint an opaque verification token: 20 random bytes from the OS generator,
/// hex-encoded. 160 bits of entropy makes collisions and guessing negligible.
pub fn generate_verification_token() -> String {
    let mut bytes = [0u8; 20];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// JWT claims for a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // account email
    pub iat: i64,    // issued at timestamp
    pub exp: i64,    // expiration timestamp
}

/// Session token service for JWT operations
/// Session tokens expire 24 hours after issuance
pub struct TokenService {
    secret: String,
    session_token_duration: i64, // in seconds
}

impl TokenService {
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            session_token_duration: 86400, // 24 hours
        }
    }

    /// Generate a signed session token carrying the account email
    pub fn generate_session_token(&self, email: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: email.to_string(),
            iat: now,
            exp: now + self.session_token_duration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Validate a session token and return its claims
    pub fn validate_session_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}
