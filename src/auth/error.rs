// Authentication error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::fmt;
use tracing::{error, warn};

/// Errors produced by the account workflow
#[derive(Debug)]
pub enum AuthError {
    /// Missing or malformed request fields
    ValidationError(String),
    /// An account with this email already exists
    AlreadyRegistered,
    /// Unknown email or wrong password; deliberately indistinguishable so the
    /// response never reveals whether the email exists
    InvalidCredentials,
    /// Account exists but has not completed email verification
    NotVerified,
    /// Verification token unknown, already consumed, or expired
    InvalidToken,
    DatabaseError(String),
    PasswordHashError,
    TokenGenerationError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AuthError::AlreadyRegistered => write!(f, "User already exists"),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::NotVerified => write!(f, "User not verified"),
            AuthError::InvalidToken => write!(f, "Invalid or expired token"),
            AuthError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AuthError::PasswordHashError => write!(f, "Password hashing error"),
            AuthError::TokenGenerationError(msg) => write!(f, "Token generation error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // The verify endpoint renders plain text, matching the page the
        // verification link opens in a browser
        if let AuthError::InvalidToken = self {
            return (StatusCode::NOT_FOUND, "Invalid or expired token").into_response();
        }

        let (status, message) = match &self {
            AuthError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AuthError::AlreadyRegistered => {
                (StatusCode::BAD_REQUEST, "User already exists".to_string())
            }
            AuthError::InvalidCredentials => {
                warn!("Login attempt with invalid credentials");
                (StatusCode::BAD_REQUEST, "Invalid credentials".to_string())
            }
            AuthError::NotVerified => {
                (StatusCode::BAD_REQUEST, "User not verified".to_string())
            }
            AuthError::DatabaseError(msg) => {
                error!("Database error in auth: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AuthError::PasswordHashError => {
                error!("Password hashing error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AuthError::TokenGenerationError(msg) => {
                error!("Token generation error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AuthError::InvalidToken => unreachable!("handled above"),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AuthError::AlreadyRegistered => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AuthError::NotVerified => StatusCode::BAD_REQUEST,
            AuthError::InvalidToken => StatusCode::NOT_FOUND,
            AuthError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::PasswordHashError => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::TokenGenerationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
