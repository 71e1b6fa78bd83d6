// Account data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_non_blank;

/// Account database model
///
/// `verification_token_hash` is present exactly while the account is
/// unverified and holds an unconsumed token digest; it is cleared when the
/// token is consumed
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub verified: bool,
    pub verification_token_hash: Option<String>,
    pub token_issued_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Registration request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(custom = "validate_non_blank")]
    #[schema(example = "Ann")]
    pub username: String,
    #[validate(email(message = "A valid email is required"))]
    #[schema(example = "ann@x.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret1")]
    pub password: String,
}

/// Registration response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub verified: bool,
    pub username: String,
}

/// Login request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response DTO, field names match what the storefront reads
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
    pub verified: bool,
}

/// Resend-verification request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ResendRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_requires_all_fields() {
        let req = RegisterRequest {
            username: "  ".to_string(),
            email: "ann@x.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(req.validate().is_err(), "blank username must fail validation");

        let req = RegisterRequest {
            username: "Ann".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        assert!(req.validate().is_err(), "malformed email must fail validation");

        let req = RegisterRequest {
            username: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password: "".to_string(),
        };
        assert!(req.validate().is_err(), "empty password must fail validation");

        let req = RegisterRequest {
            username: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_response_serializes_jwt_token_key() {
        let response = LoginResponse {
            jwt_token: "abc".to_string(),
            verified: true,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"jwtToken\":\"abc\""));
        assert!(json.contains("\"verified\":true"));
    }
}
