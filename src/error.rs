// Error handling for the catalog and contact endpoints
// Auth carries its own error type in auth::error

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{debug, error};

/// Error type shared by the catalog and contact handlers
/// Each variant maps to a specific HTTP status code
#[derive(Debug)]
pub enum ApiError {
    /// Validation errors from request validation, HTTP 400
    ValidationError(validator::ValidationErrors),

    /// Resource not found by id, HTTP 404
    NotFound { resource: String, id: String },

    /// Database operation errors, HTTP 500
    /// Sensitive details are logged server-side and never sent to clients
    DatabaseError(sqlx::Error),

    /// Other internal errors, HTTP 500
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::ValidationError(errors) => {
                debug!("Validation error: {:?}", errors);
                // Flatten field errors into the message list the storefront expects
                let messages: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| match &e.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid value for {}", field),
                        })
                    })
                    .collect();
                return (StatusCode::BAD_REQUEST, Json(json!({ "error": messages })))
                    .into_response();
            }
            ApiError::NotFound { resource, id } => {
                debug!("{} with id {} not found", resource, id);
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            ApiError::DatabaseError(db_error) => {
                error!("Database error: {:?}", db_error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        ApiError::DatabaseError(error)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors)
    }
}
