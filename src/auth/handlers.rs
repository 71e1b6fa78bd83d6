// HTTP handlers for the account endpoints

use axum::{
    extract::{Path, State},
    response::{Html, Json},
};
use serde_json::{json, Value};

use crate::auth::{
    error::AuthError,
    models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ResendRequest},
};
use crate::extract::AppJson;
use crate::AppState;

/// Handler for POST /register
/// Creates an unverified account and emails a verification link
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created, verification email dispatched", body = RegisterResponse),
        (status = 400, description = "Missing fields or duplicate email", body = String, example = json!({"error": "User already exists"})),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AuthError> {
    tracing::debug!("Registration request for {}", request.email);
    let response = state.auth.register(request).await?;
    Ok(Json(response))
}

/// Handler for GET /verify/:token
/// Consumes a verification token and renders an HTML confirmation page
#[utoipa::path(
    get,
    path = "/verify/{token}",
    params(
        ("token" = String, Path, description = "Opaque verification token from the email link")
    ),
    responses(
        (status = 200, description = "Email verified, HTML confirmation"),
        (status = 404, description = "Invalid or expired token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn verify_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Html<String>, AuthError> {
    state.auth.verify(&token).await?;

    Ok(Html(
        "Email verified successfully. Go back to the website and \
         <a href=\"/login\">login</a> with your credentials."
            .to_string(),
    ))
}

/// Handler for POST /login
/// Authenticates a verified account and returns a session JWT
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, description = "Invalid credentials or unverified account", body = String, example = json!({"error": "Invalid credentials"})),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    tracing::debug!("Login request for {}", request.email);
    let response = state.auth.login(request).await?;
    Ok(Json(response))
}

/// Handler for POST /resend-verification
/// Reissues the verification token for an unverified account
/// Always responds with the same message so addresses cannot be probed
#[utoipa::path(
    post,
    path = "/resend-verification",
    request_body = ResendRequest,
    responses(
        (status = 200, description = "Resend accepted (whether or not the address is registered)"),
        (status = 400, description = "Malformed email address"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn resend_handler(
    State(state): State<AppState>,
    AppJson(request): AppJson<ResendRequest>,
) -> Result<Json<Value>, AuthError> {
    state.auth.resend_verification(request).await?;

    Ok(Json(json!({
        "message": "If the account exists and is unverified, a new verification email has been sent."
    })))
}
