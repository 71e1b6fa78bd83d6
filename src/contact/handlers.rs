// HTTP handler for the contact form

use axum::{extract::State, response::Json};
use validator::Validate;

use crate::contact::models::{ContactMessage, CreateContact};
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::AppState;

/// Handler for POST /contact
/// Validates and stores a contact form submission
#[utoipa::path(
    post,
    path = "/contact",
    request_body = CreateContact,
    responses(
        (status = 200, description = "Submission stored", body = ContactMessage),
        (status = 400, description = "Validation failure", body = String, example = json!({"error": ["Name should only contain alphabets"]})),
        (status = 500, description = "Internal server error")
    ),
    tag = "contact"
)]
pub async fn contact_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateContact>,
) -> Result<Json<ContactMessage>, ApiError> {
    payload.validate()?;

    let stored = state.contact.create_contact(&payload).await?;

    tracing::info!("Stored contact message {}", stored.id);
    Ok(Json(stored))
}
