// Contact form data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{validate_contact_name, validate_gmail_address, validate_non_blank};

/// Stored contact form submission
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact form payload
/// The storefront only accepts alphabetic names and Gmail addresses
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContact {
    #[validate(custom = "validate_contact_name")]
    #[schema(example = "Alisha Khan")]
    pub name: String,
    #[validate(custom = "validate_gmail_address")]
    #[schema(example = "alisha@gmail.com")]
    pub email: String,
    #[validate(custom = "validate_non_blank")]
    #[schema(example = "Where is my order?")]
    pub message: String,
}
