// Database repository for contact form submissions

use sqlx::PgPool;

use crate::contact::models::{ContactMessage, CreateContact};

#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a submission; the name is stored trimmed
    pub async fn create_contact(
        &self,
        contact: &CreateContact,
    ) -> Result<ContactMessage, sqlx::Error> {
        sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contacts (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, message",
        )
        .bind(contact.name.trim())
        .bind(&contact.email)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await
    }
}
