// Outbound email delivery for account verification
// SMTP credentials come from the environment; delivery is best-effort and
// never blocks registration past a bounded timeout

use axum::async_trait;
use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

/// Errors raised while building or sending an email
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),
    #[error("failed to build email message: {0}")]
    BuildError(#[from] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    TransportError(#[from] lettre::transport::smtp::Error),
}

/// Delivery hook for verification emails
/// The auth service depends on this trait so tests can record sends instead
/// of talking to a real SMTP relay
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_verification(
        &self,
        to_email: &str,
        username: &str,
        verification_link: &str,
    ) -> Result<(), MailerError>;
}

/// SMTP configuration read from the environment at startup
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
}

/// Mailer backed by an async SMTP relay (e.g. Gmail)
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    /// Build a pooled SMTP transport over TLS
    pub fn new(config: SmtpConfig) -> Result<Self, MailerError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from_address: config.username,
        })
    }

    fn verification_body(username: &str, verification_link: &str) -> String {
        format!(
            "<p>Hello {},</p>\n\
             <p>Please click <a href=\"{}\">here</a> to verify your email address.</p>\n\
             <p>Thank you.</p>",
            username, verification_link
        )
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_verification(
        &self,
        to_email: &str,
        username: &str,
        verification_link: &str,
    ) -> Result<(), MailerError> {
        let email = Message::builder()
            .from(
                format!("GlamourGroove <{}>", self.from_address)
                    .parse()
                    .map_err(|_| MailerError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to_email
                .parse()
                .map_err(|_| MailerError::InvalidAddress(to_email.to_string()))?)
            .subject("Verify Your Email Address")
            .header(ContentType::TEXT_HTML)
            .body(Self::verification_body(username, verification_link))?;

        self.transport.send(email).await?;
        tracing::info!("Verification email sent to {}", to_email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_body_contains_link_and_username() {
        let body = SmtpMailer::verification_body("Ann", "https://shop.example/verify/abc123");

        assert!(body.contains("Hello Ann"));
        assert!(body.contains("href=\"https://shop.example/verify/abc123\""));
        assert!(body.contains("verify your email address"));
    }
}
