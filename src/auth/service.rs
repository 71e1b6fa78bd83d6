// Account workflow - business logic layer
// Orchestrates registration, email verification, resend, and login

use std::sync::Arc;
use std::time::Duration;

use tokio::task;
use tokio::time::timeout;
use validator::Validate;

use crate::auth::{
    error::AuthError,
    models::{Account, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ResendRequest},
    password::PasswordService,
    repository::AccountRepository,
    token::{generate_verification_token, TokenService},
};
use crate::email::Mailer;

/// Outbound email delivery never stalls a registration longer than this
const MAIL_TIMEOUT: Duration = Duration::from_secs(10);

/// Authentication service coordinating the account lifecycle
pub struct AuthService {
    repository: AccountRepository,
    token_service: TokenService,
    mailer: Arc<dyn Mailer>,
    /// Base URL the verification links point back to
    public_base_url: String,
}

impl AuthService {
    pub fn new(
        repository: AccountRepository,
        token_service: TokenService,
        mailer: Arc<dyn Mailer>,
        public_base_url: String,
    ) -> Self {
        Self {
            repository,
            token_service,
            mailer,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Register a new account
    ///
    /// The account is persisted unverified with a fresh verification token,
    /// then the verification link is emailed best-effort: a delivery failure
    /// is logged and the registration still succeeds. The resend endpoint is
    /// the recovery path for lost emails.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AuthError> {
        request
            .validate()
            .map_err(|e| AuthError::ValidationError(flatten_validation_errors(&e)))?;

        let username = request.username.trim().to_string();
        let email = request.email.trim().to_string();

        let password = request.password;
        let password_hash = task::spawn_blocking(move || PasswordService::hash_password(&password))
            .await
            .map_err(|_| AuthError::PasswordHashError)??;

        let verification_token = generate_verification_token();
        let account = self
            .repository
            .create_account(&username, &email, &password_hash, &verification_token)
            .await?;

        tracing::info!("Registered new account {} (unverified)", account.id);
        self.send_verification_email(&account, &verification_token)
            .await;

        Ok(RegisterResponse {
            message: "Registration successful! Please check your email for verification."
                .to_string(),
            verified: false,
            username: account.username,
        })
    }

    /// Consume a verification token, transitioning the account to verified
    pub async fn verify(&self, token: &str) -> Result<Account, AuthError> {
        let account = self
            .repository
            .consume_verification_token(token)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        tracing::info!("Account {} verified", account.id);
        Ok(account)
    }

    /// Authenticate an account and issue a session token
    ///
    /// Unknown emails and wrong passwords both map to `InvalidCredentials`,
    /// so the response never confirms whether an address is registered.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        request
            .validate()
            .map_err(|e| AuthError::ValidationError(flatten_validation_errors(&e)))?;

        let account = self
            .repository
            .find_by_email(request.email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.verified {
            return Err(AuthError::NotVerified);
        }

        let password = request.password;
        let stored_hash = account.password_hash.clone();
        let matched =
            task::spawn_blocking(move || PasswordService::verify_password(&password, &stored_hash))
                .await
                .map_err(|_| AuthError::PasswordHashError)??;

        if !matched {
            tracing::debug!("Password mismatch for account {}", account.id);
            return Err(AuthError::InvalidCredentials);
        }

        let jwt_token = self.token_service.generate_session_token(&account.email)?;

        Ok(LoginResponse {
            jwt_token,
            verified: account.verified,
        })
    }

    /// Mint a fresh verification token for an unverified account and resend
    /// the verification email. Unknown emails and already-verified accounts
    /// are silent no-ops, so this endpoint cannot be used to probe which
    /// addresses are registered.
    pub async fn resend_verification(&self, request: ResendRequest) -> Result<(), AuthError> {
        request
            .validate()
            .map_err(|e| AuthError::ValidationError(flatten_validation_errors(&e)))?;

        let verification_token = generate_verification_token();
        match self
            .repository
            .replace_verification_token(request.email.trim(), &verification_token)
            .await?
        {
            Some(account) => {
                tracing::info!("Reissued verification token for account {}", account.id);
                self.send_verification_email(&account, &verification_token)
                    .await;
            }
            None => {
                tracing::debug!("Resend requested for unknown or verified email");
            }
        }
        Ok(())
    }

    /// Best-effort delivery of the verification link with a bounded timeout
    async fn send_verification_email(&self, account: &Account, token: &str) {
        let link = format!("{}/verify/{}", self.public_base_url, token);
        match timeout(
            MAIL_TIMEOUT,
            self.mailer
                .send_verification(&account.email, &account.username, &link),
        )
        .await
        {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!("Verification email for account {} failed: {}", account.id, e);
            }
            Err(_) => {
                tracing::warn!("Verification email for account {} timed out", account.id);
            }
        }
    }
}

/// Collapse validator's field error map into a single client-facing message
fn flatten_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid value for {}", field),
            })
        })
        .collect();
    messages.sort();
    if messages.is_empty() {
        "Username, email, and password are required".to_string()
    } else {
        messages.join(", ")
    }
}
