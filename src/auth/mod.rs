// Account authentication and verification module
// Covers registration, email verification, resend, and login with JWT issuance

pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, register_handler, resend_handler, verify_handler};
pub use models::{Account, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use repository::AccountRepository;
pub use service::AuthService;
pub use token::TokenService;
