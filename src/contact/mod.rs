// Contact form module

pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::contact_handler;
pub use models::{ContactMessage, CreateContact};
pub use repository::ContactRepository;
