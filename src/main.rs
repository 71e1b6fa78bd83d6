mod auth;
mod catalog;
mod contact;
mod db;
mod email;
mod error;
mod extract;
mod validation;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{AccountRepository, AuthService, TokenService};
use catalog::CatalogRepository;
use contact::ContactRepository;
use email::{SmtpConfig, SmtpMailer};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register_handler,
        auth::handlers::verify_handler,
        auth::handlers::login_handler,
        auth::handlers::resend_handler,
        catalog::handlers::add_card_handler,
        catalog::handlers::list_cards_handler,
        catalog::handlers::create_product_handler,
        catalog::handlers::list_products_handler,
        catalog::handlers::get_product_handler,
        contact::handlers::contact_handler,
    ),
    components(
        schemas(
            auth::models::RegisterRequest,
            auth::models::RegisterResponse,
            auth::models::LoginRequest,
            auth::models::LoginResponse,
            auth::models::ResendRequest,
            catalog::models::Card,
            catalog::models::CreateCard,
            catalog::models::Product,
            catalog::models::CreateProduct,
            catalog::models::CreateProductResponse,
            catalog::models::ProductSummary,
            catalog::models::SimilarProduct,
            catalog::models::ProductDetail,
            contact::models::ContactMessage,
            contact::models::CreateContact,
        )
    ),
    tags(
        (name = "auth", description = "Registration, email verification, and login"),
        (name = "catalog", description = "Cards and product catalog"),
        (name = "contact", description = "Contact form")
    ),
    info(
        title = "GlamourGroove API",
        version = "1.0.0",
        description = "Backend for the GlamourGroove storefront"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
/// Store, mailer, and signer are constructed once at startup and injected here
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub catalog: CatalogRepository,
    pub contact: ContactRepository,
}

/// Handler for GET /
async fn root_handler() -> &'static str {
    "Hello World!"
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Account endpoints
        .route("/register", post(auth::register_handler))
        .route("/verify/:token", get(auth::verify_handler))
        .route("/login", post(auth::login_handler))
        .route("/resend-verification", post(auth::resend_handler))
        // Catalog endpoints
        .route("/add", post(catalog::add_card_handler))
        .route("/addproducts", get(catalog::list_cards_handler))
        .route("/products", post(catalog::create_product_handler))
        .route("/products", get(catalog::list_products_handler))
        .route("/products/:id", get(catalog::get_product_handler))
        // Contact form
        .route("/contact", post(contact::contact_handler))
        .route("/", get(root_handler))
        .layer(cors)
        .with_state(state)
}

/// Build the shared application state from a pool and configuration
fn build_state(
    pool: PgPool,
    jwt_secret: String,
    mailer: Arc<dyn email::Mailer>,
    public_base_url: String,
) -> AppState {
    let auth = AuthService::new(
        AccountRepository::new(pool.clone()),
        TokenService::new(jwt_secret),
        mailer,
        public_base_url,
    );

    AppState {
        auth: Arc::new(auth),
        catalog: CatalogRepository::new(pool.clone()),
        contact: ContactRepository::new(pool),
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("GlamourGroove API - Starting...");

    // Get configuration from environment variables
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in environment");
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let public_base_url = std::env::var("PUBLIC_BASE_URL")
        .unwrap_or_else(|_| format!("http://{}:{}", host, port));

    let smtp_config = SmtpConfig {
        host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
        username: std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME must be set in environment"),
        password: std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD must be set in environment"),
    };

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    // Construct the SMTP mailer once; handlers reach it through AppState
    let mailer = SmtpMailer::new(smtp_config).expect("Failed to configure SMTP mailer");

    let state = build_state(db_pool, jwt_secret, Arc::new(mailer), public_base_url);
    let app = create_router(state);

    // Start the Axum server
    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("GlamourGroove API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}
