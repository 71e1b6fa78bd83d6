// HTTP handlers for the catalog endpoints

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use validator::Validate;

use crate::catalog::models::{
    Card, CreateCard, CreateProduct, CreateProductResponse, ProductDetail, ProductSummary,
};
use crate::catalog::query::ProductQueryParams;
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::AppState;

/// Handler for POST /add
/// Creates a promotional card
#[utoipa::path(
    post,
    path = "/add",
    request_body = CreateCard,
    responses(
        (status = 200, description = "Card created", body = Card),
        (status = 400, description = "Missing fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "catalog"
)]
pub async fn add_card_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCard>,
) -> Result<Json<Card>, ApiError> {
    tracing::debug!("Creating card: {}", payload.title);
    payload.validate()?;

    let card = state.catalog.create_card(&payload).await?;

    tracing::info!("Created card with id {}", card.id);
    Ok(Json(card))
}

/// Handler for GET /addproducts
/// Lists every promotional card
#[utoipa::path(
    get,
    path = "/addproducts",
    responses(
        (status = 200, description = "All cards", body = Vec<Card>),
        (status = 500, description = "Internal server error")
    ),
    tag = "catalog"
)]
pub async fn list_cards_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Card>>, ApiError> {
    let cards = state.catalog.list_cards().await?;
    tracing::debug!("Retrieved {} cards", cards.len());
    Ok(Json(cards))
}

/// Handler for POST /products
/// Creates a product and returns it together with the rest of its category
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = CreateProductResponse),
        (status = 400, description = "Missing fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "catalog"
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProduct>,
) -> Result<Json<CreateProductResponse>, ApiError> {
    tracing::debug!("Creating product: {}", payload.title);
    payload.validate()?;

    let product = state.catalog.create_product(&payload).await?;

    let similar_products = match &product.categoryid {
        Some(categoryid) => state.catalog.find_similar_full(categoryid, product.id).await?,
        None => Vec::new(),
    };

    tracing::info!("Created product with id {}", product.id);
    Ok(Json(CreateProductResponse {
        message: "Product added successfully".to_string(),
        new_product: product,
        similar_products,
    }))
}

/// Handler for GET /products
/// Filtered product listing; every filter is optional
#[utoipa::path(
    get,
    path = "/products",
    params(
        ("title" = Option<String>, Query, description = "Exact title match"),
        ("image_url" = Option<String>, Query, description = "Exact image URL match"),
        ("subTitle" = Option<String>, Query, description = "Case-insensitive subtitle substring"),
        ("categoryid" = Option<String>, Query, description = "Exact category match")
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<ProductSummary>),
        (status = 500, description = "Internal server error")
    ),
    tag = "catalog"
)]
pub async fn list_products_handler(
    Query(params): Query<ProductQueryParams>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductSummary>>, ApiError> {
    tracing::debug!("Listing products with filters: {:?}", params);
    let products = state.catalog.search_products(&params).await?;
    Ok(Json(products))
}

/// Handler for GET /products/:id
/// Product detail plus same-category similar products, never including itself
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product detail", body = ProductDetail),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "catalog"
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDetail>, ApiError> {
    let product = state
        .catalog
        .find_product_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Product".to_string(),
            id: id.to_string(),
        })?;

    let similar_products = match &product.categoryid {
        Some(categoryid) => state.catalog.find_similar(categoryid, product.id).await?,
        None => Vec::new(),
    };

    Ok(Json(ProductDetail::from_product(product, similar_products)))
}
