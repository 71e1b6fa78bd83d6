// Catalog module: promotional cards and the product collection,
// including the same-category similarity lookup

pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;

pub use handlers::{
    add_card_handler, create_product_handler, get_product_handler, list_cards_handler,
    list_products_handler,
};
pub use models::{Card, CreateCard, CreateProduct, Product, ProductDetail, ProductSummary};
pub use repository::CatalogRepository;
