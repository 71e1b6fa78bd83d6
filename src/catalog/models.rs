// Catalog data models and DTOs
// JSON field names follow what the storefront sends (camelCase subTitle);
// database columns stay snake_case

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_non_blank;

/// Promotional card shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Card {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "https://cdn.example/banner.jpg")]
    pub image_url: String,
    #[schema(example = "Summer Sale")]
    pub title: String,
    #[schema(example = "Up to 50% off")]
    pub description: String,
}

/// Payload for creating a card
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCard {
    #[validate(custom = "validate_non_blank")]
    pub image_url: String,
    #[validate(custom = "validate_non_blank")]
    pub title: String,
    #[validate(custom = "validate_non_blank")]
    pub description: String,
}

/// Catalog product
/// rating and categoryid are free-form text, matching the document shapes
/// the storefront has always sent
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub image_url: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "subTitle")]
    pub sub_title: Option<String>,
    pub rating: Option<String>,
    pub categoryid: Option<String>,
    pub availability: Option<String>,
}

/// Payload for creating a product
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(custom = "validate_non_blank")]
    pub title: String,
    #[validate(custom = "validate_non_blank")]
    pub image_url: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "subTitle")]
    pub sub_title: Option<String>,
    pub rating: Option<String>,
    pub categoryid: Option<String>,
    pub availability: Option<String>,
}

/// Response for POST /products: the stored record plus the rest of its category
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateProductResponse {
    pub message: String,
    #[serde(rename = "newProduct")]
    pub new_product: Product,
    #[serde(rename = "similarProducts")]
    pub similar_products: Vec<Product>,
}

/// Trimmed projection returned by the filtered product listing
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ProductSummary {
    pub id: i32,
    pub image_url: String,
    pub title: String,
    #[serde(rename = "subTitle")]
    pub sub_title: Option<String>,
    pub categoryid: Option<String>,
}

/// Similar-product entry on the product detail page
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct SimilarProduct {
    pub id: i32,
    pub image_url: String,
    pub title: String,
    pub price: Option<f64>,
}

/// Product detail response: the full record plus its same-category neighbours
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    pub id: i32,
    pub image_url: String,
    pub title: String,
    pub price: Option<f64>,
    #[serde(rename = "subTitle")]
    pub sub_title: Option<String>,
    pub description: Option<String>,
    pub rating: Option<String>,
    pub availability: Option<String>,
    pub similar_products: Vec<SimilarProduct>,
}

impl ProductDetail {
    pub fn from_product(product: Product, similar_products: Vec<SimilarProduct>) -> Self {
        Self {
            id: product.id,
            image_url: product.image_url,
            title: product.title,
            price: product.price,
            sub_title: product.sub_title,
            description: product.description,
            rating: product.rating,
            availability: product.availability,
            similar_products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_sub_title_as_camel_case() {
        let product = Product {
            id: 7,
            image_url: "https://cdn.example/p.jpg".to_string(),
            title: "Velvet Lipstick".to_string(),
            description: None,
            price: Some(12.5),
            sub_title: Some("Lipstick".to_string()),
            rating: Some("4.5".to_string()),
            categoryid: Some("5".to_string()),
            availability: Some("in stock".to_string()),
        };

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"subTitle\":\"Lipstick\""));
        assert!(!json.contains("sub_title"));
    }

    #[test]
    fn test_create_product_accepts_sparse_payload() {
        let json = r#"{"title": "Velvet Lipstick", "image_url": "https://cdn.example/p.jpg"}"#;
        let create: CreateProduct = serde_json::from_str(json).unwrap();

        assert_eq!(create.title, "Velvet Lipstick");
        assert_eq!(create.price, None);
        assert_eq!(create.sub_title, None);
        assert!(create.validate().is_ok());
    }

    #[test]
    fn test_create_product_rejects_blank_title() {
        let json = r#"{"title": "  ", "image_url": "https://cdn.example/p.jpg"}"#;
        let create: CreateProduct = serde_json::from_str(json).unwrap();
        assert!(create.validate().is_err());
    }

    #[test]
    fn test_product_detail_carries_similar_products() {
        let product = Product {
            id: 42,
            image_url: "https://cdn.example/p.jpg".to_string(),
            title: "Velvet Lipstick".to_string(),
            description: Some("Matte finish".to_string()),
            price: Some(12.5),
            sub_title: Some("Lipstick".to_string()),
            rating: Some("4.5".to_string()),
            categoryid: Some("5".to_string()),
            availability: Some("in stock".to_string()),
        };
        let similar = vec![SimilarProduct {
            id: 43,
            image_url: "https://cdn.example/q.jpg".to_string(),
            title: "Gloss".to_string(),
            price: Some(9.0),
        }];

        let detail = ProductDetail::from_product(product, similar);
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["similar_products"][0]["id"], 43);
    }
}
