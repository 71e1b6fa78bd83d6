// Database repository for cards and products

use sqlx::PgPool;

use crate::catalog::models::{Card, CreateCard, CreateProduct, Product, ProductSummary, SimilarProduct};
use crate::catalog::query::{ProductQueryBuilder, ProductQueryParams};

/// Catalog repository for database operations
#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a promotional card
    pub async fn create_card(&self, card: &CreateCard) -> Result<Card, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            "INSERT INTO cards (image_url, title, description)
             VALUES ($1, $2, $3)
             RETURNING id, image_url, title, description",
        )
        .bind(&card.image_url)
        .bind(&card.title)
        .bind(&card.description)
        .fetch_one(&self.pool)
        .await
    }

    /// All cards, oldest first
    pub async fn list_cards(&self) -> Result<Vec<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            "SELECT id, image_url, title, description FROM cards ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Insert a product
    pub async fn create_product(&self, product: &CreateProduct) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (image_url, title, description, price, sub_title, rating, categoryid, availability)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, image_url, title, description, price, sub_title, rating, categoryid, availability",
        )
        .bind(&product.image_url)
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.sub_title)
        .bind(&product.rating)
        .bind(&product.categoryid)
        .bind(&product.availability)
        .fetch_one(&self.pool)
        .await
    }

    /// Filtered product listing built through the parameterized query builder
    pub async fn search_products(
        &self,
        params: &ProductQueryParams,
    ) -> Result<Vec<ProductSummary>, sqlx::Error> {
        let mut builder = ProductQueryBuilder::new();
        builder.apply(params);
        let (query_str, bind_params) = builder.build();

        let mut query = sqlx::query_as::<_, ProductSummary>(&query_str);
        for param in bind_params {
            query = query.bind(param);
        }

        query.fetch_all(&self.pool).await
    }

    /// Look up a single product by id
    pub async fn find_product_by_id(&self, id: i32) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, image_url, title, description, price, sub_title, rating, categoryid, availability
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Same-category products excluding the queried record itself,
    /// trimmed to the fields the detail page renders
    pub async fn find_similar(
        &self,
        categoryid: &str,
        exclude_id: i32,
    ) -> Result<Vec<SimilarProduct>, sqlx::Error> {
        sqlx::query_as::<_, SimilarProduct>(
            "SELECT id, image_url, title, price
             FROM products
             WHERE categoryid = $1 AND id != $2
             ORDER BY id",
        )
        .bind(categoryid)
        .bind(exclude_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Full same-category records for the creation response
    pub async fn find_similar_full(
        &self,
        categoryid: &str,
        exclude_id: i32,
    ) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, image_url, title, description, price, sub_title, rating, categoryid, availability
             FROM products
             WHERE categoryid = $1 AND id != $2
             ORDER BY id",
        )
        .bind(categoryid)
        .bind(exclude_id)
        .fetch_all(&self.pool)
        .await
    }
}
