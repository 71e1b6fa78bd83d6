// Parameterized query construction for the filtered product listing

use serde::Deserialize;

/// Query parameters accepted by GET /products
/// All fields are optional; absent filters are simply not applied
#[derive(Debug, Deserialize)]
pub struct ProductQueryParams {
    /// Exact title match
    pub title: Option<String>,
    /// Exact image URL match
    pub image_url: Option<String>,
    /// Case-insensitive substring match on the subtitle
    #[serde(rename = "subTitle")]
    pub sub_title: Option<String>,
    /// Exact category match
    pub categoryid: Option<String>,
}

/// SQL builder producing a single parameterized SELECT over products
/// Filters are combined with AND; every value is bound, never interpolated
pub struct ProductQueryBuilder {
    base_query: String,
    where_clauses: Vec<String>,
    params: Vec<String>,
}

impl ProductQueryBuilder {
    pub fn new() -> Self {
        Self {
            base_query: "SELECT id, image_url, title, sub_title, categoryid FROM products"
                .to_string(),
            where_clauses: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Adds an exact title filter
    pub fn add_title_filter(&mut self, title: &str) {
        let param_index = self.params.len() + 1;
        self.where_clauses.push(format!("title = ${}", param_index));
        self.params.push(title.to_string());
    }

    /// Adds an exact image URL filter
    pub fn add_image_url_filter(&mut self, image_url: &str) {
        let param_index = self.params.len() + 1;
        self.where_clauses
            .push(format!("image_url = ${}", param_index));
        self.params.push(image_url.to_string());
    }

    /// Adds a case-insensitive substring filter on the subtitle
    /// Uses ILIKE for PostgreSQL case-insensitive pattern matching
    pub fn add_sub_title_filter(&mut self, sub_title: &str) {
        let param_index = self.params.len() + 1;
        self.where_clauses
            .push(format!("sub_title ILIKE ${}", param_index));
        self.params.push(format!("%{}%", escape_like(sub_title)));
    }

    /// Adds an exact category filter
    pub fn add_category_filter(&mut self, categoryid: &str) {
        let param_index = self.params.len() + 1;
        self.where_clauses
            .push(format!("categoryid = ${}", param_index));
        self.params.push(categoryid.to_string());
    }

    /// Apply every filter present in the incoming query parameters
    pub fn apply(&mut self, params: &ProductQueryParams) {
        if let Some(ref title) = params.title {
            self.add_title_filter(title);
        }
        if let Some(ref image_url) = params.image_url {
            self.add_image_url_filter(image_url);
        }
        if let Some(ref sub_title) = params.sub_title {
            self.add_sub_title_filter(sub_title);
        }
        if let Some(ref categoryid) = params.categoryid {
            self.add_category_filter(categoryid);
        }
    }

    /// Builds the final SQL query string with all parameters
    /// Returns a tuple of (query_string, parameters)
    pub fn build(&self) -> (String, Vec<String>) {
        let mut query = self.base_query.clone();

        if !self.where_clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&self.where_clauses.join(" AND "));
        }

        query.push_str(" ORDER BY id");

        (query, self.params.clone())
    }
}

impl Default for ProductQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape LIKE metacharacters so a subtitle filter matches literally
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
