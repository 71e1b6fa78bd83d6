// JSON body extraction with the error contract the storefront expects
// A body that fails to parse, including one with a field missing entirely,
// answers 400 with an {"error": ...} payload instead of axum's plain-text 422

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Drop-in replacement for `axum::Json` as an extractor
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = JsonBodyError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(JsonBodyError(rejection.body_text())),
        }
    }
}

/// Request-body failure, reported like every other validation error
pub struct JsonBodyError(String);

impl IntoResponse for JsonBodyError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request body: {}", self.0);
        (StatusCode::BAD_REQUEST, axum::Json(json!({ "error": self.0 }))).into_response()
    }
}
