use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::NotFound => (StatusCode::NOT_FOUND, "Product not found".to_string()),
            ProductError::EmptyQuery => (
                StatusCode::BAD_REQUEST,
                "Search query is required".to_string(),
            ),
            ProductError::DuplicateId(id) => {
                (StatusCode::CONFLICT, format!("Duplicate product id {}", id))
            }
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
