use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Failure envelope shared by every JSON route.
#[derive(Object, Serialize, Debug)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Human-readable reason
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
