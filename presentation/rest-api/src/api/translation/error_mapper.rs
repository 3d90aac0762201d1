use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::translation::errors::TranslationError;

use crate::api::translation::dto::LanguageNotFoundResponse;

/// Translation failures carry the supported languages, so they map onto
/// their own envelope instead of the shared `ErrorResponse`.
pub trait IntoTranslationErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<LanguageNotFoundResponse>);
}

impl IntoTranslationErrorResponse for TranslationError {
    fn into_error_response(self) -> (StatusCode, Json<LanguageNotFoundResponse>) {
        match self {
            TranslationError::LanguageNotFound {
                language,
                available,
            } => (
                StatusCode::NOT_FOUND,
                Json(LanguageNotFoundResponse {
                    success: false,
                    error: format!("Language {} not supported", language),
                    available_languages: available,
                }),
            ),
        }
    }
}
