use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::translation::use_cases::get::{
    GetTranslationsParams, GetTranslationsUseCase,
};

use crate::api::tags::ApiTags;
use crate::api::translation::dto::{LanguageNotFoundResponse, TranslationsResponse};
use crate::api::translation::error_mapper::IntoTranslationErrorResponse;

const DEFAULT_LANGUAGE: &str = "az";

pub struct TranslationApi {
    get_use_case: Arc<dyn GetTranslationsUseCase>,
}

impl TranslationApi {
    pub fn new(get_use_case: Arc<dyn GetTranslationsUseCase>) -> Self {
        Self { get_use_case }
    }
}

/// Translation API
///
/// Flat key lookup of interface strings per language.
#[OpenApi]
impl TranslationApi {
    /// Get translations
    ///
    /// Returns every message of the requested language.
    #[oai(path = "/api/translations", method = "get", tag = "ApiTags::Translations")]
    async fn get_translations(
        &self,
        /// Language code (default: az)
        lang: Query<Option<String>>,
    ) -> GetTranslationsResponse {
        let language = lang.0.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        match self
            .get_use_case
            .execute(GetTranslationsParams { language })
            .await
        {
            Ok(translations) => GetTranslationsResponse::Ok(Json(translations.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetTranslationsResponse::NotFound(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTranslationsResponse {
    #[oai(status = 200)]
    Ok(Json<TranslationsResponse>),
    #[oai(status = 404)]
    NotFound(Json<LanguageNotFoundResponse>),
}
