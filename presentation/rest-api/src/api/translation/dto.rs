use std::collections::BTreeMap;

use poem_openapi::Object;

use business::domain::translation::model::Translations;

#[derive(Debug, Clone, Object)]
pub struct TranslationsResponse {
    pub success: bool,
    /// Language code the messages belong to
    pub language: String,
    /// Message key to message text
    pub translations: BTreeMap<String, String>,
}

impl From<Translations> for TranslationsResponse {
    fn from(translations: Translations) -> Self {
        Self {
            success: true,
            language: translations.language,
            translations: translations.messages,
        }
    }
}

/// Returned for an unsupported language so the client can retry with one
/// of `available_languages`.
#[derive(Debug, Clone, Object)]
pub struct LanguageNotFoundResponse {
    pub success: bool,
    pub error: String,
    pub available_languages: Vec<String>,
}
