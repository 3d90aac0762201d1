#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation.language_not_found")]
    LanguageNotFound {
        language: String,
        available: Vec<String>,
    },
}
