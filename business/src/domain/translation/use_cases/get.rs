use async_trait::async_trait;

use crate::domain::translation::errors::TranslationError;
use crate::domain::translation::model::Translations;

pub struct GetTranslationsParams {
    pub language: String,
}

#[async_trait]
pub trait GetTranslationsUseCase: Send + Sync {
    async fn execute(&self, params: GetTranslationsParams)
    -> Result<Translations, TranslationError>;
}
