use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::translation::errors::TranslationError;
use crate::domain::translation::model::Translations;
use crate::domain::translation::repository::TranslationRepository;
use crate::domain::translation::use_cases::get::{GetTranslationsParams, GetTranslationsUseCase};

pub struct GetTranslationsUseCaseImpl {
    pub repository: Arc<dyn TranslationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTranslationsUseCase for GetTranslationsUseCaseImpl {
    async fn execute(
        &self,
        params: GetTranslationsParams,
    ) -> Result<Translations, TranslationError> {
        let table = self.repository.get_all().await;

        match table.get(&params.language) {
            Some(messages) => Ok(Translations {
                messages: messages.clone(),
                language: params.language,
            }),
            None => {
                self.logger.warn(&format!(
                    "Translations requested for unsupported language: {}",
                    params.language
                ));
                Err(TranslationError::LanguageNotFound {
                    language: params.language,
                    available: table.languages(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::translation::model::{Messages, TranslationTable};
    use crate::test_support::{MockTranslationRepo, quiet_logger};

    fn table() -> TranslationTable {
        TranslationTable::new([
            (
                "ru".to_string(),
                Messages::from([("nav.home".to_string(), "Главная".to_string())]),
            ),
            (
                "en".to_string(),
                Messages::from([("nav.home".to_string(), "Home".to_string())]),
            ),
        ])
    }

    #[tokio::test]
    async fn should_return_messages_for_supported_language() {
        let mut mock_repo = MockTranslationRepo::new();
        mock_repo.expect_get_all().returning(table);

        let use_case = GetTranslationsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: quiet_logger(),
        };

        let result = use_case
            .execute(GetTranslationsParams {
                language: "en".to_string(),
            })
            .await;

        let translations = result.unwrap();
        assert_eq!(translations.language, "en");
        assert_eq!(translations.messages["nav.home"], "Home");
    }

    #[tokio::test]
    async fn should_list_available_languages_when_language_is_unknown() {
        let mut mock_repo = MockTranslationRepo::new();
        mock_repo.expect_get_all().returning(table);

        let use_case = GetTranslationsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: quiet_logger(),
        };

        let result = use_case
            .execute(GetTranslationsParams {
                language: "xx".to_string(),
            })
            .await;

        match result.unwrap_err() {
            TranslationError::LanguageNotFound {
                language,
                available,
            } => {
                assert_eq!(language, "xx");
                assert_eq!(available, vec!["ru", "en"]);
            }
        }
    }
}
