use async_trait::async_trait;

use super::model::TranslationTable;

/// Port over the stored translation table. Read-only at runtime; an
/// unreadable table surfaces as an empty one.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    async fn get_all(&self) -> TranslationTable;
}
