use async_trait::async_trait;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::PathBuf;
use tracing::warn;

use business::domain::translation::model::{Messages, TranslationTable};
use business::domain::translation::repository::TranslationRepository;

use crate::json_store::{JsonStoreError, read_document};

/// Translation table read from a `{language: {key: text}}` JSON document.
pub struct TranslationRepositoryJson {
    path: PathBuf,
}

impl TranslationRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TranslationRepository for TranslationRepositoryJson {
    async fn get_all(&self) -> TranslationTable {
        match read_document::<LanguageDocument>(&self.path).await {
            Ok(LanguageDocument(table)) => table,
            Err(JsonStoreError::NotFound) => {
                warn!(path = %self.path.display(), "Translations file not found");
                TranslationTable::default()
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = ?err, "Error loading translations");
                TranslationTable::default()
            }
        }
    }
}

/// `{language: {key: text}}` read with languages in document order.
struct LanguageDocument(TranslationTable);

impl<'de> Deserialize<'de> for LanguageDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = LanguageDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping language codes to message objects")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut table = TranslationTable::default();
                while let Some((language, messages)) = map.next_entry::<String, Messages>()? {
                    table.insert(language, messages);
                }
                Ok(LanguageDocument(table))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
