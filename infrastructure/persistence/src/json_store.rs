use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use thiserror::Error;

const PRODUCTS_FILE: &str = "products.json";
const TRANSLATIONS_FILE: &str = "translations.json";

#[derive(Error, Debug)]
pub enum JsonStoreError {
    #[error("json_store.not_found")]
    NotFound,
    #[error("json_store.io_error")]
    Io(#[from] std::io::Error),
    #[error("json_store.malformed")]
    Malformed(#[from] serde_json::Error),
}

/// Location of the JSON documents backing the storefront
#[derive(Debug, Clone)]
pub struct JsonStoreConfig {
    pub data_dir: PathBuf,
}

impl JsonStoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(PRODUCTS_FILE)
    }

    pub fn translations_path(&self) -> PathBuf {
        self.data_dir.join(TRANSLATIONS_FILE)
    }
}

/// Reads and decodes the whole document at `path`
pub async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, JsonStoreError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(JsonStoreError::NotFound);
        }
        Err(err) => return Err(err.into()),
    };

    Ok(serde_json::from_slice(&bytes)?)
}

/// Overwrites the document at `path`, creating missing parent directories.
///
/// The file is written in place: a crash mid-write can leave it truncated.
pub async fn write_document<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), JsonStoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    #[test]
    fn should_resolve_document_paths_inside_data_dir() {
        let config = JsonStoreConfig::new("/srv/shop/data");

        assert_eq!(
            config.products_path(),
            PathBuf::from("/srv/shop/data/products.json")
        );
        assert_eq!(
            config.translations_path(),
            PathBuf::from("/srv/shop/data/translations.json")
        );
    }

    #[tokio::test]
    async fn should_report_missing_document() {
        let dir = TempDir::new().expect("temp dir");

        let result = read_document::<Value>(&dir.path().join("missing.json")).await;

        assert!(matches!(result, Err(JsonStoreError::NotFound)));
    }

    #[tokio::test]
    async fn should_report_malformed_document() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").expect("write fixture");

        let result = read_document::<Value>(&path).await;

        assert!(matches!(result, Err(JsonStoreError::Malformed(_))));
    }

    #[tokio::test]
    async fn should_create_parent_directories_and_keep_non_ascii_text() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("deeper").join("doc.json");

        write_document(&path, &json!({"title": "Elektrik çaydanı"}))
            .await
            .expect("write document");

        let raw = std::fs::read_to_string(&path).expect("read back");
        assert!(raw.contains("Elektrik çaydanı"));
        assert!(raw.contains("\n  \"title\""));
    }
}
