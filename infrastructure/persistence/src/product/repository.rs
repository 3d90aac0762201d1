use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{error, warn};

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::json_store::{JsonStoreError, read_document, write_document};

/// Catalog backed by a single JSON array on disk.
///
/// Nothing is cached: every call re-reads or rewrites the whole file, and
/// concurrent writers are not serialised against each other.
pub struct ProductRepositoryJson {
    path: PathBuf,
}

impl ProductRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJson {
    async fn get_all(&self) -> Vec<Product> {
        let records: Vec<Value> = match read_document(&self.path).await {
            Ok(records) => records,
            Err(JsonStoreError::NotFound) => {
                warn!(path = %self.path.display(), "Product catalog not found, serving empty catalog");
                return Vec::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = ?err, "Error loading products, serving empty catalog");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, record)| match serde_json::from_value::<ProductEntity>(record) {
                    Ok(entity) => Some(entity.into_domain()),
                    Err(err) => {
                        warn!(index, error = %err, "Skipping malformed product record");
                        None
                    }
                },
            )
            .collect()
    }

    async fn save_all(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let entities: Vec<ProductEntity> =
            products.iter().map(ProductEntity::from_domain).collect();

        write_document(&self.path, &entities).await.map_err(|err| {
            error!(path = %self.path.display(), error = ?err, "Error saving products");
            match err {
                JsonStoreError::Malformed(_) => RepositoryError::serialization(),
                _ => RepositoryError::persistence(),
            }
        })
    }
}
