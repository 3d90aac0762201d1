use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Port over the stored catalog.
///
/// `get_all` never fails: an unreadable catalog is reported by the adapter
/// and surfaces here as an empty list.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Vec<Product>;
    async fn save_all(&self, products: &[Product]) -> Result<(), RepositoryError>;
}
