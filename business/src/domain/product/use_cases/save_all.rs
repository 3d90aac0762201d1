use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct SaveCatalogParams {
    pub products: Vec<Product>,
}

/// Replaces the whole stored catalog.
#[async_trait]
pub trait SaveCatalogUseCase: Send + Sync {
    async fn execute(&self, params: SaveCatalogParams) -> Result<(), ProductError>;
}
