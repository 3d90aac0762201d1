use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetFeaturedProductsParams {
    /// Negative values count back from the end of the visible list.
    pub limit: i64,
}

#[async_trait]
pub trait GetFeaturedProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetFeaturedProductsParams,
    ) -> Result<Vec<Product>, ProductError>;
}
