use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::ProductQuery;

pub struct GetAllProductsParams {
    pub query: ProductQuery,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError>;
}
