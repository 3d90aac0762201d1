use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::filter_products;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Listing products (category: {}, sort: {}, visible_only: {})",
            params.query.category.as_deref().unwrap_or("all"),
            params.query.sort,
            params.query.visible_only
        ));
        let products = self.repository.get_all().await;
        let products = filter_products(products, &params.query);
        self.logger
            .info(&format!("Found {} matching products", products.len()));
        Ok(products)
    }
}
