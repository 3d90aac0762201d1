use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::featured_products;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_featured::{
    GetFeaturedProductsParams, GetFeaturedProductsUseCase,
};

pub struct GetFeaturedProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFeaturedProductsUseCase for GetFeaturedProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetFeaturedProductsParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .debug(&format!("Fetching featured products (limit {})", params.limit));
        let products = self.repository.get_all().await;
        Ok(featured_products(products, params.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog_of, quiet_logger};

    #[tokio::test]
    async fn should_return_first_visible_products_in_store_order() {
        let use_case = GetFeaturedProductsUseCaseImpl {
            repository: catalog_of(vec![
                Product::new(1, "Zeta Speaker", 120.0),
                Product::new(2, "Alpha Hub", 30.0).hidden(),
                Product::new(3, "Beta Switch", 45.0),
                Product::new(4, "Gamma Dock", 70.0),
            ]),
            logger: quiet_logger(),
        };

        let result = use_case
            .execute(GetFeaturedProductsParams { limit: 2 })
            .await;

        let ids: Vec<i64> = result.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn should_return_nothing_for_zero_limit() {
        let use_case = GetFeaturedProductsUseCaseImpl {
            repository: catalog_of(vec![Product::new(1, "Zeta Speaker", 120.0)]),
            logger: quiet_logger(),
        };

        let result = use_case
            .execute(GetFeaturedProductsParams { limit: 0 })
            .await;

        assert!(result.unwrap().is_empty());
    }
}
