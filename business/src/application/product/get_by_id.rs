use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        // Hidden products stay reachable by id.
        self.repository
            .get_all()
            .await
            .into_iter()
            .find(|p| p.id == params.id)
            .ok_or_else(|| {
                self.logger
                    .warn(&format!("Product {} not found", params.id));
                ProductError::NotFound
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProductRepo, quiet_logger};

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            vec![
                Product::new(7, "Smart Plug", 19.5),
                Product::new(8, "Power Strip", 24.0),
            ]
        });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: quiet_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 8 }).await;

        let product = result.unwrap();
        assert_eq!(product.id, 8);
        assert_eq!(product.name, "Power Strip");
    }

    #[tokio::test]
    async fn should_return_hidden_product_by_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| vec![Product::new(3, "Prototype", 1.0).hidden()]);

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: quiet_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 3 }).await;

        assert!(!result.unwrap().visible);
    }

    #[tokio::test]
    async fn should_return_error_when_product_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| vec![Product::new(1, "Router", 90.0)]);

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: quiet_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 42 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
