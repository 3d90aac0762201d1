use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::query::{SearchOutcome, search_products};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<SearchOutcome, ProductError> {
        if params.query.trim().is_empty() {
            self.logger.warn("Rejected search with an empty query");
            return Err(ProductError::EmptyQuery);
        }

        let products = self.repository.get_all().await;
        let outcome = search_products(products, &params.query)?;
        self.logger.info(&format!(
            "Search '{}' matched {} products",
            outcome.query,
            outcome.results.len()
        ));
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::test_support::{MockProductRepo, quiet_logger};

    #[tokio::test]
    async fn should_return_matching_products_with_normalised_query() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            vec![
                Product::new(1, "USB-C Charger", 29.0).with_code("CHG-65W"),
                Product::new(2, "HDMI Cable", 9.0),
                Product::new(3, "Wall charger", 15.0).hidden(),
            ]
        });

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: quiet_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                query: " Charger ".to_string(),
            })
            .await;

        let outcome = result.unwrap();
        assert_eq!(outcome.query, "charger");
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].id, 1);
    }

    #[tokio::test]
    async fn should_reject_blank_query_without_loading_catalog() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().never();

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: quiet_logger(),
        };

        let result = use_case
            .execute(SearchProductsParams {
                query: "   ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::EmptyQuery));
    }
}
