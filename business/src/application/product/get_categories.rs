use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::query::list_categories;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_categories::GetCategoriesUseCase;

pub struct GetCategoriesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, ProductError> {
        let products = self.repository.get_all().await;
        let categories = list_categories(&products);
        self.logger
            .debug(&format!("Found {} categories", categories.len()));
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::test_support::{catalog_of, quiet_logger};

    #[tokio::test]
    async fn should_return_sorted_categories_of_visible_products() {
        let use_case = GetCategoriesUseCaseImpl {
            repository: catalog_of(vec![
                Product::new(1, "Router", 90.0).with_category("network"),
                Product::new(2, "Bulb", 4.0).with_category("lighting"),
                Product::new(3, "Switch", 40.0).with_category("network"),
                Product::new(4, "Old Modem", 10.0)
                    .with_category("legacy")
                    .hidden(),
                Product::new(5, "Gift Card", 25.0),
            ]),
            logger: quiet_logger(),
        };

        let result = use_case.execute().await;

        assert_eq!(result.unwrap(), vec!["lighting", "network", "other"]);
    }
}
