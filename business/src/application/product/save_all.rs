use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::save_all::{SaveCatalogParams, SaveCatalogUseCase};

pub struct SaveCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveCatalogUseCase for SaveCatalogUseCaseImpl {
    async fn execute(&self, params: SaveCatalogParams) -> Result<(), ProductError> {
        let mut seen = HashSet::with_capacity(params.products.len());
        if let Some(duplicate) = params.products.iter().find(|p| !seen.insert(p.id)) {
            self.logger.warn(&format!(
                "Refusing to save catalog: duplicate product id {}",
                duplicate.id
            ));
            return Err(ProductError::DuplicateId(duplicate.id));
        }

        self.repository.save_all(&params.products).await?;
        self.logger
            .info(&format!("Saved catalog with {} products", params.products.len()));
        Ok(())
    }
}
