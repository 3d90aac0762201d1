//! Port mocks shared by the use-case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::translation::model::TranslationTable;
use crate::domain::translation::repository::TranslationRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Vec<Product>;
        async fn save_all(&self, products: &[Product]) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub TranslationRepo {}

    #[async_trait]
    impl TranslationRepository for TranslationRepo {
        async fn get_all(&self) -> TranslationTable;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

/// Logger that accepts any call.
pub fn quiet_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Repository serving a fixed catalog on every read.
pub fn catalog_of(products: Vec<Product>) -> Arc<dyn ProductRepository> {
    let mut repository = MockProductRepo::new();
    repository
        .expect_get_all()
        .returning(move || products.clone());
    Arc::new(repository)
}
