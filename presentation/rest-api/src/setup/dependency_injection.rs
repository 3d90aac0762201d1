use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryJson;
use persistence::translation::repository::TranslationRepositoryJson;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_categories::GetCategoriesUseCaseImpl;
use business::application::product::get_featured::GetFeaturedProductsUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::translation::get::GetTranslationsUseCaseImpl;

use crate::api::page::templates::TemplateStore;
use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub translation_api: crate::api::translation::routes::TranslationApi,
    pub page_api: crate::api::page::routes::PageApi,
    pub templates: Arc<TemplateStore>,
}

impl DependencyContainer {
    pub fn new(storage: &StorageConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let json_store = storage.json_store();
        let product_repository = Arc::new(ProductRepositoryJson::new(json_store.products_path()));
        let translation_repository = Arc::new(TranslationRepositoryJson::new(
            json_store.translations_path(),
        ));
        let templates = Arc::new(TemplateStore::new(storage.templates_dir.clone()));

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_featured_use_case = Arc::new(GetFeaturedProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Translation use cases
        let get_translations_use_case = Arc::new(GetTranslationsUseCaseImpl {
            repository: translation_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_use_case,
            get_by_id_use_case,
            get_featured_use_case,
            get_categories_use_case,
            search_use_case,
        );

        let translation_api =
            crate::api::translation::routes::TranslationApi::new(get_translations_use_case);

        let page_api = crate::api::page::routes::PageApi::new(templates.clone());

        Self {
            health_api,
            product_api,
            translation_api,
            page_api,
            templates,
        }
    }
}
