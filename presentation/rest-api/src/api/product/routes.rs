use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::product::use_cases::get_featured::{
    GetFeaturedProductsParams, GetFeaturedProductsUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CategoryListResponse, ProductDetailResponse, ProductListResponse, SearchResultsResponse,
    product_json,
};
use crate::api::product::params::{build_query, parse_id, parse_limit};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_featured_use_case: Arc<dyn GetFeaturedProductsUseCase>,
    get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_featured_use_case: Arc<dyn GetFeaturedProductsUseCase>,
        get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_featured_use_case,
            get_categories_use_case,
            search_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-only endpoints for browsing, filtering and searching the catalog.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Filters by visibility, category and inclusive price bounds, then sorts.
    /// Malformed numeric parameters are ignored.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        /// Category to keep, or "all" (default)
        category: Query<Option<String>>,
        /// Inclusive lower price bound
        min_price: Query<Option<String>>,
        /// Inclusive upper price bound
        max_price: Query<Option<String>>,
        /// name-asc, name-desc, price-asc, price-desc or default
        sort: Query<Option<String>>,
        /// "true" (default) hides products marked invisible
        visible: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let query = build_query(
            category.0,
            min_price.0.as_deref(),
            max_price.0.as_deref(),
            sort.0.as_deref(),
            visible.0.as_deref(),
        );

        match self
            .get_all_use_case
            .execute(GetAllProductsParams { query })
            .await
        {
            Ok(products) => GetAllProductsResponse::Ok(Json(products.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Featured products
    ///
    /// Returns the first visible products in catalog order.
    #[oai(
        path = "/api/products/featured",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_featured_products(
        &self,
        /// Number of products to keep (default: 8); negative values drop
        /// that many from the end
        limit: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let limit = parse_limit(limit.0.as_deref());

        match self
            .get_featured_use_case
            .execute(GetFeaturedProductsParams { limit })
            .await
        {
            Ok(products) => GetAllProductsResponse::Ok(Json(products.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Hidden products are still returned when addressed directly.
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Some(id) = parse_id(&id.0) else {
            return GetProductByIdResponse::NotFound(Json(ErrorResponse::new(
                "Resource not found",
            )));
        };
        // Stored ids are i64, so anything larger matches nothing.
        let Ok(id) = i64::try_from(id) else {
            return GetProductByIdResponse::NotFound(Json(ErrorResponse::new(
                "Product not found",
            )));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(ProductDetailResponse {
                success: true,
                product: product_json(product),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// List categories
    ///
    /// Distinct categories of visible products, sorted. Products without a
    /// category are reported under "other".
    #[oai(path = "/api/categories", method = "get", tag = "ApiTags::Products")]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.get_categories_use_case.execute().await {
            Ok(categories) => GetCategoriesResponse::Ok(Json(CategoryListResponse {
                success: true,
                categories,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Search products
    ///
    /// Case-insensitive substring match on name, code and description of
    /// visible products.
    #[oai(path = "/api/search", method = "get", tag = "ApiTags::Search")]
    async fn search_products(
        &self,
        /// Search text (required, not blank)
        q: Query<Option<String>>,
    ) -> SearchProductsResponse {
        match self
            .search_use_case
            .execute(SearchProductsParams {
                query: q.0.unwrap_or_default(),
            })
            .await
        {
            Ok(outcome) => SearchProductsResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchProductsResponse::BadRequest(json),
                    _ => SearchProductsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDetailResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<SearchResultsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
