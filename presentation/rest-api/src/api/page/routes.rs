use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Html, Json},
};
use tracing::error;

use crate::api::error::ErrorResponse;
use crate::api::page::templates::{INDEX_TEMPLATE, TemplateStore};
use crate::api::product::params::parse_id;

/// Storefront HTML pages. Hidden from the OpenAPI document.
pub struct PageApi {
    templates: Arc<TemplateStore>,
}

impl PageApi {
    pub fn new(templates: Arc<TemplateStore>) -> Self {
        Self { templates }
    }

    async fn render(&self, name: &str) -> PageResponse {
        match self.templates.render(name).await {
            Ok(html) => PageResponse::Ok(Html(html)),
            Err(err) => {
                error!(template = name, error = ?err, "Failed to render page");
                PageResponse::InternalError(Json(ErrorResponse::internal()))
            }
        }
    }

    /// Pages addressed by anything but an unsigned decimal id get the home
    /// page with a 404.
    async fn render_with_id(&self, name: &str, id: &str) -> PageResponse {
        if parse_id(id).is_some() {
            return self.render(name).await;
        }

        match self.render(INDEX_TEMPLATE).await {
            PageResponse::Ok(html) => PageResponse::NotFound(html),
            other => other,
        }
    }
}

#[OpenApi]
impl PageApi {
    #[oai(path = "/", method = "get", hidden)]
    async fn index(&self) -> PageResponse {
        self.render(INDEX_TEMPLATE).await
    }

    #[oai(path = "/products", method = "get", hidden)]
    async fn products(&self) -> PageResponse {
        self.render("products").await
    }

    #[oai(path = "/product/:id", method = "get", hidden)]
    async fn product_detail(&self, id: Path<String>) -> PageResponse {
        self.render_with_id("product-detail", &id.0).await
    }

    #[oai(path = "/cart", method = "get", hidden)]
    async fn cart(&self) -> PageResponse {
        self.render("cart").await
    }

    #[oai(path = "/about", method = "get", hidden)]
    async fn about(&self) -> PageResponse {
        self.render("about").await
    }

    #[oai(path = "/contact", method = "get", hidden)]
    async fn contact(&self) -> PageResponse {
        self.render("contact").await
    }

    #[oai(path = "/faq", method = "get", hidden)]
    async fn faq(&self) -> PageResponse {
        self.render("faq").await
    }

    #[oai(path = "/warranty", method = "get", hidden)]
    async fn warranty(&self) -> PageResponse {
        self.render("warranty").await
    }

    #[oai(path = "/blog", method = "get", hidden)]
    async fn blog(&self) -> PageResponse {
        self.render("blog").await
    }

    #[oai(path = "/blog/:id", method = "get", hidden)]
    async fn blog_detail(&self, id: Path<String>) -> PageResponse {
        self.render_with_id("blog-detail", &id.0).await
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PageResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 404)]
    NotFound(Html<String>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
