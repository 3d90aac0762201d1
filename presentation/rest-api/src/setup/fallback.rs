use std::sync::Arc;

use poem::{
    Endpoint, IntoResponse, Middleware, Request, Response, Result,
    http::StatusCode,
    web::{Html, Json},
};
use tracing::error;

use crate::api::error::ErrorResponse;
use crate::api::page::templates::{INDEX_TEMPLATE, TemplateStore};

const API_PREFIX: &str = "/api/";

/// Turns framework errors into storefront responses.
///
/// Unmatched `/api/` paths get a JSON 404, any other unmatched path gets the
/// home page with a 404 status. Server errors never expose their details.
pub struct SoftFallback {
    templates: Arc<TemplateStore>,
}

impl SoftFallback {
    pub fn new(templates: Arc<TemplateStore>) -> Self {
        Self { templates }
    }
}

impl<E: Endpoint> Middleware<E> for SoftFallback {
    type Output = SoftFallbackEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        SoftFallbackEndpoint {
            inner: ep,
            templates: self.templates.clone(),
        }
    }
}

pub struct SoftFallbackEndpoint<E> {
    inner: E,
    templates: Arc<TemplateStore>,
}

impl<E: Endpoint> Endpoint for SoftFallbackEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let is_api = req.uri().path().starts_with(API_PREFIX);

        match self.inner.call(req).await {
            Ok(resp) => Ok(resp.into_response()),
            Err(err) => Ok(self.recover(err, is_api).await),
        }
    }
}

impl<E> SoftFallbackEndpoint<E> {
    async fn recover(&self, err: poem::Error, is_api: bool) -> Response {
        let status = err.status();

        if status == StatusCode::NOT_FOUND {
            if is_api {
                return envelope(status, "Resource not found");
            }
            return match self.templates.render(INDEX_TEMPLATE).await {
                Ok(html) => Html(html).with_status(StatusCode::NOT_FOUND).into_response(),
                Err(_) => envelope(status, "Resource not found"),
            };
        }

        if status == StatusCode::METHOD_NOT_ALLOWED {
            return envelope(status, "Method not allowed");
        }

        if status.is_server_error() {
            error!(error = %err, "Unhandled request failure");
            return envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }

        envelope(status, &err.to_string())
    }
}

fn envelope(status: StatusCode, message: &str) -> Response {
    Json(ErrorResponse::new(message))
        .with_status(status)
        .into_response()
}
