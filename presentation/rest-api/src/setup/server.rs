use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, endpoint::StaticFilesEndpoint,
    listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::{
    config::app_config::AppConfig,
    setup::{dependency_injection::DependencyContainer, fallback::SoftFallback},
};

pub struct Server;

impl Server {
    /// Assembles the routes and middleware without binding a listener.
    pub fn build(config: AppConfig, container: DependencyContainer) -> impl Endpoint + 'static {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.translation_api,
                container.page_api,
            ),
            "Storefront API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest("/static", StaticFilesEndpoint::new(&config.storage.static_dir))
            .with(SoftFallback::new(container.templates))
            .with(config.cors)
            .with(Tracing)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build(config, container);
        info!("Server running at http://{}", addr);
        info!("Swagger UI at http://{}/docs", addr);
        info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
