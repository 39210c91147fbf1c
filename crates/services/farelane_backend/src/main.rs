// File: services/farelane_backend/src/main.rs
use axum::{routing::get, Router};
use farelane_checkout::routes as checkout_routes;
use farelane_config::load_config;
use farelane_payments::routes as payments_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

mod app_state;
mod session;

#[tokio::main]
async fn main() {
    farelane_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));
    let state = app_state::build_state(config.clone()).expect("Failed to build application state");

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Farelane API!" }))
        .merge(payments_routes::routes(state.coordinator.clone()))
        .merge(checkout_routes::routes(state.pending.clone()));

    #[allow(unused_mut)] // mutated only when the openapi feature is enabled
    let mut app = Router::new()
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use farelane_checkout::doc::CheckoutApiDoc;
        use farelane_payments::doc::PaymentsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Farelane API",
                version = "0.1.0",
                description = "Farelane booking payment API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Farelane", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(PaymentsApiDoc::openapi());
        openapi_doc.merge(CheckoutApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
