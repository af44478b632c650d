pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Podcast Episode API",
        version = "1.0.0",
        description = "API for uploading, listing and downloading podcast episodes"
    ),
    tags(
        (name = "Episodes", description = "Episode upload, listing and download"),
    ),
)]
struct ApiDoc;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(config.max_age))
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::api_routes())
        .split_for_parts();

    router
        .layer(cors)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
}
