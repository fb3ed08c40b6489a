use anyhow::anyhow;
use axum::http::HeaderValue;
use axum::{Router, middleware};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use bastion_config::CorsConfig;
use bastion_core::AppError;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::greeting::router::init_greeting_router;
use crate::modules::items::router::init_items_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let cors = init_cors_layer(&state.cors_config);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_greeting_router())
        .nest("/items", init_items_router())
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}

/// Browser clients (the Expo web build) may call from any origin with
/// credentials. A literal `*` cannot be combined with credentials, so the
/// request origin is mirrored instead.
fn init_cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn not_found() -> AppError {
    AppError::not_found(anyhow!("Not Found"))
}
