use axum::{http::HeaderValue, middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Settings;
use crate::middleware::{request_id_layers, stamp_error_responses, X_REQUEST_ID};
use crate::routes;
use crate::services::ProfileService;

/// Profile form submissions are small; anything bigger is rejected early.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared application state
pub struct AppState {
    pub settings: Settings,
    pub profiles: ProfileService,
}

impl AppState {
    pub fn new(settings: Settings) -> Arc<Self> {
        let profiles = ProfileService::new(&settings.profile);
        Arc::new(Self { settings, profiles })
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.settings);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    let request_id = request_id_layers();

    Router::new()
        .merge(routes::api_router())
        // Middleware stack (applied bottom-up)
        .layer(from_fn(stamp_error_responses))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(request_id.propagate)
        .layer(trace_layer)
        .layer(request_id.set)
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let max_age = if settings.env.is_dev() {
        std::time::Duration::from_secs(86400)
    } else {
        std::time::Duration::from_secs(3600)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            X_REQUEST_ID,
        ]))
        .max_age(max_age)
}
