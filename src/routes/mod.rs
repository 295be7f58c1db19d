pub mod health;
pub mod presets;
pub mod profiles;
pub mod prompts;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Form helpers
        .route("/options", get(presets::options))
        .route("/presets", get(presets::list))
        .route("/presets/:name", get(presets::get))
        // Profiles
        .route("/profiles", post(profiles::build_profile))
        .route("/profiles", get(profiles::list_profiles))
        .route(
            "/profiles/:filename",
            get(profiles::get_profile).delete(profiles::delete_profile),
        )
        .route("/prompts/negative", get(prompts::negative))
}
