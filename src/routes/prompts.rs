use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;

#[derive(Serialize)]
pub struct NegativePrompt {
    pub negative_prompt: &'static str,
}

/// GET /prompts/negative
pub async fn negative(State(state): State<Arc<AppState>>) -> Json<DataResponse<NegativePrompt>> {
    Json(DataResponse::new(NegativePrompt {
        negative_prompt: state.profiles.synthesizer().negative_prompt(),
    }))
}
