//! Preset and form option routes

use axum::{extract::Path, Json};

use crate::api::DataResponse;
use crate::domain::{apply_preset, list_presets, OptionCatalog, Preset};
use crate::error::{ApiError, ApiResult};

/// GET /presets
pub async fn list() -> Json<DataResponse<&'static [Preset]>> {
    Json(DataResponse::new(list_presets()))
}

/// GET /presets/:name
pub async fn get(Path(name): Path<String>) -> ApiResult<Json<DataResponse<&'static Preset>>> {
    apply_preset(&name)
        .map(|preset| Json(DataResponse::new(preset)))
        .ok_or_else(|| ApiError::not_found(format!("Unknown preset: {name}")))
}

/// GET /options
pub async fn options() -> Json<DataResponse<OptionCatalog>> {
    Json(DataResponse::new(OptionCatalog::new()))
}
