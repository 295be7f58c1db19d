//! Profile routes
//!
//! Form submission, listing, loading and deletion of stored profiles.
//! Filesystem work runs on the blocking pool.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{Created, DataResponse, NoContent};
use crate::app::AppState;
use crate::domain::{AdditionalFields, AdvancedFields, BasicFields, ProfileData};
use crate::error::{ApiError, ApiResult};
use crate::middleware::RequestIdExt;
use crate::services::validator::{validate_custom_notes_length, validate_resolution};
use crate::services::ProfileOutcome;

/// Raw form submission
#[derive(Debug, Deserialize)]
pub struct BuildProfileRequest {
    #[serde(flatten)]
    pub basic: BasicFields,
    #[serde(flatten)]
    pub advanced: AdvancedFields,
    #[serde(flatten)]
    pub additional: AdditionalFields,
    /// Falls back to the configured auto-save flag.
    #[serde(default)]
    pub save_profile: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct BuildProfileResponse {
    pub profile: ProfileData,
    pub status: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileList {
    pub profiles: Vec<String>,
}

async fn blocking<T, F>(state: &Arc<AppState>, work: F) -> ApiResult<T>
where
    F: FnOnce(&AppState) -> T + Send + 'static,
    T: Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || work(&state))
        .await
        .map_err(|e| ApiError::internal(format!("Profile task failed: {e}")))
}

/// POST /profiles
pub async fn build_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<BuildProfileRequest>,
) -> ApiResult<Created<BuildProfileResponse>> {
    // Required choices are reported before the supplemental checks
    req.basic.validate()?;
    if let Some(resolution) = req.advanced.resolution.as_deref().filter(|r| !r.trim().is_empty()) {
        validate_resolution(resolution)?;
    }
    if let Some(notes) = req.additional.custom_notes.as_deref() {
        validate_custom_notes_length(notes, state.settings.prompt.max_custom_notes_len)?;
    }

    let persist = req.save_profile.unwrap_or(state.profiles.auto_save());
    let include_negative = state.settings.prompt.include_negative_prompt;
    tracing::info!(
        request_id = headers.request_id().unwrap_or("-"),
        purpose = req.basic.purpose.as_deref().unwrap_or_default(),
        preset = req.additional.preset_name.as_deref().unwrap_or("-"),
        persist,
        "Building profile"
    );

    let outcome = blocking(&state, move |state| {
        state
            .profiles
            .build_profile(req.basic, req.advanced, req.additional, persist)
    })
    .await?;

    let built = match outcome {
        ProfileOutcome::Rejected(err) => return Err(err.into()),
        ProfileOutcome::Built(built) => *built,
    };

    Ok(Created(BuildProfileResponse {
        status: built.status(),
        saved_path: built.saved_path().map(|p| p.display().to_string()),
        warning: built.warning().map(str::to_string),
        negative_prompt: include_negative.then_some(built.negative_prompt),
        prompt: built.prompt,
        profile: built.profile,
    }))
}

/// GET /profiles
pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DataResponse<ProfileList>>> {
    let profiles = blocking(&state, |state| state.profiles.repository().list()).await?;
    Ok(Json(DataResponse::new(ProfileList { profiles })))
}

/// GET /profiles/:filename
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> ApiResult<Json<DataResponse<ProfileData>>> {
    let profile = blocking(&state, move |state| {
        state.profiles.repository().get(&filename)
    })
    .await??;
    Ok(Json(DataResponse::new(profile)))
}

/// DELETE /profiles/:filename
pub async fn delete_profile(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> ApiResult<NoContent> {
    let name = filename.clone();
    let deleted = blocking(&state, move |state| {
        state.profiles.repository().remove(&name)
    })
    .await??;

    if deleted {
        Ok(NoContent)
    } else {
        Err(ApiError::not_found(format!("Profile not found: {filename}")))
    }
}
