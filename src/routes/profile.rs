use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        profile_dto::{
            CandidateProfileResponse, ProfileResponse, ProfileStatsResponse, UpdateProfilePayload,
        },
        ApiMessage,
    },
    error::Result,
    utils::token::Claims,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Caller's profile", body = Json<ProfileResponse>),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let profile = state.profile_service.get(claims.user_id()?).await?;
    Ok(Json(ProfileResponse {
        success: true,
        profile,
    }))
}

#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state
        .profile_service
        .update(claims.user_id()?, payload)
        .await?;
    Ok(Json(ApiMessage::ok("Profile updated successfully")))
}

#[axum::debug_handler]
pub async fn profile_stats(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let stats = state.profile_service.stats(claims.user_id()?).await?;
    Ok(Json(ProfileStatsResponse {
        success: true,
        stats,
    }))
}

/// Recruiter/admin view of a candidate's profile; counts as a profile view.
#[axum::debug_handler]
pub async fn candidate_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let profile = state.profile_service.candidate_profile(id).await?;
    Ok(Json(CandidateProfileResponse {
        success: true,
        profile,
    }))
}
