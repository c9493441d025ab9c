use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        application_dto::{
            ApplicationListResponse, ApplicationView, UpdateApplicationStatusPayload,
        },
        ApiMessage,
    },
    error::Result,
    models::notification::NOTIFY_APPLICATION,
    models::user::ROLE_CANDIDATE,
    utils::token::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn list_applications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user_id = claims.user_id()?;
    let rows = if claims.has_role(&[ROLE_CANDIDATE]) {
        state
            .application_service
            .list_for_candidate(user_id, None)
            .await?
    } else {
        state
            .application_service
            .list_for_poster(user_id, None)
            .await?
    };
    let applications: Vec<ApplicationView> = rows.into_iter().map(Into::into).collect();
    Ok(Json(ApplicationListResponse {
        success: true,
        applications,
    }))
}

#[utoipa::path(
    patch,
    path = "/api/applications/{id}/status",
    params(("id" = i64, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusPayload,
    responses(
        (status = 200, description = "Status updated"),
        (status = 404, description = "Application not found"),
        (status = 409, description = "Illegal status transition")
    )
)]
#[axum::debug_handler]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateApplicationStatusPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate_id = state
        .application_service
        .update_status(id, &payload.status, payload.notes)
        .await?;

    state
        .notification_service
        .create(
            candidate_id,
            NOTIFY_APPLICATION,
            "Application status updated",
            &format!("Your application moved to {}", payload.status),
            Some("/applications"),
        )
        .await?;

    Ok(Json(ApiMessage::ok(
        "Application status updated successfully",
    )))
}

#[axum::debug_handler]
pub async fn withdraw(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state
        .application_service
        .withdraw(id, claims.user_id()?)
        .await?;
    Ok(Json(ApiMessage::ok("Application withdrawn")))
}
