use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::interview_dto::{
        ScheduleInterviewPayload, ScheduleInterviewResponse, UpdateInterviewPayload,
    },
    error::Result,
    models::notification::NOTIFY_INTERVIEW,
    utils::time::format_datetime,
    utils::token::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn schedule_interview(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ScheduleInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let slot = format_datetime(payload.scheduled_at);
    let interview_type = payload.interview_type.clone();
    let scheduled = state
        .interview_service
        .schedule(payload, claims.user_id()?)
        .await?;

    state
        .notification_service
        .create(
            scheduled.candidate_id,
            NOTIFY_INTERVIEW,
            "Interview scheduled",
            &format!(
                "Your {} interview for {} is on {}",
                interview_type, scheduled.job_title, slot
            ),
            Some("/interviews"),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ScheduleInterviewResponse {
            success: true,
            message: "Interview scheduled successfully".to_string(),
            interview_id: scheduled.interview_id,
        }),
    ))
}

#[axum::debug_handler]
pub async fn update_interview(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interview_service.update(id, payload).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "interview": interview,
    })))
}
