use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::notification_dto::{NotificationListResponse, UnreadNotificationsResponse},
    dto::ApiMessage,
    error::Result,
    utils::token::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let notifications = state
        .notification_service
        .list_for_user(claims.user_id()?)
        .await?;
    Ok(Json(NotificationListResponse {
        success: true,
        notifications,
    }))
}

#[axum::debug_handler]
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state
        .notification_service
        .mark_read(id, claims.user_id()?)
        .await?;
    Ok(Json(ApiMessage::ok("Notification marked as read")))
}

#[axum::debug_handler]
pub async fn unread_count(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let unread = state
        .notification_service
        .unread_count(claims.user_id()?)
        .await?;
    Ok(Json(UnreadNotificationsResponse {
        success: true,
        unread,
    }))
}
