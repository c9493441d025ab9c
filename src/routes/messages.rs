use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::message_dto::{
        ConversationResponse, SendMessagePayload, SendMessageResponse, UnreadMessagesResponse,
    },
    dto::ApiMessage,
    error::Result,
    models::notification::NOTIFY_MESSAGE,
    utils::token::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SendMessagePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let receiver_id = payload.receiver_id;
    let message_id = state
        .message_service
        .send(claims.user_id()?, payload)
        .await?;

    state
        .notification_service
        .create(
            receiver_id,
            NOTIFY_MESSAGE,
            "New message",
            &format!("{} sent you a message", claims.name),
            Some("/messages"),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse {
            success: true,
            message_id,
        }),
    ))
}

#[axum::debug_handler]
pub async fn conversation(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(other_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let messages = state
        .message_service
        .conversation(claims.user_id()?, other_id)
        .await?;
    Ok(Json(ConversationResponse {
        success: true,
        messages,
    }))
}

#[axum::debug_handler]
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(other_id): Path<i64>,
) -> Result<impl IntoResponse> {
    state
        .message_service
        .mark_read(claims.user_id()?, other_id)
        .await?;
    Ok(Json(ApiMessage::ok("Messages marked as read")))
}

#[axum::debug_handler]
pub async fn unread_count(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let unread = state.message_service.unread_count(claims.user_id()?).await?;
    Ok(Json(UnreadMessagesResponse {
        success: true,
        unread,
    }))
}
