use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    config::get_config,
    dto::{
        auth_dto::{LoginPayload, LoginResponse, RegisterPayload, SessionUser},
        ApiMessage,
    },
    error::Result,
    utils::token::create_token,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Username or email already exists")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.auth_service.register(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::ok("Registration successful")),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Logged in", body = Json<LoginResponse>),
        (status = 401, description = "Invalid username or password")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    let config = get_config();
    let token = create_token(&user, &config.jwt_secret, config.token_ttl_hours)?;
    Ok(Json(LoginResponse {
        success: true,
        token,
        role: user.role.clone(),
        user: SessionUser::from(&user),
    }))
}

/// Tokens are stateless; logging out is an acknowledgement and the client
/// drops its copy.
#[axum::debug_handler]
pub async fn logout() -> impl IntoResponse {
    Json(ApiMessage::ok("Logged out successfully"))
}
