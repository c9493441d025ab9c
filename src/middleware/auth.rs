use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::models::user::{ROLE_ADMIN, ROLE_CANDIDATE, ROLE_RECRUITER};
use crate::utils::token::{decode_token, Claims};

fn deny(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({"success": false, "message": message})),
    )
        .into_response()
}

/// Pulls the bearer token off the request and decodes it into the caller's
/// identity.
fn authenticate(req: &Request) -> Result<Claims, Response> {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return Err(deny(StatusCode::UNAUTHORIZED, "Missing authorization header"));
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Err(deny(StatusCode::UNAUTHORIZED, "Malformed authorization header"));
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err(deny(StatusCode::UNAUTHORIZED, "Unsupported authorization scheme"));
    };

    let config = crate::config::get_config();
    decode_token(token, &config.jwt_secret)
        .map_err(|_| deny(StatusCode::UNAUTHORIZED, "Invalid or expired token"))
}

pub async fn require_auth(mut req: Request, next: Next) -> Response {
    match authenticate(&req) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(denied) => denied,
    }
}

pub async fn require_recruiter_or_admin(mut req: Request, next: Next) -> Response {
    match authenticate(&req) {
        Ok(claims) => {
            if !claims.has_role(&[ROLE_ADMIN, ROLE_RECRUITER]) {
                return deny(StatusCode::FORBIDDEN, "Unauthorized");
            }
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(denied) => denied,
    }
}

pub async fn require_candidate(mut req: Request, next: Next) -> Response {
    match authenticate(&req) {
        Ok(claims) => {
            if !claims.has_role(&[ROLE_CANDIDATE]) {
                return deny(StatusCode::FORBIDDEN, "Unauthorized");
            }
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(denied) => denied,
    }
}
