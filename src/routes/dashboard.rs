use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::dashboard_dto::{
        ActivityFeedResponse, ActivityItem, DashboardStatsResponse, RecentApplicationsResponse,
        RecommendedJob, RecommendedJobsResponse, UpcomingInterviewView,
        UpcomingInterviewsResponse,
    },
    error::{Error, Result},
    models::user::ROLE_CANDIDATE,
    utils::token::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn recent_applications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user_id = claims.user_id()?;
    let rows = if claims.has_role(&[ROLE_CANDIDATE]) {
        state
            .application_service
            .list_for_candidate(user_id, Some(10))
            .await?
    } else {
        state
            .application_service
            .list_for_poster(user_id, Some(10))
            .await?
    };
    Ok(Json(RecentApplicationsResponse {
        success: true,
        applications: rows.into_iter().map(Into::into).collect(),
    }))
}

#[axum::debug_handler]
pub async fn upcoming_interviews(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let rows = state
        .interview_service
        .upcoming_for_user(claims.user_id()?)
        .await?;
    let interviews: Vec<UpcomingInterviewView> = rows.into_iter().map(Into::into).collect();
    Ok(Json(UpcomingInterviewsResponse {
        success: true,
        interviews,
    }))
}

#[axum::debug_handler]
pub async fn recommended_jobs(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    if !claims.has_role(&[ROLE_CANDIDATE]) {
        return Err(Error::Forbidden("Unauthorized".to_string()));
    }
    let rows = state
        .dashboard_service
        .recommended_jobs(claims.user_id()?)
        .await?;
    let jobs: Vec<RecommendedJob> = rows.into_iter().map(Into::into).collect();
    Ok(Json(RecommendedJobsResponse {
        success: true,
        jobs,
    }))
}

#[axum::debug_handler]
pub async fn activity_feed(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let rows = state
        .dashboard_service
        .activity_feed(&claims.role, claims.user_id()?)
        .await?;
    let activities: Vec<ActivityItem> = rows.into_iter().map(Into::into).collect();
    Ok(Json(ActivityFeedResponse {
        success: true,
        activities,
    }))
}

#[axum::debug_handler]
pub async fn stats(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let stats = state
        .dashboard_service
        .stats(&claims.role, claims.user_id()?)
        .await?;
    Ok(Json(DashboardStatsResponse {
        success: true,
        stats,
    }))
}
