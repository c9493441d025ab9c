use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        application_dto::{ApplyJobPayload, ApplyJobResponse},
        job_dto::{
            CreateJobPayload, CreateJobResponse, JobDetailResponse, JobListQuery, JobListResponse,
            JobSummary,
        },
    },
    error::Result,
    models::notification::NOTIFY_APPLICATION,
    utils::token::Claims,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("search" = Option<String>, Query, description = "Substring over title, description and company"),
        ("job_type" = Option<String>, Query, description = "Comma-separated job types"),
        ("experience_level" = Option<String>, Query, description = "Comma-separated experience levels"),
        ("location" = Option<String>, Query, description = "Location substring; remote jobs always match"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("offset" = Option<i64>, Query, description = "Page offset")
    ),
    responses(
        (status = 200, description = "Active job listings", body = Json<JobListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs: Vec<JobSummary> = state
        .job_service
        .list(query)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let total = jobs.len() as i64;
    Ok(Json(JobListResponse {
        success: true,
        jobs,
        total,
    }))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = i64, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job found", body = Json<JobDetailResponse>),
        (status = 404, description = "Job not found or not active")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_active_by_id(id).await?;
    Ok(Json(JobDetailResponse {
        success: true,
        job: job.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created", body = Json<CreateJobResponse>),
        (status = 400, description = "Missing required fields")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job_id = state.job_service.create(payload, claims.user_id()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateJobResponse {
            success: true,
            message: "Job created successfully".to_string(),
            job_id,
        }),
    ))
}

#[axum::debug_handler]
pub async fn apply_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(job_id): Path<i64>,
    Json(payload): Json<ApplyJobPayload>,
) -> Result<impl IntoResponse> {
    let candidate_id = claims.user_id()?;
    let applied = state
        .application_service
        .apply(job_id, candidate_id, payload.cover_letter)
        .await?;

    state
        .notification_service
        .create(
            applied.posted_by,
            NOTIFY_APPLICATION,
            "New application",
            &format!("{} applied for {}", claims.name, applied.job_title),
            Some("/applications"),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplyJobResponse {
            success: true,
            message: "Application submitted successfully".to_string(),
            application_id: applied.application_id,
        }),
    ))
}
