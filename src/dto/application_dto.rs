use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::application::ApplicationStatus;
use crate::utils::time::format_date;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct ApplyJobPayload {
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateApplicationStatusPayload {
    #[validate(length(min = 1))]
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyJobResponse {
    pub success: bool,
    pub message: String,
    pub application_id: i64,
}

/// One application joined with its job; candidate identity columns are
/// present only in the recruiter-facing queries.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRow {
    pub id: i64,
    pub job_id: i64,
    pub candidate_id: i64,
    pub status: String,
    pub cover_letter: Option<String>,
    pub recruiter_notes: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub job_title: String,
    pub company_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationView {
    pub id: i64,
    pub job_id: i64,
    pub candidate_id: i64,
    pub status: String,
    pub status_badge: String,
    pub cover_letter: Option<String>,
    pub recruiter_notes: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub applied_date: String,
    pub job_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    pub success: bool,
    pub applications: Vec<ApplicationView>,
}

impl From<ApplicationRow> for ApplicationView {
    fn from(row: ApplicationRow) -> Self {
        let status_badge = row
            .status
            .parse::<ApplicationStatus>()
            .map(|s| s.badge())
            .unwrap_or("status-draft")
            .to_string();
        Self {
            id: row.id,
            job_id: row.job_id,
            candidate_id: row.candidate_id,
            status: row.status,
            status_badge,
            cover_letter: row.cover_letter,
            recruiter_notes: row.recruiter_notes,
            applied_at: row.applied_at,
            applied_date: format_date(row.applied_at),
            job_title: row.job_title,
            company_name: row.company_name,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        }
    }
}
