use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::JobWithCompany;
use crate::utils::format::salary_range;
use crate::utils::time::{days_since, format_date};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub requirements: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    #[validate(length(min = 1))]
    pub job_type: String,
    #[validate(length(min = 1))]
    pub experience_level: String,
    #[serde(default)]
    pub remote_allowed: bool,
    pub company_id: Option<i64>,
    pub expires_at: Option<NaiveDate>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobResponse {
    pub success: bool,
    pub message: String,
    pub job_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListQuery {
    pub search: Option<String>,
    /// Comma-separated set, e.g. "full-time,contract".
    pub job_type: Option<String>,
    /// Comma-separated set, e.g. "entry,mid".
    pub experience_level: Option<String>,
    pub location: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub salary_range: String,
    pub job_type: String,
    pub experience_level: String,
    pub remote_allowed: bool,
    pub company_id: Option<i64>,
    pub company_name: Option<String>,
    pub status: String,
    pub application_count: i32,
    pub views_count: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub posted_date: String,
    pub days_ago: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub success: bool,
    pub jobs: Vec<JobSummary>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetailResponse {
    pub success: bool,
    pub job: JobSummary,
}

impl From<JobWithCompany> for JobSummary {
    fn from(value: JobWithCompany) -> Self {
        let salary_range = salary_range(value.salary_min, value.salary_max);
        let posted_date = format_date(value.created_at);
        let days_ago = days_since(value.created_at);
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            requirements: value.requirements,
            location: value.location,
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            salary_range,
            job_type: value.job_type,
            experience_level: value.experience_level,
            remote_allowed: value.remote_allowed,
            company_id: value.company_id,
            company_name: value.company_name,
            status: value.status,
            application_count: value.application_count,
            views_count: value.views_count,
            featured: value.featured,
            created_at: value.created_at,
            posted_date,
            days_ago,
        }
    }
}
