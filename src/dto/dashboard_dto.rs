use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::dto::application_dto::ApplicationView;
use crate::utils::format::salary_range_compact;
use crate::utils::time::{days_until, format_datetime, time_ago};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentApplicationsResponse {
    pub success: bool,
    pub applications: Vec<ApplicationView>,
}

#[derive(Debug, Clone, FromRow)]
pub struct UpcomingInterviewRow {
    pub id: i64,
    pub application_id: i64,
    pub job_id: i64,
    pub interview_type: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub status: String,
    pub job_title: String,
    pub company_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingInterviewView {
    pub id: i64,
    pub application_id: i64,
    pub job_id: i64,
    pub interview_type: String,
    pub scheduled_at: DateTime<Utc>,
    pub formatted_date: String,
    pub days_until: i64,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub status: String,
    pub job_title: String,
    pub company_name: Option<String>,
    pub candidate_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingInterviewsResponse {
    pub success: bool,
    pub interviews: Vec<UpcomingInterviewView>,
}

#[derive(Debug, Clone, FromRow)]
pub struct RecommendedJobRow {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub job_type: String,
    pub experience_level: String,
    pub created_at: DateTime<Utc>,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedJob {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub salary_range: String,
    pub job_type: String,
    pub experience_level: String,
    pub created_at: DateTime<Utc>,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedJobsResponse {
    pub success: bool,
    pub jobs: Vec<RecommendedJob>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
    pub job_title: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub time_ago: String,
    pub user_name: String,
    pub job_title: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFeedResponse {
    pub success: bool,
    pub activities: Vec<ActivityItem>,
}

/// Role-scoped dashboard counters; only the fields for the caller's role
/// are populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_users: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_jobs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_applications: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hires_this_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviews_scheduled: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers_extended: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications_sent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_views: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_complete: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStatsResponse {
    pub success: bool,
    pub stats: DashboardStats,
}

impl From<UpcomingInterviewRow> for UpcomingInterviewView {
    fn from(row: UpcomingInterviewRow) -> Self {
        Self {
            id: row.id,
            application_id: row.application_id,
            job_id: row.job_id,
            interview_type: row.interview_type,
            scheduled_at: row.scheduled_at,
            formatted_date: format_datetime(row.scheduled_at),
            days_until: days_until(row.scheduled_at),
            duration_minutes: row.duration_minutes,
            location: row.location,
            meeting_link: row.meeting_link,
            status: row.status,
            job_title: row.job_title,
            company_name: row.company_name,
            candidate_name: format!("{} {}", row.first_name, row.last_name),
        }
    }
}

impl From<RecommendedJobRow> for RecommendedJob {
    fn from(row: RecommendedJobRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            location: row.location,
            salary_range: salary_range_compact(row.salary_min, row.salary_max),
            job_type: row.job_type,
            experience_level: row.experience_level,
            created_at: row.created_at,
            company_name: row.company_name,
        }
    }
}

impl From<ActivityRow> for ActivityItem {
    fn from(row: ActivityRow) -> Self {
        Self {
            kind: row.kind,
            time_ago: time_ago(row.created_at),
            created_at: row.created_at,
            user_name: row.user_name,
            job_title: row.job_title,
            action: row.action,
        }
    }
}
