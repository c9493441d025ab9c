use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub job_type: String,
    pub experience_level: String,
    pub remote_allowed: bool,
    pub company_id: Option<i64>,
    pub posted_by: i64,
    pub status: String,
    pub expires_at: Option<NaiveDate>,
    pub application_count: i32,
    pub views_count: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row: a job joined with its (optional) company name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobWithCompany {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub job_type: String,
    pub experience_level: String,
    pub remote_allowed: bool,
    pub company_id: Option<i64>,
    pub posted_by: i64,
    pub status: String,
    pub expires_at: Option<NaiveDate>,
    pub application_count: i32,
    pub views_count: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company_name: Option<String>,
}

pub const JOB_STATUS_DRAFT: &str = "draft";

pub const JOB_TYPES: &[&str] = &["full-time", "part-time", "contract", "internship"];
pub const EXPERIENCE_LEVELS: &[&str] = &["entry", "mid", "senior", "executive"];
pub const JOB_STATUSES: &[&str] = &["draft", "active", "closed", "expired"];
