use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub id: i64,
    pub application_id: i64,
    pub interviewer_id: i64,
    pub interview_type: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub status: String,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const INTERVIEW_TYPES: &[&str] = &["phone", "video", "in_person", "technical", "behavioral"];
pub const INTERVIEW_STATUSES: &[&str] = &[
    "scheduled",
    "completed",
    "cancelled",
    "rescheduled",
    "no_show",
];
