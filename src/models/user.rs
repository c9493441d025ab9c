use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub work_experience: Option<JsonValue>,
    pub education: Option<JsonValue>,
    pub experience_years: i32,
    pub location: Option<String>,
    pub profile_views: i64,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_RECRUITER: &str = "recruiter";
pub const ROLE_HIRING_MANAGER: &str = "hiring_manager";
pub const ROLE_CANDIDATE: &str = "candidate";

pub const ALL_ROLES: &[&str] = &[
    ROLE_ADMIN,
    ROLE_RECRUITER,
    ROLE_HIRING_MANAGER,
    ROLE_CANDIDATE,
];

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
