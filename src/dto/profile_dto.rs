use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use validator::Validate;

use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub role: String,
    pub skills: Vec<String>,
    pub work_experience: JsonValue,
    pub education: JsonValue,
    pub experience_years: i32,
    pub profile_completion: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub profile: ProfileData,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfilePayload {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStats {
    pub applications_sent: i64,
    pub interviews_scheduled: i64,
    pub profile_views: i64,
    pub response_rate: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStatsResponse {
    pub success: bool,
    pub stats: ProfileStats,
}

/// Candidate profile as recruiters see it; excludes contact-independent
/// account fields like username and activity flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub work_experience: JsonValue,
    pub education: JsonValue,
    pub experience_years: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfileResponse {
    pub success: bool,
    pub profile: CandidateProfile,
}

pub fn split_skills(skills: Option<&str>) -> Vec<String> {
    skills
        .map(|s| {
            s.split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

impl From<&User> for CandidateProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            location: user.location.clone(),
            bio: user.bio.clone(),
            skills: split_skills(user.skills.as_deref()),
            work_experience: user.work_experience.clone().unwrap_or(JsonValue::Null),
            education: user.education.clone().unwrap_or(JsonValue::Null),
            experience_years: user.experience_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_are_trimmed_and_split() {
        assert_eq!(
            split_skills(Some("SQL, Python ,Tableau")),
            vec!["SQL", "Python", "Tableau"]
        );
        assert_eq!(split_skills(Some("")), Vec::<String>::new());
        assert_eq!(split_skills(None), Vec::<String>::new());
    }
}
