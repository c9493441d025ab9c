use serde_json::Value as JsonValue;
use sqlx::PgPool;

use crate::dto::profile_dto::{
    split_skills, CandidateProfile, ProfileData, ProfileStats, UpdateProfilePayload,
};
use crate::error::{Error, Result};
use crate::models::user::{User, ROLE_CANDIDATE};

/// Share of the seven checklist fields that are filled in, as a rounded
/// percentage. 100 requires every field to be non-empty.
pub fn profile_completion(user: &User) -> i64 {
    let filled_opt = |v: &Option<String>| {
        v.as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
    };
    let checklist = [
        !user.first_name.trim().is_empty(),
        !user.last_name.trim().is_empty(),
        !user.email.trim().is_empty(),
        filled_opt(&user.phone),
        filled_opt(&user.location),
        filled_opt(&user.bio),
        filled_opt(&user.skills),
    ];
    let filled = checklist.iter().filter(|&&f| f).count();
    ((filled as f64 / checklist.len() as f64) * 100.0).round() as i64
}

#[derive(Clone)]
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, user_id: i64) -> Result<ProfileData> {
        let user = self.fetch_user(user_id).await?;
        Ok(ProfileData {
            profile_completion: profile_completion(&user),
            skills: split_skills(user.skills.as_deref()),
            work_experience: user.work_experience.unwrap_or(JsonValue::Null),
            education: user.education.unwrap_or(JsonValue::Null),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            location: user.location,
            bio: user.bio,
            role: user.role,
            experience_years: user.experience_years,
            created_at: user.created_at,
        })
    }

    pub async fn update(&self, user_id: i64, payload: UpdateProfilePayload) -> Result<()> {
        let taken: Option<i64> =
            sqlx::query_scalar("SELECT id FROM users WHERE email = $1 AND id <> $2")
                .bind(&payload.email)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        if taken.is_some() {
            return Err(Error::Conflict(
                "Email already in use by another account".to_string(),
            ));
        }

        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4, phone = $5,
                location = $6, bio = $7, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.location)
        .bind(&payload.bio)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Profile not found".to_string()));
        }
        Ok(())
    }

    pub async fn stats(&self, user_id: i64) -> Result<ProfileStats> {
        let applications_sent: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE candidate_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        let interviews_scheduled: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM interviews i \
             JOIN applications a ON i.application_id = a.id \
             WHERE a.candidate_id = $1 AND i.status = 'scheduled'",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        let profile_views: i64 =
            sqlx::query_scalar("SELECT profile_views FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        let response_rate = if applications_sent > 0 {
            ((interviews_scheduled as f64 / applications_sent as f64) * 100.0).round() as i64
        } else {
            0
        };

        Ok(ProfileStats {
            applications_sent,
            interviews_scheduled,
            profile_views,
            response_rate,
        })
    }

    /// A candidate's profile as shown to recruiters; each fetch bumps the
    /// candidate's view counter.
    pub async fn candidate_profile(&self, user_id: i64) -> Result<CandidateProfile> {
        let user = self.fetch_user(user_id).await?;
        if user.role != ROLE_CANDIDATE {
            return Err(Error::NotFound("Candidate not found".to_string()));
        }

        sqlx::query("UPDATE users SET profile_views = profile_views + 1 WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(CandidateProfile::from(&user))
    }

    async fn fetch_user(&self, user_id: i64) -> Result<User> {
        let user =
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1 AND is_active = TRUE")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        user.ok_or_else(|| Error::NotFound("Profile not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with(filled: usize) -> User {
        // Fills the checklist fields in a fixed order so tests can dial in
        // any completion level.
        let field = |i: usize| {
            if filled > i {
                Some(format!("value{}", i))
            } else {
                None
            }
        };
        User {
            id: 1,
            username: "u".into(),
            email: if filled > 2 { "u@example.com".into() } else { "".into() },
            password_hash: "x".into(),
            role: "candidate".into(),
            first_name: if filled > 0 { "John".into() } else { "".into() },
            last_name: if filled > 1 { "Doe".into() } else { "".into() },
            phone: field(3),
            profile_image: None,
            bio: field(5),
            skills: field(6),
            work_experience: None,
            education: None,
            experience_years: 0,
            location: field(4),
            profile_views: 0,
            is_active: true,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn completion_is_monotonic() {
        let mut previous = 0;
        for filled in 0..=7 {
            let pct = profile_completion(&user_with(filled));
            assert!(pct >= previous, "{} < {}", pct, previous);
            previous = pct;
        }
    }

    #[test]
    fn completion_is_full_only_when_all_seven_filled() {
        assert_eq!(profile_completion(&user_with(7)), 100);
        for filled in 0..7 {
            assert!(profile_completion(&user_with(filled)) < 100);
        }
    }

    #[test]
    fn blank_strings_do_not_count() {
        let mut user = user_with(7);
        user.bio = Some("   ".into());
        assert!(profile_completion(&user) < 100);
    }

    #[test]
    fn empty_profile_is_zero() {
        assert_eq!(profile_completion(&user_with(0)), 0);
    }
}
