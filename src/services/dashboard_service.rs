use sqlx::PgPool;

use crate::dto::dashboard_dto::{ActivityRow, DashboardStats, RecommendedJobRow};
use crate::error::Result;
use crate::models::user::{ROLE_ADMIN, ROLE_CANDIDATE, ROLE_RECRUITER};
use crate::services::profile_service::profile_completion;

#[derive(Clone)]
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active jobs the candidate has not applied to yet, newest first.
    pub async fn recommended_jobs(&self, candidate_id: i64) -> Result<Vec<RecommendedJobRow>> {
        let rows = sqlx::query_as::<_, RecommendedJobRow>(
            r#"
            SELECT DISTINCT j.id, j.title, j.location, j.salary_min, j.salary_max,
                   j.job_type, j.experience_level, j.created_at, c.name AS company_name
            FROM jobs j
            LEFT JOIN companies c ON j.company_id = c.id
            WHERE j.status = 'active'
              AND j.id NOT IN (SELECT job_id FROM applications WHERE candidate_id = $1)
            ORDER BY j.created_at DESC
            LIMIT 5
            "#,
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn activity_feed(&self, role: &str, user_id: i64) -> Result<Vec<ActivityRow>> {
        let rows = match role {
            ROLE_ADMIN => {
                sqlx::query_as::<_, ActivityRow>(
                    r#"
                    SELECT 'application'::TEXT AS kind, a.applied_at AS created_at,
                           u.first_name || ' ' || u.last_name AS user_name,
                           j.title AS job_title, 'applied for'::TEXT AS action
                    FROM applications a
                    JOIN users u ON a.candidate_id = u.id
                    JOIN jobs j ON a.job_id = j.id
                    ORDER BY a.applied_at DESC
                    LIMIT 10
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
            ROLE_RECRUITER => {
                sqlx::query_as::<_, ActivityRow>(
                    r#"
                    SELECT 'application'::TEXT AS kind, a.applied_at AS created_at,
                           u.first_name || ' ' || u.last_name AS user_name,
                           j.title AS job_title, 'applied for'::TEXT AS action
                    FROM applications a
                    JOIN users u ON a.candidate_id = u.id
                    JOIN jobs j ON a.job_id = j.id
                    WHERE j.posted_by = $1
                    ORDER BY a.applied_at DESC
                    LIMIT 10
                    "#,
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, ActivityRow>(
                    r#"
                    SELECT 'application'::TEXT AS kind, a.applied_at AS created_at,
                           'You'::TEXT AS user_name,
                           j.title AS job_title, 'applied for'::TEXT AS action
                    FROM applications a
                    JOIN jobs j ON a.job_id = j.id
                    WHERE a.candidate_id = $1
                    ORDER BY a.applied_at DESC
                    LIMIT 10
                    "#,
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    pub async fn stats(&self, role: &str, user_id: i64) -> Result<DashboardStats> {
        let mut stats = DashboardStats::default();

        match role {
            ROLE_ADMIN => {
                stats.total_users = Some(
                    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE is_active = TRUE")
                        .fetch_one(&self.pool)
                        .await?,
                );
                stats.active_jobs = Some(
                    sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE status = 'active'")
                        .fetch_one(&self.pool)
                        .await?,
                );
                stats.total_applications = Some(
                    sqlx::query_scalar("SELECT COUNT(*) FROM applications")
                        .fetch_one(&self.pool)
                        .await?,
                );
                stats.hires_this_month = Some(
                    sqlx::query_scalar(
                        "SELECT COUNT(*) FROM applications WHERE status = 'hired' \
                         AND date_trunc('month', updated_at) = date_trunc('month', NOW())",
                    )
                    .fetch_one(&self.pool)
                    .await?,
                );
            }
            ROLE_RECRUITER => {
                stats.active_jobs = Some(
                    sqlx::query_scalar(
                        "SELECT COUNT(*) FROM jobs WHERE posted_by = $1 AND status = 'active'",
                    )
                    .bind(user_id)
                    .fetch_one(&self.pool)
                    .await?,
                );
                stats.total_applications = Some(
                    sqlx::query_scalar(
                        "SELECT COUNT(*) FROM applications a \
                         JOIN jobs j ON a.job_id = j.id WHERE j.posted_by = $1",
                    )
                    .bind(user_id)
                    .fetch_one(&self.pool)
                    .await?,
                );
                stats.interviews_scheduled = Some(
                    sqlx::query_scalar(
                        "SELECT COUNT(*) FROM interviews i \
                         JOIN applications a ON i.application_id = a.id \
                         JOIN jobs j ON a.job_id = j.id \
                         WHERE j.posted_by = $1 AND i.status = 'scheduled'",
                    )
                    .bind(user_id)
                    .fetch_one(&self.pool)
                    .await?,
                );
                stats.offers_extended = Some(
                    sqlx::query_scalar(
                        "SELECT COUNT(*) FROM applications a \
                         JOIN jobs j ON a.job_id = j.id \
                         WHERE j.posted_by = $1 AND a.status = 'offer'",
                    )
                    .bind(user_id)
                    .fetch_one(&self.pool)
                    .await?,
                );
            }
            ROLE_CANDIDATE => {
                stats.applications_sent = Some(
                    sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE candidate_id = $1")
                        .bind(user_id)
                        .fetch_one(&self.pool)
                        .await?,
                );
                stats.interviews_scheduled = Some(
                    sqlx::query_scalar(
                        "SELECT COUNT(*) FROM interviews i \
                         JOIN applications a ON i.application_id = a.id \
                         WHERE a.candidate_id = $1 AND i.status = 'scheduled'",
                    )
                    .bind(user_id)
                    .fetch_one(&self.pool)
                    .await?,
                );
                let user = sqlx::query_as::<_, crate::models::user::User>(
                    "SELECT * FROM users WHERE id = $1",
                )
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
                stats.profile_views = Some(user.profile_views);
                stats.profile_complete = Some(profile_completion(&user));
            }
            _ => {}
        }

        Ok(stats)
    }
}
