use sqlx::PgPool;

use crate::dto::application_dto::ApplicationRow;
use crate::error::{Error, Result};
use crate::models::application::ApplicationStatus;

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

pub struct AppliedJob {
    pub application_id: i64,
    pub job_title: String,
    pub posted_by: i64,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Submits an application. The insert and the job's application_count
    /// increment commit together, so the counter cannot drift under
    /// concurrent applies.
    pub async fn apply(
        &self,
        job_id: i64,
        candidate_id: i64,
        cover_letter: Option<String>,
    ) -> Result<AppliedJob> {
        let job: Option<(String, i64)> =
            sqlx::query_as("SELECT title, posted_by FROM jobs WHERE id = $1")
                .bind(job_id)
                .fetch_optional(&self.pool)
                .await?;
        let Some((job_title, posted_by)) = job else {
            return Err(Error::NotFound("Job not found".to_string()));
        };

        let existing: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM applications WHERE job_id = $1 AND candidate_id = $2",
        )
        .bind(job_id)
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?;
        if existing.is_some() {
            return Err(Error::Conflict(
                "You have already applied for this job".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;
        let application_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO applications (job_id, candidate_id, cover_letter)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(job_id)
        .bind(candidate_id)
        .bind(&cover_letter)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE jobs SET application_count = application_count + 1 WHERE id = $1")
            .bind(job_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(AppliedJob {
            application_id,
            job_title,
            posted_by,
        })
    }

    /// Moves an application along the hiring pipeline. The transition must
    /// be legal: stages only advance, hired requires an offer, and terminal
    /// applications stay put.
    pub async fn update_status(
        &self,
        application_id: i64,
        new_status: &str,
        notes: Option<String>,
    ) -> Result<i64> {
        let next: ApplicationStatus = new_status
            .parse()
            .map_err(Error::BadRequest)?;

        let row: Option<(String, i64)> =
            sqlx::query_as("SELECT status, candidate_id FROM applications WHERE id = $1")
                .bind(application_id)
                .fetch_optional(&self.pool)
                .await?;
        let Some((current_raw, candidate_id)) = row else {
            return Err(Error::NotFound("Application not found".to_string()));
        };
        let current: ApplicationStatus = current_raw
            .parse()
            .map_err(Error::Internal)?;

        if !current.can_transition_to(next) {
            return Err(Error::Conflict(format!(
                "Cannot move application from {} to {}",
                current, next
            )));
        }

        sqlx::query(
            "UPDATE applications SET status = $1, recruiter_notes = $2, updated_at = NOW() WHERE id = $3",
        )
        .bind(next.as_str())
        .bind(&notes)
        .bind(application_id)
        .execute(&self.pool)
        .await?;

        Ok(candidate_id)
    }

    /// Candidate-initiated withdrawal of their own application.
    pub async fn withdraw(&self, application_id: i64, candidate_id: i64) -> Result<()> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT status FROM applications WHERE id = $1 AND candidate_id = $2",
        )
        .bind(application_id)
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some((current_raw,)) = row else {
            return Err(Error::NotFound("Application not found".to_string()));
        };
        let current: ApplicationStatus = current_raw
            .parse()
            .map_err(Error::Internal)?;
        if !current.can_transition_to(ApplicationStatus::Withdrawn) {
            return Err(Error::Conflict(format!(
                "Cannot withdraw an application that is already {}",
                current
            )));
        }

        sqlx::query("UPDATE applications SET status = 'withdrawn', updated_at = NOW() WHERE id = $1")
            .bind(application_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_for_candidate(
        &self,
        candidate_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<ApplicationRow>> {
        let mut sql = String::from(
            r#"
            SELECT a.id, a.job_id, a.candidate_id, a.status, a.cover_letter, a.recruiter_notes,
                   a.applied_at, j.title AS job_title, c.name AS company_name,
                   NULL::VARCHAR AS first_name, NULL::VARCHAR AS last_name, NULL::VARCHAR AS email
            FROM applications a
            JOIN jobs j ON a.job_id = j.id
            LEFT JOIN companies c ON j.company_id = c.id
            WHERE a.candidate_id = $1
            ORDER BY a.applied_at DESC
            "#,
        );
        if limit.is_some() {
            sql.push_str(" LIMIT $2");
        }
        let mut statement = sqlx::query_as::<_, ApplicationRow>(&sql).bind(candidate_id);
        if let Some(limit) = limit {
            statement = statement.bind(limit);
        }
        Ok(statement.fetch_all(&self.pool).await?)
    }

    /// Applications against jobs the given recruiter/admin posted.
    pub async fn list_for_poster(
        &self,
        poster_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<ApplicationRow>> {
        let mut sql = String::from(
            r#"
            SELECT a.id, a.job_id, a.candidate_id, a.status, a.cover_letter, a.recruiter_notes,
                   a.applied_at, j.title AS job_title, NULL::VARCHAR AS company_name,
                   u.first_name, u.last_name, u.email
            FROM applications a
            JOIN jobs j ON a.job_id = j.id
            JOIN users u ON a.candidate_id = u.id
            WHERE j.posted_by = $1
            ORDER BY a.applied_at DESC
            "#,
        );
        if limit.is_some() {
            sql.push_str(" LIMIT $2");
        }
        let mut statement = sqlx::query_as::<_, ApplicationRow>(&sql).bind(poster_id);
        if let Some(limit) = limit {
            statement = statement.bind(limit);
        }
        Ok(statement.fetch_all(&self.pool).await?)
    }
}
