use sqlx::PgPool;

use crate::dto::dashboard_dto::UpcomingInterviewRow;
use crate::dto::interview_dto::{ScheduleInterviewPayload, UpdateInterviewPayload};
use crate::error::{Error, Result};
use crate::models::interview::{Interview, INTERVIEW_STATUSES, INTERVIEW_TYPES};

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

pub struct ScheduledInterview {
    pub interview_id: i64,
    pub candidate_id: i64,
    pub job_title: String,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn schedule(
        &self,
        payload: ScheduleInterviewPayload,
        interviewer_id: i64,
    ) -> Result<ScheduledInterview> {
        if !INTERVIEW_TYPES.contains(&payload.interview_type.as_str()) {
            return Err(Error::BadRequest(format!(
                "Invalid interview type: {}",
                payload.interview_type
            )));
        }

        let row: Option<(i64, String)> = sqlx::query_as(
            r#"
            SELECT a.candidate_id, j.title
            FROM applications a
            JOIN jobs j ON a.job_id = j.id
            WHERE a.id = $1
            "#,
        )
        .bind(payload.application_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some((candidate_id, job_title)) = row else {
            return Err(Error::NotFound("Application not found".to_string()));
        };

        let interview_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO interviews (application_id, interviewer_id, interview_type, scheduled_at,
                                    duration_minutes, location, meeting_link)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(payload.application_id)
        .bind(interviewer_id)
        .bind(&payload.interview_type)
        .bind(payload.scheduled_at)
        .bind(payload.duration_minutes.unwrap_or(60))
        .bind(&payload.location)
        .bind(&payload.meeting_link)
        .fetch_one(&self.pool)
        .await?;

        Ok(ScheduledInterview {
            interview_id,
            candidate_id,
            job_title,
        })
    }

    pub async fn update(&self, id: i64, payload: UpdateInterviewPayload) -> Result<Interview> {
        if let Some(ref status) = payload.status {
            if !INTERVIEW_STATUSES.contains(&status.as_str()) {
                return Err(Error::BadRequest(format!(
                    "Invalid interview status: {}",
                    status
                )));
            }
        }

        let interview = sqlx::query_as::<_, Interview>(
            r#"
            UPDATE interviews
            SET status = COALESCE($2, status),
                feedback = COALESCE($3, feedback),
                rating = COALESCE($4, rating),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.status)
        .bind(&payload.feedback)
        .bind(payload.rating)
        .fetch_optional(&self.pool)
        .await?;

        interview.ok_or_else(|| Error::NotFound("Interview not found".to_string()))
    }

    /// Scheduled future interviews visible to the caller: either their own
    /// (as candidate) or against jobs they posted.
    pub async fn upcoming_for_user(&self, user_id: i64) -> Result<Vec<UpcomingInterviewRow>> {
        let rows = sqlx::query_as::<_, UpcomingInterviewRow>(
            r#"
            SELECT i.id, i.application_id, a.job_id, i.interview_type, i.scheduled_at,
                   i.duration_minutes, i.location, i.meeting_link, i.status,
                   j.title AS job_title, c.name AS company_name, u.first_name, u.last_name
            FROM interviews i
            JOIN applications a ON i.application_id = a.id
            JOIN jobs j ON a.job_id = j.id
            LEFT JOIN companies c ON j.company_id = c.id
            JOIN users u ON a.candidate_id = u.id
            WHERE i.status = 'scheduled'
              AND i.scheduled_at > NOW()
              AND (a.candidate_id = $1 OR j.posted_by = $1)
            ORDER BY i.scheduled_at ASC
            LIMIT 5
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
