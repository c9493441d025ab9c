use sqlx::PgPool;

use crate::dto::job_dto::{CreateJobPayload, JobListQuery};
use crate::error::{Error, Result};
use crate::models::job::{
    JobWithCompany, EXPERIENCE_LEVELS, JOB_STATUSES, JOB_STATUS_DRAFT, JOB_TYPES,
};

const JOB_COLUMNS: &str = "j.id, j.title, j.description, j.requirements, j.location, \
     j.salary_min, j.salary_max, j.job_type, j.experience_level, j.remote_allowed, \
     j.company_id, j.posted_by, j.status, j.expires_at, j.application_count, \
     j.views_count, j.featured, j.created_at, j.updated_at, c.name AS company_name";

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateJobPayload, posted_by: i64) -> Result<i64> {
        if !JOB_TYPES.contains(&payload.job_type.as_str()) {
            return Err(Error::BadRequest(format!(
                "Invalid job type: {}",
                payload.job_type
            )));
        }
        if !EXPERIENCE_LEVELS.contains(&payload.experience_level.as_str()) {
            return Err(Error::BadRequest(format!(
                "Invalid experience level: {}",
                payload.experience_level
            )));
        }
        let status = payload
            .status
            .unwrap_or_else(|| JOB_STATUS_DRAFT.to_string());
        if !JOB_STATUSES.contains(&status.as_str()) {
            return Err(Error::BadRequest(format!("Invalid job status: {}", status)));
        }

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO jobs (title, description, requirements, location, salary_min, salary_max,
                              job_type, experience_level, remote_allowed, company_id, posted_by,
                              status, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.requirements)
        .bind(&payload.location)
        .bind(payload.salary_min)
        .bind(payload.salary_max)
        .bind(&payload.job_type)
        .bind(&payload.experience_level)
        .bind(payload.remote_allowed)
        .bind(payload.company_id)
        .bind(posted_by)
        .bind(&status)
        .bind(payload.expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Public listing. Only active jobs are ever returned; filters narrow
    /// further. Featured postings sort first, then newest.
    pub async fn list(&self, query: JobListQuery) -> Result<Vec<JobWithCompany>> {
        let limit = query.limit.unwrap_or(20).clamp(1, 100);
        let offset = query.offset.unwrap_or(0).max(0);

        let mut filters: Vec<String> = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if let Some(search) = query.search.filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", search);
            filters.push(format!(
                "(j.title ILIKE ${0} OR j.description ILIKE ${1} OR c.name ILIKE ${2})",
                args.len() + 1,
                args.len() + 2,
                args.len() + 3
            ));
            args.push(pattern.clone());
            args.push(pattern.clone());
            args.push(pattern);
        }
        if let Some(types) = query.job_type.filter(|s| !s.is_empty()) {
            let mut placeholders = Vec::new();
            for value in types.split(',').map(str::trim).filter(|v| !v.is_empty()) {
                args.push(value.to_string());
                placeholders.push(format!("${}", args.len()));
            }
            if !placeholders.is_empty() {
                filters.push(format!("j.job_type IN ({})", placeholders.join(",")));
            }
        }
        if let Some(levels) = query.experience_level.filter(|s| !s.is_empty()) {
            let mut placeholders = Vec::new();
            for value in levels.split(',').map(str::trim).filter(|v| !v.is_empty()) {
                args.push(value.to_string());
                placeholders.push(format!("${}", args.len()));
            }
            if !placeholders.is_empty() {
                filters.push(format!(
                    "j.experience_level IN ({})",
                    placeholders.join(",")
                ));
            }
        }
        if let Some(location) = query.location.filter(|s| !s.is_empty()) {
            filters.push(format!(
                "(j.location ILIKE ${} OR j.remote_allowed = TRUE)",
                args.len() + 1
            ));
            args.push(format!("%{}%", location));
        }

        let mut sql = format!(
            "SELECT {} FROM jobs j LEFT JOIN companies c ON j.company_id = c.id \
             WHERE j.status = 'active'",
            JOB_COLUMNS
        );
        for filter in &filters {
            sql.push_str(" AND ");
            sql.push_str(filter);
        }
        sql.push_str(&format!(
            " ORDER BY j.featured DESC, j.created_at DESC LIMIT ${} OFFSET ${}",
            args.len() + 1,
            args.len() + 2
        ));

        let mut statement = sqlx::query_as::<_, JobWithCompany>(&sql);
        for value in &args {
            statement = statement.bind(value);
        }
        statement = statement.bind(limit).bind(offset);
        let jobs = statement.fetch_all(&self.pool).await?;

        Ok(jobs)
    }

    /// Public job detail; each fetch counts as a view.
    pub async fn get_active_by_id(&self, id: i64) -> Result<JobWithCompany> {
        sqlx::query("UPDATE jobs SET views_count = views_count + 1 WHERE id = $1 AND status = 'active'")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let sql = format!(
            "SELECT {} FROM jobs j LEFT JOIN companies c ON j.company_id = c.id \
             WHERE j.id = $1 AND j.status = 'active'",
            JOB_COLUMNS
        );
        let job = sqlx::query_as::<_, JobWithCompany>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        job.ok_or_else(|| Error::NotFound("Job not found".to_string()))
    }
}
