use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobRow, JobUpdate, NewJob};
use crate::models::resume::{NewResume, ResumeRecord};
use crate::store::DocumentStore;

/// PostgreSQL-backed document store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

/// TIMESTAMPTZ keeps microseconds; returned records must equal what a later read sees.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn insert_job(&self, job: NewJob) -> Result<JobPosting, AppError> {
        let job = job.into_posting(Uuid::new_v4(), now());
        sqlx::query(
            r#"
            INSERT INTO jobs
                (id, title, company, location, salary, job_type,
                 skills, requirements, experience, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(job.salary)
        .bind(job.job_type.as_str())
        .bind(&job.skills)
        .bind(&job.requirements)
        .bind(&job.experience)
        .bind(job.created_at)
        .execute(&self.pool)
        .await?;

        info!("Inserted job {}", job.id);
        Ok(job)
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError> {
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(JobPosting::try_from)
            .transpose()
    }

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY created_at DESC, id")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(JobPosting::try_from)
            .collect()
    }

    async fn update_job(
        &self,
        id: Uuid,
        update: JobUpdate,
    ) -> Result<Option<JobPosting>, AppError> {
        update.validate()?;

        // Only supplied columns change. A row deleted concurrently returns nothing.
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            UPDATE jobs
            SET title        = COALESCE($2, title),
                company      = COALESCE($3, company),
                location     = COALESCE($4, location),
                salary       = COALESCE($5, salary),
                job_type     = COALESCE($6, job_type),
                skills       = COALESCE($7, skills),
                requirements = COALESCE($8, requirements),
                experience   = COALESCE($9, experience)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.company)
        .bind(update.location)
        .bind(update.salary)
        .bind(update.job_type.map(|t| t.as_str()))
        .bind(update.skills)
        .bind(update.requirements)
        .bind(update.experience)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                info!("Updated job {id}");
                JobPosting::try_from(row).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn delete_job(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRecord, AppError> {
        let record = resume.into_record(Uuid::new_v4(), now());
        sqlx::query(
            r#"
            INSERT INTO resumes
                (id, name, email, phone, skills, resume_file, parsed_text, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.skills)
        .bind(&record.resume_file)
        .bind(&record.parsed_text)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        info!("Inserted resume {}", record.id);
        Ok(record)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        let resume = sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(resume)
    }

    async fn list_resumes(&self) -> Result<Vec<ResumeRecord>, AppError> {
        let resumes =
            sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes ORDER BY created_at DESC, id")
                .fetch_all(&self.pool)
                .await?;
        Ok(resumes)
    }

    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
