use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::jobs::dto::CreateJobRequest;

/// Job posting. `employer_id` is attribution only; reads are public.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub employment_type: String,
    pub requirements: Vec<String>,
    pub employer_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

const JOB_COLUMNS: &str = "id, title, company, location, salary, description, \
                           employment_type, requirements, employer_id, created_at";

impl Job {
    pub async fn create(
        db: &PgPool,
        req: &CreateJobRequest,
        employer_id: Uuid,
    ) -> anyhow::Result<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (title, company, location, salary, description,
                              employment_type, requirements, employer_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(&req.title)
        .bind(&req.company)
        .bind(&req.location)
        .bind(&req.salary)
        .bind(&req.description)
        .bind(&req.employment_type)
        .bind(&req.requirements)
        .bind(employer_id)
        .fetch_one(db)
        .await?;
        Ok(job)
    }

    /// All jobs in creation order. The id tiebreak keeps the order stable
    /// when timestamps collide.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            ORDER BY created_at ASC, id ASC
            "#
        ))
        .fetch_all(db)
        .await?;
        Ok(jobs)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_serializes_with_all_public_fields() {
        let job = Job {
            id: Uuid::new_v4(),
            title: "Senior Software Engineer".into(),
            company: "TechCorp".into(),
            location: "San Francisco, CA".into(),
            salary: "$120,000 - $150,000".into(),
            description: "Join our team.".into(),
            employment_type: "full_time".into(),
            requirements: vec!["Rust".into(), "Postgres".into()],
            employer_id: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_value(&job).unwrap();
        for key in [
            "id",
            "title",
            "company",
            "location",
            "salary",
            "description",
            "employment_type",
            "requirements",
            "employer_id",
            "created_at",
        ] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(json["requirements"][0], "Rust");
    }
}
