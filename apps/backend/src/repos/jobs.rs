//! Job repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::jobs_sea as jobs_adapter;
use crate::adapters::jobs_sea::{JobCreate, JobListingRow};
use crate::domain::{JobStatus, JobWindow};
use crate::entities::jobs;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: i64,
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    pub status: JobStatus,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Job {
    pub fn window(&self) -> JobWindow {
        JobWindow {
            status: self.status,
            is_active: self.is_active,
            expires_at: self.expires_at,
        }
    }
}

/// A job with its employer and category names, when known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobListing {
    #[serde(flatten)]
    pub job: Job,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

impl From<jobs::Model> for Job {
    fn from(model: jobs::Model) -> Self {
        Self {
            id: model.id,
            employer_id: model.employer_id,
            title: model.title,
            description: model.description,
            category_id: model.category_id,
            location: model.location,
            salary_min: model.salary_min,
            salary_max: model.salary_max,
            duration: model.duration,
            requirements: model.requirements,
            contact_phone: model.contact_phone,
            contact_email: model.contact_email,
            expires_at: model.expires_at,
            status: model.status.into(),
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<JobListingRow> for JobListing {
    fn from(row: JobListingRow) -> Self {
        Self {
            job: Job {
                id: row.id,
                employer_id: row.employer_id,
                title: row.title,
                description: row.description,
                category_id: row.category_id,
                location: row.location,
                salary_min: row.salary_min,
                salary_max: row.salary_max,
                duration: row.duration,
                requirements: row.requirements,
                contact_phone: row.contact_phone,
                contact_email: row.contact_email,
                expires_at: row.expires_at,
                status: row.status.into(),
                is_active: row.is_active,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            employer_name: row.employer_name,
            category_name: row.category_name,
        }
    }
}

pub async fn create_job<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: JobCreate,
    now: OffsetDateTime,
) -> Result<Job, DomainError> {
    let job = jobs_adapter::create_job(conn, dto, now).await?;
    Ok(Job::from(job))
}

pub async fn find_job<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Job>, DomainError> {
    let job = jobs_adapter::find_by_id(conn, id).await?;
    Ok(job.map(Job::from))
}

pub async fn find_listing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<JobListing>, DomainError> {
    let row = jobs_adapter::find_listing_by_id(conn, id).await?;
    Ok(row.map(JobListing::from))
}

pub async fn list_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    now: OffsetDateTime,
) -> Result<Vec<JobListing>, DomainError> {
    let rows = jobs_adapter::list_open(conn, now).await?;
    Ok(rows.into_iter().map(JobListing::from).collect())
}
