//! Application repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::applications_sea as applications_adapter;
use crate::adapters::applications_sea::{
    ApplicationCreate, JobApplicationRow, WorkerApplicationRow,
};
use crate::domain::ApplicationStatus;
use crate::entities::applications;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub worker_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub applied_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Worker-side listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerApplicationView {
    pub id: i64,
    pub job_id: i64,
    pub worker_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub applied_at: OffsetDateTime,
    pub job_title: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
    pub employer_name: String,
}

/// Employer-side listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobApplicationView {
    pub id: i64,
    pub job_id: i64,
    pub worker_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub applied_at: OffsetDateTime,
    pub worker_name: String,
    pub worker_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_location: Option<String>,
}

impl From<applications::Model> for Application {
    fn from(model: applications::Model) -> Self {
        Self {
            id: model.id,
            job_id: model.job_id,
            worker_id: model.worker_id,
            cover_letter: model.cover_letter,
            status: model.status.into(),
            applied_at: model.applied_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<WorkerApplicationRow> for WorkerApplicationView {
    fn from(row: WorkerApplicationRow) -> Self {
        Self {
            id: row.id,
            job_id: row.job_id,
            worker_id: row.worker_id,
            cover_letter: row.cover_letter,
            status: row.status.into(),
            applied_at: row.applied_at,
            job_title: row.job_title,
            location: row.location,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
            employer_name: row.employer_name,
        }
    }
}

impl From<JobApplicationRow> for JobApplicationView {
    fn from(row: JobApplicationRow) -> Self {
        Self {
            id: row.id,
            job_id: row.job_id,
            worker_id: row.worker_id,
            cover_letter: row.cover_letter,
            status: row.status.into(),
            applied_at: row.applied_at,
            worker_name: row.worker_name,
            worker_email: row.worker_email,
            worker_phone: row.worker_phone,
            worker_location: row.worker_location,
        }
    }
}

/// Duplicate (job, worker) pairs come back as `Conflict(DuplicateApplication)`
/// through the unique-constraint classification.
pub async fn create_application<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ApplicationCreate,
    now: OffsetDateTime,
) -> Result<Application, DomainError> {
    let application = applications_adapter::insert_application(conn, dto, now).await?;
    Ok(Application::from(application))
}

pub async fn find_application<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Application>, DomainError> {
    let application = applications_adapter::find_by_id(conn, id).await?;
    Ok(application.map(Application::from))
}

/// `false` when the application had already left `pending`.
pub async fn decide_if_pending<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    status: ApplicationStatus,
    now: OffsetDateTime,
) -> Result<bool, DomainError> {
    let rows = applications_adapter::decide_if_pending(conn, id, status.into(), now).await?;
    Ok(rows > 0)
}

pub async fn list_for_worker<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    worker_id: i64,
) -> Result<Vec<WorkerApplicationView>, DomainError> {
    let rows = applications_adapter::list_for_worker(conn, worker_id).await?;
    Ok(rows.into_iter().map(WorkerApplicationView::from).collect())
}

pub async fn list_for_job<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    job_id: i64,
) -> Result<Vec<JobApplicationView>, DomainError> {
    let rows = applications_adapter::list_for_job(conn, job_id).await?;
    Ok(rows.into_iter().map(JobApplicationView::from).collect())
}
