//! DTOs for applications_sea adapter.

use sea_orm::FromQueryResult;
use time::OffsetDateTime;

use crate::entities::applications::ApplicationStatusDb;

#[derive(Debug, Clone)]
pub struct ApplicationCreate {
    pub job_id: i64,
    pub worker_id: i64,
    pub cover_letter: Option<String>,
}

/// An application as its worker sees it.
#[derive(Debug, Clone, FromQueryResult)]
pub struct WorkerApplicationRow {
    pub id: i64,
    pub job_id: i64,
    pub worker_id: i64,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatusDb,
    pub applied_at: OffsetDateTime,
    pub job_title: String,
    pub location: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub employer_name: String,
}

/// An application as the job's employer sees it.
#[derive(Debug, Clone, FromQueryResult)]
pub struct JobApplicationRow {
    pub id: i64,
    pub job_id: i64,
    pub worker_id: i64,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatusDb,
    pub applied_at: OffsetDateTime,
    pub worker_name: String,
    pub worker_email: String,
    pub worker_phone: Option<String>,
    pub worker_location: Option<String>,
}
