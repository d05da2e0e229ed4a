//! DTOs for jobs_sea adapter.

use sea_orm::FromQueryResult;
use time::OffsetDateTime;

use crate::entities::jobs::JobStatusDb;

/// DTO for inserting a job. Status and active flag take their initial
/// values in the adapter.
#[derive(Debug, Clone)]
pub struct JobCreate {
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub category_id: Option<i64>,
    pub location: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub duration: Option<String>,
    pub requirements: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub expires_at: OffsetDateTime,
}

/// A job joined with its employer's name and its category's name.
#[derive(Debug, Clone, FromQueryResult)]
pub struct JobListingRow {
    pub id: i64,
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub category_id: Option<i64>,
    pub location: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub duration: Option<String>,
    pub requirements: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub expires_at: OffsetDateTime,
    pub status: JobStatusDb,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub employer_name: Option<String>,
    pub category_name: Option<String>,
}
