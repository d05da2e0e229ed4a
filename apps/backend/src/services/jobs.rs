//! Job lifecycle: creation by employers, browsing, lookup and the
//! eligibility check used before an application is accepted.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::info;

use crate::adapters::jobs_sea::JobCreate;
use crate::domain::jobs::{eligibility, expiry_from, validate_salary_range};
use crate::domain::{Ineligibility, Role};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ForbiddenKind, NotFoundKind, ValidationKind};
use crate::repos::jobs::{self as jobs_repo, Job, JobListing};
use crate::repos::{categories as categories_repo, users as users_repo};

/// Employer-supplied fields for a new job.
#[derive(Debug, Clone, Default)]
pub struct JobDraft {
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
    pub expiry_days: i64,
}

/// Outcome of the application-eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible(Ineligibility),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    pub fn reason(&self) -> Option<Ineligibility> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::Ineligible(reason) => Some(*reason),
        }
    }
}

fn required(value: String, field: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingField,
            format!("{field} is required"),
        ));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub struct JobService;

impl JobService {
    pub fn new() -> Self {
        Self
    }

    /// Create an open, active job owned by `employer_id`, expiring
    /// `draft.expiry_days` days after `now`.
    ///
    /// The employer account is re-read from storage: a claim for an id that
    /// no longer exists is unauthenticated, and a claim whose stored role is
    /// not employer is forbidden.
    pub async fn create_job<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        employer_id: i64,
        draft: JobDraft,
        now: OffsetDateTime,
    ) -> Result<Job, AppError> {
        match users_repo::find_role(conn, employer_id).await? {
            None => {
                return Err(DomainError::unauthenticated("Employer account not found").into())
            }
            Some(Role::Worker) => {
                return Err(DomainError::forbidden(
                    ForbiddenKind::Role,
                    "Only employers can post jobs",
                )
                .into())
            }
            Some(Role::Employer) => {}
        }

        let title = required(draft.title, "title")?;
        let description = required(draft.description, "description")?;
        let location = required(draft.location, "location")?;
        validate_salary_range(draft.salary_min, draft.salary_max)?;
        let expires_at = expiry_from(now, draft.expiry_days)?;

        if let Some(category_id) = draft.category_id {
            if !categories_repo::category_exists(conn, category_id).await? {
                return Err(DomainError::validation(
                    ValidationKind::InvalidCategory,
                    format!("Unknown category {category_id}"),
                )
                .into());
            }
        }

        let job = jobs_repo::create_job(
            conn,
            JobCreate {
                employer_id,
                title,
                description,
                category_id: draft.category_id,
                location,
                salary_min: draft.salary_min,
                salary_max: draft.salary_max,
                duration: optional(draft.duration),
                requirements: optional(draft.requirements),
                contact_phone: optional(draft.contact_phone),
                contact_email: optional(draft.contact_email),
                expires_at,
            },
            now,
        )
        .await?;

        info!(job_id = job.id, employer_id, expires_at = %job.expires_at, "job created");
        Ok(job)
    }

    /// Jobs accepting applications at `now`, newest first.
    pub async fn open_jobs<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        now: OffsetDateTime,
    ) -> Result<Vec<JobListing>, AppError> {
        Ok(jobs_repo::list_open(conn, now).await?)
    }

    /// Any job by id, whatever its status or expiry.
    pub async fn get_job<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        job_id: i64,
    ) -> Result<JobListing, AppError> {
        jobs_repo::find_listing(conn, job_id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Job, "Job not found").into())
    }

    pub async fn check_eligible_for_application<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        job_id: i64,
        now: OffsetDateTime,
    ) -> Result<Eligibility, AppError> {
        let job = jobs_repo::find_job(conn, job_id).await?;
        let window = job.as_ref().map(Job::window);
        Ok(match eligibility(window.as_ref(), now) {
            Ok(()) => Eligibility::Eligible,
            Err(reason) => Eligibility::Ineligible(reason),
        })
    }
}

impl Default for JobService {
    fn default() -> Self {
        Self::new()
    }
}
