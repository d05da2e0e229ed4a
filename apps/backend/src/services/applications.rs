//! Application lifecycle: apply, the two listings, and the employer's
//! one-time accept/reject decision.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::info;

use crate::adapters::applications_sea::ApplicationCreate;
use crate::domain::applications::{decide, finalized};
use crate::domain::{Decision, Role};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ForbiddenKind, NotFoundKind, ValidationKind};
use crate::logging::security;
use crate::repos::applications::{
    self as applications_repo, Application, JobApplicationView, WorkerApplicationView,
};
use crate::repos::jobs::{self as jobs_repo, Job};
use crate::repos::users as users_repo;
use crate::services::jobs::{Eligibility, JobService};

pub struct ApplicationService {
    jobs: JobService,
}

impl ApplicationService {
    pub fn new() -> Self {
        Self {
            jobs: JobService::new(),
        }
    }

    /// Preconditions run in order and stop at the first failure: the worker
    /// account, then job eligibility, then the (job, worker) unique index.
    pub async fn apply<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        job_id: i64,
        worker_id: i64,
        cover_letter: Option<String>,
        now: OffsetDateTime,
    ) -> Result<Application, AppError> {
        match users_repo::find_role(conn, worker_id).await? {
            None => {
                return Err(
                    DomainError::validation(ValidationKind::InvalidWorker, "Invalid worker ID")
                        .into(),
                )
            }
            Some(Role::Employer) => {
                return Err(DomainError::forbidden(
                    ForbiddenKind::Role,
                    "Only workers can apply to jobs",
                )
                .into())
            }
            Some(Role::Worker) => {}
        }

        if let Eligibility::Ineligible(reason) = self
            .jobs
            .check_eligible_for_application(conn, job_id, now)
            .await?
        {
            return Err(DomainError::from(reason).into());
        }

        let cover_letter = cover_letter
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let application = applications_repo::create_application(
            conn,
            ApplicationCreate {
                job_id,
                worker_id,
                cover_letter,
            },
            now,
        )
        .await?;

        info!(application_id = application.id, job_id, worker_id, "application submitted");
        Ok(application)
    }

    /// A worker's own applications, newest first.
    pub async fn list_for_worker<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        caller_id: i64,
        worker_id: i64,
    ) -> Result<Vec<WorkerApplicationView>, AppError> {
        if caller_id != worker_id {
            security::access_denied(caller_id, "applicant", "listing another worker's applications");
            return Err(DomainError::forbidden(
                ForbiddenKind::NotApplicant,
                "You can only view your own applications",
            )
            .into());
        }
        Ok(applications_repo::list_for_worker(conn, worker_id).await?)
    }

    /// Applications to a job the caller owns, newest first.
    pub async fn list_for_job<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        caller_id: i64,
        job_id: i64,
    ) -> Result<Vec<JobApplicationView>, AppError> {
        let job = jobs_repo::find_job(conn, job_id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Job, "Job not found"))?;
        ensure_job_owner(&job, caller_id)?;

        Ok(applications_repo::list_for_job(conn, job_id).await?)
    }

    /// Move a pending application to accepted or rejected.
    ///
    /// Terminal states are final: deciding again, even to the same value,
    /// is `APPLICATION_FINALIZED`. The write is conditional on the row still
    /// being pending, so of two concurrent decisions only one lands.
    pub async fn update_status<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        caller_id: i64,
        application_id: i64,
        decision: Decision,
        now: OffsetDateTime,
    ) -> Result<Application, AppError> {
        let application = find_application(conn, application_id).await?;

        let job = jobs_repo::find_job(conn, application.job_id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Job, "Job not found"))?;
        ensure_job_owner(&job, caller_id)?;

        let target = decide(application.status, decision)?;

        if !applications_repo::decide_if_pending(conn, application_id, target, now).await? {
            let current = find_application(conn, application_id).await?;
            return Err(finalized(current.status).into());
        }

        let updated = find_application(conn, application_id).await?;
        info!(
            application_id,
            job_id = job.id,
            status = updated.status.as_str(),
            "application decided"
        );
        Ok(updated)
    }
}

impl Default for ApplicationService {
    fn default() -> Self {
        Self::new()
    }
}

async fn find_application<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    application_id: i64,
) -> Result<Application, DomainError> {
    applications_repo::find_application(conn, application_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Application, "Application not found"))
}

fn ensure_job_owner(job: &Job, caller_id: i64) -> Result<(), DomainError> {
    if job.employer_id != caller_id {
        security::access_denied(caller_id, "job_owner", "caller does not own the job");
        return Err(DomainError::forbidden(
            ForbiddenKind::NotJobOwner,
            "You can only manage applications for your own jobs",
        ));
    }
    Ok(())
}
