use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::gate::require_role;
use crate::db::txn::with_txn;
use crate::domain::Role;
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::repos::jobs::{Job, JobListing};
use crate::services::{JobDraft, JobService};
use crate::state::app_state::AppState;

/// Body of `POST /api/jobs`. There is no employer field: the owner is
/// always the authenticated caller.
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
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

impl From<CreateJobRequest> for JobDraft {
    fn from(req: CreateJobRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            category_id: req.category_id,
            location: req.location,
            salary_min: req.salary_min,
            salary_max: req.salary_max,
            duration: req.duration,
            requirements: req.requirements,
            contact_phone: req.contact_phone,
            contact_email: req.contact_email,
            expiry_days: req.expiry_days,
        }
    }
}

#[derive(Debug, Serialize)]
struct JobsResponse {
    jobs: Vec<JobListing>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct JobCreatedResponse {
    message: &'static str,
    job: Job,
}

async fn list_open(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let now = OffsetDateTime::now_utc();
    let jobs = with_txn(&app_state, move |txn| {
        Box::pin(async move { JobService::new().open_jobs(txn, now).await })
    })
    .await?;

    let count = jobs.len();
    Ok(HttpResponse::Ok().json(JobsResponse { jobs, count }))
}

async fn get_job(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let job_id = path.into_inner();
    let job = with_txn(&app_state, move |txn| {
        Box::pin(async move { JobService::new().get_job(txn, job_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(job))
}

async fn create_job(
    user: CurrentUser,
    body: ValidatedJson<CreateJobRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    require_role(&user.claims, Role::Employer, "Only employers can post jobs")?;

    let employer_id = user.id();
    let draft = JobDraft::from(body.into_inner());
    let now = OffsetDateTime::now_utc();

    let job = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            JobService::new()
                .create_job(txn, employer_id, draft, now)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(JobCreatedResponse {
        message: "Job created successfully",
        job,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/jobs")
            .route("", web::get().to(list_open))
            .route("", web::post().to(create_job))
            .route("/{id}", web::get().to(get_job)),
    );
}
