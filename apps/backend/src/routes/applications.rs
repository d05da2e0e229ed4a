use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::gate::require_role;
use crate::db::txn::with_txn;
use crate::domain::{Decision, Role};
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::repos::applications::Application;
use crate::services::ApplicationService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub job_id: i64,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
struct ApplicationResponse {
    message: &'static str,
    application: Application,
}

#[derive(Debug, Serialize)]
struct ApplicationsResponse<T: Serialize> {
    applications: Vec<T>,
    count: usize,
}

impl<T: Serialize> ApplicationsResponse<T> {
    fn new(applications: Vec<T>) -> Self {
        let count = applications.len();
        Self {
            applications,
            count,
        }
    }
}

async fn apply(
    user: CurrentUser,
    body: ValidatedJson<ApplyRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    require_role(&user.claims, Role::Worker, "Only workers can apply to jobs")?;

    let worker_id = user.id();
    let ApplyRequest {
        job_id,
        cover_letter,
    } = body.into_inner();
    let now = OffsetDateTime::now_utc();

    let application = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ApplicationService::new()
                .apply(txn, job_id, worker_id, cover_letter, now)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(ApplicationResponse {
        message: "Application submitted successfully",
        application,
    }))
}

async fn list_for_worker(
    user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    require_role(&user.claims, Role::Worker, "Only workers can view their applications")?;

    let caller_id = user.id();
    let worker_id = path.into_inner();
    let applications = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ApplicationService::new()
                .list_for_worker(txn, caller_id, worker_id)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ApplicationsResponse::new(applications)))
}

async fn list_for_job(
    user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    require_role(
        &user.claims,
        Role::Employer,
        "Only employers can view applications for a job",
    )?;

    let caller_id = user.id();
    let job_id = path.into_inner();
    let applications = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ApplicationService::new()
                .list_for_job(txn, caller_id, job_id)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ApplicationsResponse::new(applications)))
}

async fn update_status(
    user: CurrentUser,
    path: web::Path<i64>,
    body: ValidatedJson<UpdateStatusRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    require_role(
        &user.claims,
        Role::Employer,
        "Only employers can update application status",
    )?;

    let decision: Decision = body.status.parse()?;
    let caller_id = user.id();
    let application_id = path.into_inner();
    let now = OffsetDateTime::now_utc();

    let application = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ApplicationService::new()
                .update_status(txn, caller_id, application_id, decision, now)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ApplicationResponse {
        message: "Application status updated successfully",
        application,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/applications")
            .route("", web::post().to(apply))
            .route("/worker/{worker_id}", web::get().to(list_for_worker))
            .route("/job/{job_id}", web::get().to(list_for_job))
            .route("/{id}", web::put().to(update_status)),
    );
}
