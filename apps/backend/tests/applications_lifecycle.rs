mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::db::txn::with_txn;
use backend::errors::ErrorCode;
use backend::services::ApplicationService;
use backend_test_support::problem_details::{assert_problem, assert_problem_detail};
use serde_json::json;
use support::factory::{job_draft, seed_employer, seed_job, seed_job_at, seed_worker};
use support::{build_test_state, create_test_app};
use time::{Duration, OffsetDateTime};

#[actix_web::test]
async fn test_apply_review_and_finalize() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let employer = seed_employer(&state).await?;
    let worker = seed_worker(&state).await?;
    let job = seed_job(&state, employer.id()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // Apply
    let req = test::TestRequest::post()
        .uri("/api/applications")
        .insert_header(common::bearer(&worker.token))
        .set_json(json!({ "job_id": job.id, "cover_letter": "  I have a van.  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = common::json_body(resp).await;
    let application = &body["application"];
    assert_eq!(application["status"], "pending");
    assert_eq!(application["worker_id"], worker.id());
    assert_eq!(application["job_id"], job.id);
    assert_eq!(application["cover_letter"], "I have a van.");
    let application_id = application["id"].as_i64().expect("application id");
    let applied_at = application["applied_at"].clone();

    // Apply again: the (job, worker) pair is unique
    let req = test::TestRequest::post()
        .uri("/api/applications")
        .insert_header(common::bearer(&worker.token))
        .set_json(json!({ "job_id": job.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_detail(
        resp,
        StatusCode::CONFLICT,
        "DUPLICATE_APPLICATION",
        "You have already applied to this job",
    )
    .await;

    // Employer sees exactly one applicant
    let req = test::TestRequest::get()
        .uri(&format!("/api/applications/job/{}", job.id))
        .insert_header(common::bearer(&employer.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::json_body(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["applications"][0]["worker_name"], worker.user.full_name.as_str());
    assert_eq!(body["applications"][0]["worker_email"], worker.user.email.as_str());
    assert!(body["applications"][0].get("worker_phone").is_none());

    // Accept
    let req = test::TestRequest::put()
        .uri(&format!("/api/applications/{application_id}"))
        .insert_header(common::bearer(&employer.token))
        .set_json(json!({ "status": "accepted" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::json_body(resp).await;
    assert_eq!(body["application"]["status"], "accepted");

    // Worker's listing reflects the decision; applied_at is untouched
    let req = test::TestRequest::get()
        .uri(&format!("/api/applications/worker/{}", worker.id()))
        .insert_header(common::bearer(&worker.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::json_body(resp).await;
    assert_eq!(body["count"], 1);
    let listed = &body["applications"][0];
    assert_eq!(listed["id"], application_id);
    assert_eq!(listed["status"], "accepted");
    assert_eq!(listed["applied_at"], applied_at);
    assert_eq!(listed["job_title"], job.title.as_str());
    assert_eq!(listed["employer_name"], employer.user.full_name.as_str());

    // Terminal: any further decision conflicts, including a repeat
    for status in ["rejected", "accepted"] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/applications/{application_id}"))
            .insert_header(common::bearer(&employer.token))
            .set_json(json!({ "status": status }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem(resp, StatusCode::CONFLICT, "APPLICATION_FINALIZED").await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_ownership_is_enforced() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let owner = seed_employer(&state).await?;
    let other_employer = seed_employer(&state).await?;
    let worker = seed_worker(&state).await?;
    let other_worker = seed_worker(&state).await?;
    let job = seed_job(&state, owner.id()).await?;

    let now = OffsetDateTime::now_utc();
    let (job_id, worker_id) = (job.id, worker.id());
    let application = with_txn(&state, move |txn| {
        Box::pin(async move {
            ApplicationService::new()
                .apply(txn, job_id, worker_id, None, now)
                .await
        })
    })
    .await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // Another worker's applications
    let req = test::TestRequest::get()
        .uri(&format!("/api/applications/worker/{}", worker.id()))
        .insert_header(common::bearer(&other_worker.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::FORBIDDEN, "NOT_APPLICANT").await;

    // Another employer's job
    let req = test::TestRequest::get()
        .uri(&format!("/api/applications/job/{}", job.id))
        .insert_header(common::bearer(&other_employer.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::FORBIDDEN, "NOT_JOB_OWNER").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/applications/{}", application.id))
        .insert_header(common::bearer(&other_employer.token))
        .set_json(json!({ "status": "rejected" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::FORBIDDEN, "NOT_JOB_OWNER").await;

    // Role gates
    let req = test::TestRequest::post()
        .uri("/api/applications")
        .insert_header(common::bearer(&owner.token))
        .set_json(json!({ "job_id": job.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_detail(
        resp,
        StatusCode::FORBIDDEN,
        "FORBIDDEN_ROLE",
        "Only workers can apply to jobs",
    )
    .await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/applications/{}", application.id))
        .insert_header(common::bearer(&worker.token))
        .set_json(json!({ "status": "accepted" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::FORBIDDEN, "FORBIDDEN_ROLE").await;

    // The owner still sees the application as pending
    let req = test::TestRequest::get()
        .uri(&format!("/api/applications/job/{}", job.id))
        .insert_header(common::bearer(&owner.token))
        .to_request();
    let body = common::json_body(test::call_service(&app, req).await).await;
    assert_eq!(body["applications"][0]["status"], "pending");
    Ok(())
}

#[actix_web::test]
async fn test_update_status_input_errors() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let employer = seed_employer(&state).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::put()
        .uri("/api/applications/1")
        .insert_header(common::bearer(&employer.token))
        .set_json(json!({ "status": "pending" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "INVALID_STATUS").await;

    let req = test::TestRequest::put()
        .uri("/api/applications/9999")
        .insert_header(common::bearer(&employer.token))
        .set_json(json!({ "status": "accepted" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_detail(
        resp,
        StatusCode::NOT_FOUND,
        "APPLICATION_NOT_FOUND",
        "Application not found",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn test_apply_to_missing_job() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let worker = seed_worker(&state).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/applications")
        .insert_header(common::bearer(&worker.token))
        .set_json(json!({ "job_id": 9999 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_detail(resp, StatusCode::NOT_FOUND, "JOB_NOT_FOUND", "Job not found").await;
    Ok(())
}

#[tokio::test]
async fn test_apply_after_expiry_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let employer = seed_employer(&state).await?;
    let worker = seed_worker(&state).await?;
    let now = OffsetDateTime::now_utc();
    let job = seed_job_at(&state, employer.id(), job_draft(1), now).await?;

    let (job_id, worker_id) = (job.id, worker.id());
    let later = now + Duration::days(2);
    let err = with_txn(&state, move |txn| {
        Box::pin(async move {
            ApplicationService::new()
                .apply(txn, job_id, worker_id, None, later)
                .await
        })
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::JobExpired);
    assert_eq!(err.detail(), "This job has expired");
    assert_eq!(err.status().as_u16(), 400);

    // Nothing was written
    let listed = with_txn(&state, move |txn| {
        Box::pin(async move {
            ApplicationService::new()
                .list_for_worker(txn, worker_id, worker_id)
                .await
        })
    })
    .await?;
    assert!(listed.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_apply_with_unknown_worker_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let employer = seed_employer(&state).await?;
    let job = seed_job(&state, employer.id()).await?;
    let (job_id, now) = (job.id, OffsetDateTime::now_utc());

    let err = with_txn(&state, move |txn| {
        Box::pin(async move {
            ApplicationService::new()
                .apply(txn, job_id, 424_242, None, now)
                .await
        })
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidWorker);
    assert_eq!(err.status().as_u16(), 400);
    Ok(())
}
