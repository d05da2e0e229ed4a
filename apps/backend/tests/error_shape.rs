mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend::errors::ErrorCode;
use backend::infra::state::build_state;
use backend::AppError;
use backend_test_support::problem_details::assert_problem_detail;
use support::test_state::test_security;
use support::{build_test_state, create_test_app};

async fn failing_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(ErrorCode::ValidationError, "Example failure"))
}

#[actix_web::test]
async fn test_error_shape() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/error", web::get().to(failing_handler));
        })
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem_detail(
        resp,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        "Example failure",
    )
    .await;
    assert_eq!(problem.title, "Validation Error");
    assert!(!problem.trace_id.is_empty());
    assert_ne!(problem.trace_id, "unknown");
    Ok(())
}

#[actix_web::test]
async fn test_each_request_gets_its_own_trace_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let mut seen = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        let trace = resp
            .headers()
            .get("x-trace-id")
            .and_then(|v| v.to_str().ok())
            .expect("x-trace-id header")
            .to_string();
        seen.push(trace);
    }
    assert_ne!(seen[0], seen[1]);
    Ok(())
}

#[actix_web::test]
async fn test_missing_database_is_service_unavailable() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_security(test_security()).build().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/jobs").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_detail(
        resp,
        StatusCode::SERVICE_UNAVAILABLE,
        "DB_UNAVAILABLE",
        "Database unavailable",
    )
    .await;
    Ok(())
}
