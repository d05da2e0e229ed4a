mod common;
mod support;

use actix_web::test;
use backend::infra::state::build_state;
use support::test_state::test_security;
use support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_health_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.headers().contains_key("x-trace-id"));

    let body = common::json_body(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body["migrations"].as_str().is_some());
    Ok(())
}

#[actix_web::test]
async fn test_health_without_database_is_still_ok() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_security(test_security()).build().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body = common::json_body(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "unavailable");
    assert!(body.get("migrations").is_none());
    Ok(())
}
