mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use serde_json::json;
use support::factory::{seed_employer, seed_worker};
use support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_get_and_update_own_profile() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let worker = seed_worker(&state).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let uri = format!("/api/profile/{}", worker.id());

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header(common::bearer(&worker.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::json_body(resp).await;
    assert_eq!(body["id"], worker.id());
    assert_eq!(body["user_type"], "worker");
    assert!(body.get("bio").is_none());

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(common::bearer(&worker.token))
        .set_json(json!({ "bio": "Forklift certified", "phone": "+234 800 000 0000", "full_name": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::json_body(resp).await;
    assert_eq!(body["message"], "Profile updated successfully");
    let profile = &body["profile"];
    assert_eq!(profile["bio"], "Forklift certified");
    assert_eq!(profile["phone"], "+234 800 000 0000");
    // Blank fields leave the stored value alone
    assert_eq!(profile["full_name"], worker.user.full_name.as_str());
    Ok(())
}

#[actix_web::test]
async fn test_profile_access_rules() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let worker = seed_worker(&state).await?;
    let employer = seed_employer(&state).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // Any authenticated caller may read a profile
    let req = test::TestRequest::get()
        .uri(&format!("/api/profile/{}", worker.id()))
        .insert_header(common::bearer(&employer.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Only the owner may change it
    let req = test::TestRequest::put()
        .uri(&format!("/api/profile/{}", worker.id()))
        .insert_header(common::bearer(&employer.token))
        .set_json(json!({ "bio": "hijacked" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::FORBIDDEN, "NOT_PROFILE_OWNER").await;

    let req = test::TestRequest::get()
        .uri("/api/profile/9999")
        .insert_header(common::bearer(&worker.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::NOT_FOUND, "USER_NOT_FOUND").await;
    Ok(())
}
