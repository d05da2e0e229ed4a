mod common;
mod support;

use std::time::{Duration, Instant};

use actix_web::http::StatusCode;
use actix_web::test;
use backend::db::txn::with_txn;
use backend::{build_state, DbProfile};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::json;
use support::create_test_app;
use support::factory::{seed_worker, TEST_PASSWORD};
use support::test_state::test_security;

/// Production-like work factor; verifying takes long enough that holding the
/// only pooled connection across it would stall every other request.
const SLOW_BCRYPT_COST: u32 = 12;

#[actix_web::test]
async fn test_password_check_leaves_connection_free() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state()
        .with_security(test_security().with_bcrypt_cost(SLOW_BCRYPT_COST))
        .with_db(DbProfile::sqlite_memory())
        .build()
        .await?;
    let worker = seed_worker(&state).await?;
    let app = create_test_app(state.clone())
        .with_prod_routes()
        .build()
        .await?;

    let started = Instant::now();
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": worker.user.email, "password": TEST_PASSWORD }))
        .to_request();

    let login = async {
        let resp = test::call_service(&app, req).await;
        (resp.status(), started.elapsed())
    };
    let other = async {
        // Let the login reach its password check first.
        tokio::time::sleep(Duration::from_millis(30)).await;
        let res = with_txn(&state, |txn| {
            Box::pin(async move {
                txn.execute(Statement::from_string(
                    txn.get_database_backend(),
                    "SELECT 1",
                ))
                .await?;
                Ok(())
            })
        })
        .await;
        (res, started.elapsed())
    };

    let ((status, login_done), (res, other_done)) = tokio::join!(login, other);

    assert_eq!(status, StatusCode::OK);
    res?;
    assert!(
        other_done < login_done,
        "unrelated transaction finished at {other_done:?}, after login at {login_done:?}"
    );
    Ok(())
}
