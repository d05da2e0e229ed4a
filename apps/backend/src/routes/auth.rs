use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::domain::Role;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::users::User;
use crate::services::{Registration, UserService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub user_type: Role,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
struct RegisterResponse {
    message: &'static str,
    user: User,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    message: &'static str,
    token: String,
    user: User,
}

async fn register(
    body: ValidatedJson<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let account = UserService::new()
        .prepare_registration(
            Registration {
                email: body.email,
                password: body.password,
                full_name: body.full_name,
                role: body.user_type,
                phone: body.phone,
                location: body.location,
            },
            &app_state.security,
        )
        .await?;

    let now = OffsetDateTime::now_utc();
    let user = with_txn(&app_state, move |txn| {
        Box::pin(async move { UserService::new().register(txn, account, now).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully",
        user,
    }))
}

async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { email, password } = body.into_inner();

    // Only the lookup holds a connection; bcrypt runs after it is released.
    let lookup = email.clone();
    let found = with_txn(&app_state, move |txn| {
        Box::pin(async move { UserService::new().find_credentials(txn, &lookup).await })
    })
    .await?;

    let (token, user) = UserService::new()
        .authenticate(&email, &password, found, &app_state.security, SystemTime::now())
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful",
        token,
        user,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login));
}
