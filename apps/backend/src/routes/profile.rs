use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::adapters::users_sea::ProfileUpdate;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::repos::users::User;
use crate::services::UserService;
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProfileUpdatedResponse {
    message: &'static str,
    profile: User,
}

async fn get_profile(
    _user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let profile = with_txn(&app_state, move |txn| {
        Box::pin(async move { UserService::new().get_profile(txn, user_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(profile))
}

async fn update_profile(
    user: CurrentUser,
    path: web::Path<i64>,
    body: ValidatedJson<UpdateProfileRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let caller_id = user.id();
    let user_id = path.into_inner();
    let req = body.into_inner();
    let changes = ProfileUpdate {
        full_name: req.full_name,
        phone: req.phone,
        location: req.location,
        bio: req.bio,
    };
    let now = OffsetDateTime::now_utc();

    let profile = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            UserService::new()
                .update_profile(txn, caller_id, user_id, changes, now)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ProfileUpdatedResponse {
        message: "Profile updated successfully",
        profile,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .route("/{id}", web::get().to(get_profile))
            .route("/{id}", web::put().to(update_profile)),
    );
}
