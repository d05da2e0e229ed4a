use std::future::{ready, Ready};
use std::time::SystemTime;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use tracing::Span;

use crate::auth::jwt::{verify_access_token, Claims};
use crate::domain::Role;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Verified identity of the caller, taken from `Authorization: Bearer <token>`.
///
/// Extraction fails with 401 before the handler body runs, so any handler
/// that takes a `CurrentUser` is protected.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub claims: Claims,
}

impl CurrentUser {
    pub fn id(&self) -> i64 {
        self.claims.user_id
    }

    pub fn role(&self) -> Role {
        self.claims.role
    }
}

/// The token part of a well-formed Bearer header.
fn bearer_token(req: &HttpRequest) -> Result<&str, AppError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(AppError::unauthorized_missing_bearer)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => Ok(token),
        _ => Err(AppError::unauthorized_missing_bearer()),
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<CurrentUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not configured"))?;
    let token = bearer_token(req)?;
    let claims = verify_access_token(token, SystemTime::now(), &state.security)?;
    Span::current().record("user_id", claims.user_id);
    Ok(CurrentUser { claims })
}
