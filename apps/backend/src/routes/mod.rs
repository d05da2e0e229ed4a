use actix_web::{error, web};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod applications;
pub mod auth;
pub mod categories;
pub mod health;
pub mod jobs;
pub mod profile;

/// Register every route. Shared by `main` and the integration tests so
/// both serve the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::bad_request(
            ErrorCode::BadRequest,
            format!("Invalid path parameter: {err}"),
        ))
    }));

    // Health check routes: /health
    cfg.configure(health::configure_routes);

    cfg.service(
        web::scope("/api")
            .configure(auth::configure_routes)
            .configure(categories::configure_routes)
            .configure(jobs::configure_routes)
            .configure(applications::configure_routes)
            .configure(profile::configure_routes),
    );
}
