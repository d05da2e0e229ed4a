use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::categories::{self as categories_repo, Category};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    categories: Vec<Category>,
}

async fn list(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(categories_repo::list_categories(txn).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(CategoriesResponse { categories }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/categories", web::get().to(list));
}
