use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tera::Context;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::projects;
use crate::state::app_state::AppState;
use crate::views;

use super::see_other;

#[derive(Debug, Deserialize)]
struct EsgForm {
    scope1: f64,
    scope2: f64,
    scope3: f64,
}

async fn upload_esg_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let project = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { projects::fetch(txn, id).await })
    })
    .await?;

    let mut ctx = Context::new();
    ctx.insert("project", &project);
    views::render(state.templates(), "upload_esg.html.tera", &ctx)
}

/// POST /upload_esg/{id}
async fn upload_esg(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<EsgForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let form = form.into_inner();

    with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move {
            projects::record_emissions(txn, id, form.scope1, form.scope2, form.scope3).await
        })
    })
    .await?;

    Ok(see_other(&format!("/view_project/{id}")))
}

/// GET /view_esg/{id}
async fn view_esg(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let project = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { projects::fetch(txn, id).await })
    })
    .await?;

    let mut ctx = Context::new();
    ctx.insert("project", &project);
    views::render(state.templates(), "view_esg.html.tera", &ctx)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/upload_esg/{id}", web::get().to(upload_esg_form))
        .route("/upload_esg/{id}", web::post().to(upload_esg))
        .route("/view_esg/{id}", web::get().to(view_esg));
}
