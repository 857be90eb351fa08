use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tera::Context;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos;
use crate::repos::projects::ProjectCreate;
use crate::services::projects;
use crate::state::app_state::AppState;
use crate::views::{self, SupplierView};

use super::see_other;

#[derive(Debug, Deserialize)]
struct ProjectForm {
    project_name: String,
    manufacturer_id: i64,
    scope1_emission: f64,
    scope2_emission: f64,
    scope3_emission: f64,
}

#[derive(Debug, Deserialize)]
struct UpdateProjectForm {
    name: String,
    manufacturer_id: i64,
}

async fn add_project_form(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    // manufacturer dropdown
    let manufacturers = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(repos::manufacturers::list_all(txn).await?) })
    })
    .await?;

    let mut ctx = Context::new();
    ctx.insert("manufacturers", &manufacturers);
    views::render(state.templates(), "add_project.html.tera", &ctx)
}

/// POST /add_project
async fn add_project(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<ProjectForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let dto = ProjectCreate {
        name: form.project_name,
        manufacturer_id: form.manufacturer_id,
        scope1_emission: form.scope1_emission,
        scope2_emission: form.scope2_emission,
        scope3_emission: form.scope3_emission,
    };

    with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { projects::create(txn, dto).await })
    })
    .await?;

    Ok(see_other("/"))
}

/// GET /view_project/{id}
async fn view_project(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let detail = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { projects::fetch_detail(txn, id).await })
    })
    .await?;

    let suppliers: Vec<SupplierView> = detail
        .suppliers
        .into_iter()
        .map(SupplierView::from)
        .collect();

    let mut ctx = Context::new();
    ctx.insert("project", &detail.project);
    ctx.insert("manufacturer", &detail.manufacturer);
    ctx.insert("suppliers", &suppliers);
    views::render(state.templates(), "view_project.html.tera", &ctx)
}

async fn update_project_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let (project, manufacturers) = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move {
            let project = projects::fetch(txn, id).await?;
            let manufacturers = repos::manufacturers::list_all(txn).await?;
            Ok((project, manufacturers))
        })
    })
    .await?;

    let mut ctx = Context::new();
    ctx.insert("project", &project);
    ctx.insert("manufacturers", &manufacturers);
    views::render(state.templates(), "update_project.html.tera", &ctx)
}

/// POST /update_project/{id}
async fn update_project(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<UpdateProjectForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let form = form.into_inner();

    with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { projects::rename(txn, id, form.name, form.manufacturer_id).await })
    })
    .await?;

    Ok(see_other(&format!("/view_project/{id}")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/add_project", web::get().to(add_project_form))
        .route("/add_project", web::post().to(add_project))
        .route("/view_project/{id}", web::get().to(view_project))
        .route("/update_project/{id}", web::get().to(update_project_form))
        .route("/update_project/{id}", web::post().to(update_project));
}
