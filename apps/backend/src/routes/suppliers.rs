use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tera::Context;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::suppliers::SupplierUpdate;
use crate::services::suppliers;
use crate::state::app_state::AppState;
use crate::views::{self, SupplierView};

use super::see_other;

/// Add form. `risk_rating` stays a string so an empty or malformed value
/// surfaces as an inline form error rather than an extraction failure.
#[derive(Debug, Deserialize)]
struct SupplierForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    contact_info: String,
    #[serde(default)]
    risk_rating: String,
}

/// Edit form. The rating is typed here: edits overwrite without re-validating.
#[derive(Debug, Deserialize)]
struct EditSupplierForm {
    name: String,
    address: String,
    contact_info: String,
    risk_rating: i32,
}

async fn add_supplier_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    views::render(state.templates(), "add_supplier.html.tera", &Context::new())
}

/// POST /add_supplier
async fn add_supplier(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<SupplierForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let risk_rating = form.risk_rating.trim().parse::<i32>().ok();

    match suppliers::parse_new(&form.name, &form.address, &form.contact_info, risk_rating) {
        Ok(dto) => {
            with_txn(Some(&req), &state, move |txn| {
                Box::pin(async move { suppliers::create(txn, dto).await })
            })
            .await?;
            Ok(see_other("/"))
        }
        Err(rejection) => {
            let mut ctx = Context::new();
            ctx.insert("error", rejection.message());
            ctx.insert("name", &form.name);
            ctx.insert("address", &form.address);
            ctx.insert("contact_info", &form.contact_info);
            ctx.insert("risk_rating", &form.risk_rating);
            views::render(state.templates(), "add_supplier.html.tera", &ctx)
        }
    }
}

async fn edit_supplier_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let supplier = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { suppliers::fetch(txn, id).await })
    })
    .await?;

    let mut ctx = Context::new();
    ctx.insert("supplier", &SupplierView::from(supplier));
    views::render(state.templates(), "edit_supplier.html.tera", &ctx)
}

/// POST /edit_supplier/{id}
async fn edit_supplier(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<EditSupplierForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let form = form.into_inner();
    let dto = SupplierUpdate {
        name: form.name,
        address: form.address,
        contact_info: form.contact_info,
        risk_rating: form.risk_rating,
    };

    with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { suppliers::update(txn, id, dto).await })
    })
    .await?;

    Ok(see_other("/"))
}

/// POST /delete_supplier/{id}
async fn delete_supplier(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { suppliers::delete(txn, id).await })
    })
    .await?;

    Ok(see_other("/"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/add_supplier", web::get().to(add_supplier_form))
        .route("/add_supplier", web::post().to(add_supplier))
        .route("/edit_supplier/{id}", web::get().to(edit_supplier_form))
        .route("/edit_supplier/{id}", web::post().to(edit_supplier))
        .route("/delete_supplier/{id}", web::post().to(delete_supplier));
}
