use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tera::Context;

use crate::db::txn::with_txn;
use crate::entities::suppliers;
use crate::error::AppError;
use crate::services::occupation::{self, CheckpointOutcome};
use crate::services::suppliers as supplier_service;
use crate::state::app_state::AppState;
use crate::views::{self, Notice, SupplierView};

use super::{see_other, NoticeQuery};

/// Upload form. `occupation_rate` stays a string: a malformed value is caught
/// and reported as a notice instead of failing form extraction.
#[derive(Debug, Deserialize)]
struct OccupationForm {
    #[serde(default)]
    occupation_rate: String,
    /// Checkbox; present in the body only when ticked.
    facing_blocks: Option<String>,
}

fn render_upload_form(
    state: &AppState,
    supplier: suppliers::Model,
    notice: Option<Notice>,
) -> Result<HttpResponse, AppError> {
    let mut ctx = Context::new();
    ctx.insert("supplier", &SupplierView::from(supplier));
    if let Some(notice) = notice {
        ctx.insert("notice", notice.message());
    }
    views::render(state.templates(), "upload_occupation.html.tera", &ctx)
}

async fn upload_occupation_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let supplier = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { supplier_service::fetch(txn, id).await })
    })
    .await?;

    render_upload_form(&state, supplier, None)
}

/// POST /upload_occupation/{id}
///
/// Checkpoint cap and rate parsing are handled in the service; either failure
/// re-renders the form with a notice and leaves the row untouched.
async fn upload_occupation(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<OccupationForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let form = form.into_inner();
    let facing_blocks = form.facing_blocks.is_some();
    let raw_rate = form.occupation_rate;

    let (outcome, supplier) = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move {
            let supplier = supplier_service::fetch(txn, id).await?;
            let outcome =
                occupation::record(txn, supplier.clone(), &raw_rate, facing_blocks).await?;
            Ok((outcome, supplier))
        })
    })
    .await?;

    match outcome {
        CheckpointOutcome::Recorded(_) => Ok(see_other(&format!(
            "/view_occupation/{id}?notice={}",
            Notice::OccupationRecorded.code()
        ))),
        CheckpointOutcome::LimitReached => {
            render_upload_form(&state, supplier, Some(Notice::CheckpointLimit))
        }
        CheckpointOutcome::Invalid => {
            render_upload_form(&state, supplier, Some(Notice::OccupationInvalid))
        }
    }
}

/// GET /view_occupation/{id}
async fn view_occupation(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<NoticeQuery>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let supplier = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { supplier_service::fetch(txn, id).await })
    })
    .await?;

    let data = occupation::summarize(&supplier);

    let mut ctx = Context::new();
    ctx.insert("supplier", &SupplierView::from(supplier));
    ctx.insert("data", &data);
    if let Some(message) = Notice::resolve(query.notice.as_deref()) {
        ctx.insert("notice", message);
    }
    views::render(state.templates(), "view_occupation.html.tera", &ctx)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/upload_occupation/{id}", web::get().to(upload_occupation_form))
        .route("/upload_occupation/{id}", web::post().to(upload_occupation))
        .route("/view_occupation/{id}", web::get().to(view_occupation));
}
