use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tera::Context;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::geopolitical;
use crate::services::suppliers as supplier_service;
use crate::state::app_state::AppState;
use crate::views::{self, Notice, RiskView, SupplierView};

use super::{see_other, NoticeQuery};

#[derive(Debug, Deserialize)]
struct RiskForm {
    #[serde(default)]
    risk_description: String,
}

/// One block on the overview page: a supplier and its risk notes.
#[derive(Debug, Serialize)]
struct SupplierRisks {
    supplier: SupplierView,
    risks: Vec<RiskView>,
}

async fn upload_geopolitical_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let supplier = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { supplier_service::fetch(txn, id).await })
    })
    .await?;

    let mut ctx = Context::new();
    ctx.insert("supplier", &SupplierView::from(supplier));
    views::render(state.templates(), "upload_geopolitical.html.tera", &ctx)
}

/// POST /upload_geopolitical/{id}
async fn upload_geopolitical(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<RiskForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let description = form.into_inner().risk_description.trim().to_string();

    if description.is_empty() {
        // Supplier lookup still runs so a bad id yields the 404 page.
        let supplier = with_txn(Some(&req), &state, move |txn| {
            Box::pin(async move { supplier_service::fetch(txn, id).await })
        })
        .await?;

        let mut ctx = Context::new();
        ctx.insert("supplier", &SupplierView::from(supplier));
        ctx.insert("notice", Notice::RiskDescriptionMissing.message());
        return views::render(state.templates(), "upload_geopolitical.html.tera", &ctx);
    }

    with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move {
            let supplier = supplier_service::fetch(txn, id).await?;
            geopolitical::record(txn, supplier.id, description).await
        })
    })
    .await?;

    Ok(see_other(&format!(
        "/view_geopolitical?notice={}",
        Notice::RiskRecorded.code()
    )))
}

/// GET /view_geopolitical
async fn view_geopolitical(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<NoticeQuery>,
) -> Result<HttpResponse, AppError> {
    let pairs = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { geopolitical::suppliers_with_risks(txn).await })
    })
    .await?;

    let suppliers: Vec<SupplierRisks> = pairs
        .into_iter()
        .map(|(supplier, risks)| SupplierRisks {
            supplier: SupplierView::from(supplier),
            risks: risks.into_iter().map(RiskView::from).collect(),
        })
        .collect();

    let mut ctx = Context::new();
    ctx.insert("suppliers", &suppliers);
    if let Some(message) = Notice::resolve(query.notice.as_deref()) {
        ctx.insert("notice", message);
    }
    views::render(state.templates(), "view_geopolitical.html.tera", &ctx)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/upload_geopolitical/{id}",
        web::get().to(upload_geopolitical_form),
    )
    .route(
        "/upload_geopolitical/{id}",
        web::post().to(upload_geopolitical),
    )
    .route("/view_geopolitical", web::get().to(view_geopolitical));
}
