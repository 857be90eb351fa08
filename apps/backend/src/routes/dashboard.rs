use actix_web::{web, HttpRequest, HttpResponse};
use tera::Context;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos;
use crate::state::app_state::AppState;
use crate::views::{self, SupplierView};

/// GET /
///
/// The landing page: every manufacturer and every supplier.
async fn dashboard(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (manufacturers, suppliers) = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move {
            let manufacturers = repos::manufacturers::list_all(txn).await?;
            let suppliers = repos::suppliers::list_all(txn).await?;
            Ok((manufacturers, suppliers))
        })
    })
    .await?;

    let suppliers: Vec<SupplierView> = suppliers.into_iter().map(SupplierView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("manufacturers", &manufacturers);
    ctx.insert("suppliers", &suppliers);
    views::render(state.templates(), "dashboard.html.tera", &ctx)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard));
}
