use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tera::Context;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::manufacturers::{self, CreateOutcome};
use crate::state::app_state::AppState;
use crate::views;

use super::see_other;

#[derive(Debug, Deserialize)]
struct ManufacturerForm {
    #[serde(default)]
    name: String,
}

async fn add_manufacturer_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    views::render(
        state.templates(),
        "add_manufacturer.html.tera",
        &Context::new(),
    )
}

/// POST /add_manufacturer
async fn add_manufacturer(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<ManufacturerForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let name = form.name.clone();

    let outcome = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { manufacturers::create(txn, &name).await })
    })
    .await?;

    match outcome {
        CreateOutcome::Created(_) => Ok(see_other("/")),
        CreateOutcome::Rejected(rejection) => {
            let mut ctx = Context::new();
            ctx.insert("error", rejection.message());
            ctx.insert("name", &form.name);
            views::render(state.templates(), "add_manufacturer.html.tera", &ctx)
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/add_manufacturer", web::get().to(add_manufacturer_form))
        .route("/add_manufacturer", web::post().to(add_manufacturer));
}
