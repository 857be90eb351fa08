//! HTML view layer: the embedded tera template set plus the template-facing
//! projections of entity rows.

pub mod notice;

use actix_web::HttpResponse;
use rust_embed::RustEmbed;
use serde::Serialize;
use tera::{Context, Tera};

use crate::entities::{geopolitical_risks, suppliers};
use crate::error::AppError;

pub use notice::Notice;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Load the embedded template set. Called once at startup.
pub fn build_templates() -> Result<Tera, AppError> {
    let mut raw = Vec::new();
    for file in EmbeddedTemplates::iter() {
        let name = file.as_ref().to_string();
        let content = EmbeddedTemplates::get(&name)
            .ok_or_else(|| AppError::config(format!("embedded template {name} missing")))?;
        let body = std::str::from_utf8(&content.data)
            .map_err(|e| AppError::config(format!("embedded template {name} is not UTF-8: {e}")))?
            .to_string();
        raw.push((name, body));
    }

    let mut tera = Tera::default();
    // add_raw_templates resolves {% extends %} across the whole set
    tera.add_raw_templates(raw)
        .map_err(|e| AppError::config(format!("template parse failed: {e}")))?;
    // Tera's default autoescape list keys on ".html"/".htm"/".xml" suffixes
    tera.autoescape_on(vec![".html.tera"]);
    Ok(tera)
}

/// Render a template to a 200 HTML response.
pub fn render(templates: &Tera, name: &str, context: &Context) -> Result<HttpResponse, AppError> {
    let body = templates
        .render(name, context)
        .map_err(|e| AppError::internal(format!("template render failed: {e}")))?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Template-facing projection of a supplier row (nullable columns flattened).
#[derive(Debug, Serialize)]
pub struct SupplierView {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub contact_info: String,
    pub risk_rating: i32,
    pub occupation_rate: f64,
    pub facing_blocks: bool,
    pub checkpoint: i32,
}

impl From<suppliers::Model> for SupplierView {
    fn from(value: suppliers::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            address: value.address.unwrap_or_default(),
            contact_info: value.contact_info.unwrap_or_default(),
            risk_rating: value.risk_rating,
            occupation_rate: value.occupation_rate,
            facing_blocks: value.facing_blocks,
            checkpoint: value.checkpoint,
        }
    }
}

/// Template-facing projection of a risk note.
#[derive(Debug, Serialize)]
pub struct RiskView {
    pub id: i64,
    pub description: String,
    pub timestamp: String,
}

impl From<geopolitical_risks::Model> for RiskView {
    fn from(value: geopolitical_risks::Model) -> Self {
        Self {
            id: value.id,
            description: value.description,
            timestamp: value.timestamp.to_string(),
        }
    }
}
