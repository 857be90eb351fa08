use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

pub mod dashboard;
pub mod esg;
pub mod geopolitical;
pub mod health;
pub mod manufacturers;
pub mod occupation;
pub mod projects;
pub mod suppliers;

/// Configure application routes.
///
/// `main.rs` wires these into the HttpServer behind the trace and logging
/// middleware; tests register the same paths directly so endpoint behavior
/// can be exercised without a socket.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    dashboard::configure_routes(cfg);
    manufacturers::configure_routes(cfg);
    suppliers::configure_routes(cfg);
    projects::configure_routes(cfg);
    esg::configure_routes(cfg);
    occupation::configure_routes(cfg);
    geopolitical::configure_routes(cfg);
}

/// `?notice=<code>` carried by success redirects; resolved by the receiving view.
#[derive(Debug, Deserialize)]
pub(crate) struct NoticeQuery {
    pub notice: Option<String>,
}

/// 303 redirect used by every successful form POST.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}
