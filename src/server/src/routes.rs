use actix_web::web;

use libdiffview::constants::MAX_FORM_BYTES;

use crate::controllers;

/// The explicit route table, registered once at process start.
///
/// Each page resource carries a guardless fallback route so a disallowed
/// method answers 405 instead of falling through to the 404 handler.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(MAX_FORM_BYTES))
        .service(
            web::resource("/")
                .route(web::get().to(controllers::home::index))
                .route(web::route().to(controllers::home::not_allowed)),
        )
        .service(
            web::resource("/diff")
                .route(web::post().to(controllers::diff::create))
                .route(web::route().to(controllers::diff::not_allowed)),
        )
        .route("/api/health", web::get().to(controllers::health::index))
        .route("/api/version", web::get().to(controllers::version::index));
}
