//! 路由表
//!
//! Fixed routes come first; the catch-all `/{shortlink}` must stay last.
//!
//! - GET  /                              landing page
//! - GET  /health                        health probe
//! - GET  /api/links?q=                  list / search
//! - POST /api/links                     create
//! - PUT  /api/links/{id}                update
//! - DELETE /api/links/{id}              delete
//! - GET  /api/links/{shortlink}/stats   per-link usage
//! - GET  /api/analytics                 usage of every shortlink
//! - GET  /go, /go/{shortlink}           legacy prefix
//! - GET  /{shortlink}                   redirect

use actix_web::{HttpRequest, error, web};
use tracing::debug;

use super::services::{analytics, health, landing, links, redirect};
use crate::errors::GolinksError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .route("/", web::get().to(landing::landing_page))
        .route("/health", web::get().to(health::health_check))
        .service(api_routes())
        .route("/go", web::get().to(landing::landing_page))
        .route("/go/{shortlink}", web::get().to(redirect::legacy_redirect))
        .route("/{shortlink}", web::get().to(redirect::redirect));
}

/// JSON API `/api`
fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/links", web::get().to(links::list_links))
        .route("/links", web::post().to(links::create_link))
        .route("/links/{id}", web::put().to(links::update_link))
        .route("/links/{id}", web::delete().to(links::delete_link))
        .route(
            "/links/{shortlink}/stats",
            web::get().to(analytics::link_stats),
        )
        .route("/analytics", web::get().to(analytics::all_stats))
}

/// Malformed or incomplete JSON bodies are validation errors
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        debug!("Rejected JSON body: {}", err);
        error::Error::from(GolinksError::validation(format!("Invalid JSON body: {}", err)))
    })
}

/// Non-numeric ids are validation errors rather than a bare 404
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        error::Error::from(GolinksError::validation(format!("Invalid path: {}", err)))
    })
}
