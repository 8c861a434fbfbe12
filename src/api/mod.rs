//! HTTP interface
//!
//! `routes::configure` is the complete routing table; `AppState` carries the
//! services that handlers receive as `web::Data`.

pub mod routes;
pub mod services;

use std::sync::Arc;

use actix_web::web;

use crate::services::{AnalyticsService, LinkService, RedirectResolver};
use crate::storage::SeaOrmStorage;

/// Services shared by all workers, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub storage: web::Data<Arc<SeaOrmStorage>>,
    pub links: web::Data<LinkService>,
    pub analytics: web::Data<AnalyticsService>,
    pub resolver: web::Data<RedirectResolver>,
}

impl AppState {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self {
            links: web::Data::new(LinkService::new(storage.clone())),
            analytics: web::Data::new(AnalyticsService::new(storage.clone())),
            resolver: web::Data::new(RedirectResolver::new(storage.clone())),
            storage: web::Data::new(storage),
        }
    }

    /// Replace the redirect resolver (e.g. with a different usage sink)
    pub fn with_resolver(mut self, resolver: RedirectResolver) -> Self {
        self.resolver = web::Data::new(resolver);
        self
    }

    /// Register every service as app data
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.storage.clone())
            .app_data(self.links.clone())
            .app_data(self.analytics.clone())
            .app_data(self.resolver.clone());
    }
}
