//! Usage analytics endpoints

use actix_web::{HttpResponse, web};
use tracing::trace;

use crate::errors::Result;
use crate::services::AnalyticsService;

/// GET /api/links/{shortlink}/stats
pub async fn link_stats(
    path: web::Path<String>,
    service: web::Data<AnalyticsService>,
) -> Result<HttpResponse> {
    let shortlink = path.into_inner();
    trace!("API: usage stats for {}", shortlink);

    let stats = service.usage_stats(&shortlink).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// GET /api/analytics
pub async fn all_stats(service: web::Data<AnalyticsService>) -> Result<HttpResponse> {
    let stats = service.all_usage_stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}
