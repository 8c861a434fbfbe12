use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{error, trace};

use crate::storage::SeaOrmStorage;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: HealthStorageCheck,
    pub response_time_ms: u128,
}

#[derive(Debug, Serialize)]
pub struct HealthStorageCheck {
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health
///
/// Talks to storage directly: the probe must not depend on service logic.
pub async fn health_check(storage: web::Data<Arc<SeaOrmStorage>>) -> HttpResponse {
    let start_time = Instant::now();
    trace!("Received health check request");

    let backend = storage.get_backend_config().storage_type;

    let (healthy, storage_check) =
        match tokio::time::timeout(Duration::from_secs(5), storage.count()).await {
            Ok(Ok(count)) => (
                true,
                HealthStorageCheck {
                    backend,
                    links_count: Some(count),
                    error: None,
                },
            ),
            Ok(Err(e)) => {
                error!("Storage health check failed: {}", e);
                (
                    false,
                    HealthStorageCheck {
                        backend,
                        links_count: None,
                        error: Some("database error".to_string()),
                    },
                )
            }
            Err(_) => {
                error!("Storage health check timeout");
                (
                    false,
                    HealthStorageCheck {
                        backend,
                        links_count: None,
                        error: Some("timeout".to_string()),
                    },
                )
            }
        };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    HttpResponse::build(status).json(HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" },
        version: env!("CARGO_PKG_VERSION"),
        storage: storage_check,
        response_time_ms: start_time.elapsed().as_millis(),
    })
}
