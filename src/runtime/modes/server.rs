//! Server mode
//!
//! Configures and starts the HTTP server with the routing table from
//! `api::routes`.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::routes;
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Run the HTTP server until it stops or Ctrl+C is received
///
/// Logging must be initialized before calling this function.
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(config)
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let state = startup.state.clone();
    let db_for_shutdown = startup.storage.get_db().clone();

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    info!("Using {} worker(s)", cpu_count);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::PayloadConfig::new(64 * 1024))
            .configure(|cfg| state.register(cfg))
            .configure(routes::configure)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();
    warn!("Starting server at http://{}", bind_address);

    tokio::select! {
        res = server => {
            res.context("HTTP server error")?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(db_for_shutdown) => {
            warn!("Graceful shutdown complete");
        }
    }

    Ok(())
}
