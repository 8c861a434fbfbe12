use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// 关闭超时时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Wait for Ctrl+C, then close the connection pool
pub async fn listen_for_shutdown(db: DatabaseConnection) {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, closing database..."),
        Err(e) => warn!(
            "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
            e
        ),
    }

    match timeout(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS), db.close()).await {
        Ok(Ok(())) => info!("Database connection closed"),
        Ok(Err(e)) => error!("Failed to close database connection: {}", e),
        Err(_) => error!(
            "Closing the database timed out after {} seconds",
            SHUTDOWN_TIMEOUT_SECS
        ),
    }
}
