use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::api::AppState;
use crate::config::StaticConfig;
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub state: AppState,
}

/// 准备服务器启动的上下文：打开存储、运行迁移、构建服务
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .with_context(|| {
            format!(
                "Failed to open storage at '{}'",
                config.database.database_url
            )
        })?;
    info!(
        "Using storage backend: {}",
        storage.get_backend_config().storage_type
    );

    let links = storage.count().await.context("Failed to read link table")?;
    info!("{} go links available", links);

    let state = AppState::new(storage.clone());

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext { storage, state })
}
