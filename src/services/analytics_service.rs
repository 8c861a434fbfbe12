//! Usage analytics service

use std::sync::Arc;

use crate::errors::Result;
use crate::storage::{SeaOrmStorage, ShortlinkUsage, UsageStats};

pub struct AnalyticsService {
    storage: Arc<SeaOrmStorage>,
}

impl AnalyticsService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Count and last access for one shortlink; zero and `None` if never used
    pub async fn usage_stats(&self, shortlink: &str) -> Result<UsageStats> {
        self.storage.usage_stats(shortlink).await
    }

    /// One row per shortlink that was ever resolved, deleted links included
    pub async fn all_usage_stats(&self) -> Result<Vec<ShortlinkUsage>> {
        self.storage.all_usage_stats().await
    }
}
