//! Usage log operations for SeaOrmStorage
//!
//! The log is append-only and keyed by shortlink text, so rows survive the
//! deletion of their link and keep contributing to the statistics.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::trace;

use super::SeaOrmStorage;
use super::converters::model_to_usage_event;
use crate::errors::{GolinksError, Result};
use crate::storage::{NewUsageEvent, ShortlinkUsage, UsageEvent, UsageStats};

use migration::entities::link_usage;

/// 使用记录写入接口
///
/// The redirect path only needs to append events; keeping that behind a trait
/// lets the resolver run against any sink.
#[async_trait]
pub trait UsageSink: Send + Sync {
    async fn record_usage(&self, event: NewUsageEvent) -> Result<()>;
}

#[derive(Debug, FromQueryResult)]
struct UsageRow {
    shortlink: String,
    usage_count: i64,
    last_used: Option<DateTime<Utc>>,
}

#[async_trait]
impl UsageSink for SeaOrmStorage {
    async fn record_usage(&self, event: NewUsageEvent) -> Result<()> {
        use sea_orm::ActiveValue::*;

        let shortlink = event.shortlink.clone();
        link_usage::ActiveModel {
            id: NotSet,
            shortlink: Set(event.shortlink),
            accessed_at: Set(Utc::now()),
            query_args: Set(event.query_args),
            user_agent: Set(event.user_agent),
            client_address: Set(event.client_address),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            GolinksError::database_operation(format!(
                "Failed to record usage for '{}': {}",
                shortlink, e
            ))
        })?;

        trace!("Usage recorded for {}", shortlink);
        Ok(())
    }
}

impl SeaOrmStorage {
    /// 单个 shortlink 的使用次数和最近访问时间
    pub async fn usage_stats(&self, shortlink: &str) -> Result<UsageStats> {
        let usage_count = link_usage::Entity::find()
            .filter(link_usage::Column::Shortlink.eq(shortlink))
            .count(&self.db)
            .await?;

        let last = link_usage::Entity::find()
            .filter(link_usage::Column::Shortlink.eq(shortlink))
            .order_by_desc(link_usage::Column::AccessedAt)
            .one(&self.db)
            .await?;

        Ok(UsageStats {
            usage_count,
            last_used: last.map(|m| m.accessed_at),
        })
    }

    /// 所有被访问过的 shortlink 的统计，包括已删除的链接
    ///
    /// Sorted by usage count (descending), then shortlink.
    pub async fn all_usage_stats(&self) -> Result<Vec<ShortlinkUsage>> {
        let rows = link_usage::Entity::find()
            .select_only()
            .column(link_usage::Column::Shortlink)
            .column_as(link_usage::Column::Id.count(), "usage_count")
            .column_as(link_usage::Column::AccessedAt.max(), "last_used")
            .group_by(link_usage::Column::Shortlink)
            .into_model::<UsageRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                GolinksError::database_operation(format!("Failed to aggregate usage: {}", e))
            })?;

        let mut stats: Vec<ShortlinkUsage> = rows
            .into_iter()
            .map(|row| ShortlinkUsage {
                shortlink: row.shortlink,
                usage_count: row.usage_count.max(0) as u64,
                last_used: row.last_used,
            })
            .collect();

        stats.sort_by(|a, b| {
            b.usage_count
                .cmp(&a.usage_count)
                .then_with(|| a.shortlink.cmp(&b.shortlink))
        });
        Ok(stats)
    }

    /// Raw events for one shortlink, oldest first
    pub async fn usage_events(&self, shortlink: &str) -> Result<Vec<UsageEvent>> {
        let models = link_usage::Entity::find()
            .filter(link_usage::Column::Shortlink.eq(shortlink))
            .order_by_asc(link_usage::Column::AccessedAt)
            .order_by_asc(link_usage::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(model_to_usage_event).collect())
    }
}
