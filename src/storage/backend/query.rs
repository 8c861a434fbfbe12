//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only link operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::{debug, error};

use super::converters::model_to_golink;
use super::{LinkFilter, SeaOrmStorage};
use crate::errors::{GolinksError, Result};
use crate::storage::GoLink;

use migration::entities::golink;

impl SeaOrmStorage {
    /// 精确匹配查询（区分大小写）
    pub async fn get(&self, shortlink: &str) -> Result<Option<GoLink>> {
        let model = golink::Entity::find()
            .filter(golink::Column::Shortlink.eq(shortlink))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("查询短链接失败: {}", e);
                GolinksError::database_operation(format!("Failed to get '{}': {}", shortlink, e))
            })?;

        Ok(model.map(model_to_golink))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<GoLink>> {
        let model = golink::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                GolinksError::database_operation(format!("Failed to get link #{}: {}", id, e))
            })?;

        Ok(model.map(model_to_golink))
    }

    /// 列出链接，最新创建的在前
    ///
    /// The search term is matched case-insensitively against shortlink and
    /// destination. Matching happens after loading so the result does not
    /// depend on the collation of the backing database.
    pub async fn list(&self, filter: &LinkFilter) -> Result<Vec<GoLink>> {
        let models = golink::Entity::find()
            .order_by_desc(golink::Column::CreatedAt)
            .order_by_desc(golink::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GolinksError::database_operation(format!("Failed to list links: {}", e)))?;

        let links: Vec<GoLink> = models.into_iter().map(model_to_golink).collect();
        let total = links.len();

        let links = match filter.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => filter_links(links, term),
            _ => links,
        };

        debug!("Listed {} of {} links", links.len(), total);
        Ok(links)
    }

    pub async fn count(&self) -> Result<u64> {
        golink::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| GolinksError::database_operation(format!("Failed to count links: {}", e)))
    }
}

fn filter_links(links: Vec<GoLink>, term: &str) -> Vec<GoLink> {
    let needle = term.to_lowercase();
    links
        .into_iter()
        .filter(|link| {
            link.shortlink.to_lowercase().contains(&needle)
                || link.destination.to_lowercase().contains(&needle)
        })
        .collect()
}
