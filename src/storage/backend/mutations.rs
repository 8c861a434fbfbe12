//! Mutation operations for SeaOrmStorage
//!
//! Callers validate and normalize input first; these functions only enforce
//! existence and uniqueness.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, SqlErr, TransactionTrait,
};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::model_to_golink;
use crate::errors::{GolinksError, Result};
use crate::storage::GoLink;

use migration::entities::golink;

/// Unique index violations become a conflict; anything else is a storage error.
fn map_write_error(err: DbErr, shortlink: &str, action: &str) -> GolinksError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            GolinksError::conflict(format!("Shortlink '{}' already exists", shortlink))
        }
        _ => GolinksError::database_operation(format!("Failed to {} link: {}", action, err)),
    }
}

impl SeaOrmStorage {
    pub async fn insert(&self, shortlink: &str, destination: &str) -> Result<GoLink> {
        use sea_orm::ActiveValue::*;

        let model = golink::ActiveModel {
            id: NotSet,
            shortlink: Set(shortlink.to_string()),
            destination: Set(destination.to_string()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_write_error(e, shortlink, "create"))?;

        info!("Go link created: {} -> {}", model.shortlink, model.destination);
        Ok(model_to_golink(model))
    }

    /// 更新 shortlink / destination，created_at 保持不变
    ///
    /// Runs in one transaction; any error drops the transaction, which rolls
    /// it back.
    pub async fn update(&self, id: i64, shortlink: &str, destination: &str) -> Result<GoLink> {
        use sea_orm::ActiveValue::*;

        let txn = self.db.begin().await.map_err(|e| {
            GolinksError::database_operation(format!("Failed to begin transaction: {}", e))
        })?;

        let existing = golink::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| GolinksError::not_found(format!("Link #{} not found", id)))?;

        let taken = golink::Entity::find()
            .filter(golink::Column::Shortlink.eq(shortlink))
            .filter(golink::Column::Id.ne(id))
            .one(&txn)
            .await?;
        if taken.is_some() {
            return Err(GolinksError::conflict(format!(
                "Shortlink '{}' already exists",
                shortlink
            )));
        }

        let mut active: golink::ActiveModel = existing.into();
        active.shortlink = Set(shortlink.to_string());
        active.destination = Set(destination.to_string());

        let model = active
            .update(&txn)
            .await
            .map_err(|e| map_write_error(e, shortlink, "update"))?;

        txn.commit().await.map_err(|e| {
            GolinksError::database_operation(format!("Failed to commit transaction: {}", e))
        })?;

        info!("Go link #{} updated: {} -> {}", id, model.shortlink, model.destination);
        Ok(model_to_golink(model))
    }

    pub async fn remove(&self, id: i64) -> Result<()> {
        let result = golink::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| GolinksError::database_operation(format!("Failed to delete link: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(GolinksError::not_found(format!("Link #{} not found", id)));
        }

        info!("Go link #{} deleted", id);
        Ok(())
    }
}
