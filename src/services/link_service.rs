//! Link management service
//!
//! Provides the business rules for link CRUD, shared between the HTTP
//! handlers and the command-line interface.

use std::sync::Arc;

use tracing::debug;

use crate::errors::{GolinksError, Result};
use crate::storage::{GoLink, LinkFilter, SeaOrmStorage};
use crate::utils::{is_reserved_shortlink, is_valid_shortlink, normalize_destination};

/// Width of the `shortlink` column
pub const MAX_SHORTLINK_LEN: usize = 255;

/// Shortlink and destination as submitted by a caller (untrimmed, unnormalized)
#[derive(Debug, Clone)]
pub struct LinkRequest {
    pub shortlink: String,
    pub destination: String,
}

impl LinkRequest {
    pub fn new(shortlink: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            shortlink: shortlink.into(),
            destination: destination.into(),
        }
    }
}

/// A request that passed validation: trimmed shortlink, normalized destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLink {
    pub shortlink: String,
    pub destination: String,
}

/// 校验并规范化输入
pub fn validate_link_request(req: &LinkRequest) -> Result<ValidLink> {
    let shortlink = req.shortlink.trim();
    let destination = req.destination.trim();

    if shortlink.is_empty() {
        return Err(GolinksError::validation("Shortlink must not be empty"));
    }
    if destination.is_empty() {
        return Err(GolinksError::validation("Destination must not be empty"));
    }
    if destination.bytes().any(|b| b.is_ascii_control()) {
        return Err(GolinksError::validation(
            "Destination must not contain control characters",
        ));
    }
    if !is_valid_shortlink(shortlink) {
        return Err(GolinksError::validation(format!(
            "Invalid shortlink '{}'. Only letters, digits, '-' and '_' are allowed.",
            shortlink
        )));
    }
    if shortlink.len() > MAX_SHORTLINK_LEN {
        return Err(GolinksError::validation(format!(
            "Shortlink is longer than {} characters",
            MAX_SHORTLINK_LEN
        )));
    }
    if is_reserved_shortlink(shortlink) {
        return Err(GolinksError::validation(format!(
            "Shortlink '{}' is reserved",
            shortlink
        )));
    }

    Ok(ValidLink {
        shortlink: shortlink.to_string(),
        destination: normalize_destination(destination),
    })
}

pub struct LinkService {
    storage: Arc<SeaOrmStorage>,
}

impl LinkService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Create a new go link
    pub async fn create_link(&self, req: LinkRequest) -> Result<GoLink> {
        let valid = validate_link_request(&req)?;

        if self.storage.get(&valid.shortlink).await?.is_some() {
            return Err(GolinksError::conflict(format!(
                "Shortlink '{}' already exists",
                valid.shortlink
            )));
        }

        // A concurrent create can still win the race; the unique index
        // reports it as a conflict from insert.
        self.storage
            .insert(&valid.shortlink, &valid.destination)
            .await
    }

    /// Replace shortlink and destination of an existing link
    pub async fn update_link(&self, id: i64, req: LinkRequest) -> Result<GoLink> {
        let valid = validate_link_request(&req)?;
        self.storage
            .update(id, &valid.shortlink, &valid.destination)
            .await
    }

    pub async fn delete_link(&self, id: i64) -> Result<()> {
        self.storage.remove(id).await
    }

    pub async fn get_link(&self, shortlink: &str) -> Result<Option<GoLink>> {
        self.storage.get(shortlink).await
    }

    pub async fn get_link_by_id(&self, id: i64) -> Result<Option<GoLink>> {
        self.storage.get_by_id(id).await
    }

    /// List links newest first, optionally filtered (case-insensitive)
    pub async fn list_links(&self, search: Option<String>) -> Result<Vec<GoLink>> {
        debug!("Listing links with filter {:?}", search);
        self.storage.list(&LinkFilter { search }).await
    }

    pub async fn count_links(&self) -> Result<u64> {
        self.storage.count().await
    }
}
