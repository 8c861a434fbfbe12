use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortlink → destination mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoLink {
    pub id: i64,
    pub shortlink: String,
    pub destination: String,
    pub created_at: DateTime<Utc>,
}

/// One recorded resolution of a shortlink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub id: i64,
    pub shortlink: String,
    pub accessed_at: DateTime<Utc>,
    pub query_args: Option<String>,
    pub user_agent: Option<String>,
    pub client_address: Option<String>,
}

/// A usage event that has not been stored yet
#[derive(Debug, Clone, Default)]
pub struct NewUsageEvent {
    pub shortlink: String,
    pub query_args: Option<String>,
    pub user_agent: Option<String>,
    pub client_address: Option<String>,
}

/// 单链接使用统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub usage_count: u64,
    pub last_used: Option<DateTime<Utc>>,
}

/// 按 shortlink 分组的使用统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlinkUsage {
    pub shortlink: String,
    pub usage_count: u64,
    pub last_used: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StorageConfig {
    pub storage_type: String,
}
