//! Usage log entity, one row per resolved shortlink

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "link_usage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Not a foreign key: rows outlive the link they were recorded for
    pub shortlink: String,
    pub accessed_at: DateTimeUtc,
    /// Raw `q` query parameter
    #[sea_orm(column_type = "Text", nullable)]
    pub query_args: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub user_agent: Option<String>,
    pub client_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
