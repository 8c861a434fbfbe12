//! 使用记录表迁移
//!
//! link_usage 只追加不修改；shortlink 列不设外键，
//! 删除链接后历史记录仍然保留。

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LinkUsage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LinkUsage::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LinkUsage::Shortlink)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LinkUsage::AccessedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LinkUsage::QueryArgs).text().null())
                    .col(ColumnDef::new(LinkUsage::UserAgent).text().null())
                    .col(
                        ColumnDef::new(LinkUsage::ClientAddress)
                            .string_len(45)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 复合索引（单链接统计：count + max(accessed_at)）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_link_usage_shortlink_time")
                    .table(LinkUsage::Table)
                    .col(LinkUsage::Shortlink)
                    .col(LinkUsage::AccessedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_link_usage_shortlink_time")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LinkUsage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LinkUsage {
    #[sea_orm(iden = "link_usage")]
    Table,
    Id,
    Shortlink,
    AccessedAt,
    QueryArgs,
    UserAgent,
    ClientAddress,
}
