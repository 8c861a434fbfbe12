use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 golinks 表
        manager
            .create_table(
                Table::create()
                    .table(GoLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GoLinks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GoLinks::Shortlink)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(GoLinks::Destination).text().not_null())
                    .col(
                        ColumnDef::new(GoLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 列表按创建时间倒序
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_golinks_created_at")
                    .table(GoLinks::Table)
                    .col(GoLinks::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_golinks_created_at").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GoLinks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GoLinks {
    #[sea_orm(iden = "golinks")]
    Table,
    Id,
    Shortlink,
    Destination,
    CreatedAt,
}
