pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20250301_000001_golinks_table;
mod m20250301_000002_link_usage_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_golinks_table::Migration),
            Box::new(m20250301_000002_link_usage_table::Migration),
        ]
    }
}
