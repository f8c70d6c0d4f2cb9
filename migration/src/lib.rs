pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_status_record;
mod m20250601_000002_seed_status_record;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_status_record::Migration),
            Box::new(m20250601_000002_seed_status_record::Migration),
        ]
    }
}
