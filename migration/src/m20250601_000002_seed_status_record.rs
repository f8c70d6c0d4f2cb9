use sea_orm_migration::prelude::*;

/// Record identifier seeded for the watcher; must match STATUS_RECORD_ID
const DEFAULT_RECORD_ID: &str = "status-watcher";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Seed the single watcher record; the watcher only ever updates it
        let insert = Query::insert()
            .into_table(StatusRecord::Table)
            .columns([
                StatusRecord::Id,
                StatusRecord::LastStatus,
                StatusRecord::LastUpdate,
            ])
            .values_panic([
                DEFAULT_RECORD_ID.into(),
                "online".into(),
                "1970-01-01T00:00:00Z".into(),
            ])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(StatusRecord::Table)
            .and_where(Expr::col(StatusRecord::Id).eq(DEFAULT_RECORD_ID))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}

// status_record table
#[derive(Iden)]
enum StatusRecord {
    Table,
    Id,
    LastStatus,
    LastUpdate,
}
