use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create the status_record table
        manager
            .create_table(
                Table::create()
                    .table(StatusRecord::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StatusRecord::Id)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StatusRecord::LastStatus).text().not_null())
                    .col(ColumnDef::new(StatusRecord::LastUpdate).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatusRecord::Table).to_owned())
            .await
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
