use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServicesRendered::Table)
                    .if_not_exists()
                    .col(pk_auto(ServicesRendered::Id))
                    .col(integer_null(ServicesRendered::RecordId))
                    .col(integer_null(ServicesRendered::ServiceId))
                    .col(integer(ServicesRendered::Quantity).default(1))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServicesRendered::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServicesRendered { Table, Id, RecordId, ServiceId, Quantity }
