//! `service_catalog`: billable services. Price is NUMERIC(10, 2), except on
//! SQLite where a NUMERIC column silently turns whole prices into INTEGER
//! cells; REAL keeps every price readable as a float.
use sea_orm_migration::sea_orm::DbBackend;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let price = match manager.get_database_backend() {
            DbBackend::Sqlite => double(ServiceCatalog::Price).default(0.0).to_owned(),
            _ => decimal_len(ServiceCatalog::Price, 10, 2).default(0).to_owned(),
        };
        manager
            .create_table(
                Table::create()
                    .table(ServiceCatalog::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceCatalog::Id))
                    .col(string(ServiceCatalog::Name))
                    .col(price)
                    .col(integer(ServiceCatalog::DurationMinutes))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceCatalog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceCatalog { Table, Id, Name, Price, DurationMinutes }
