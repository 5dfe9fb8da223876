use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InsurancePolicies::Table)
                    .if_not_exists()
                    .col(pk_auto(InsurancePolicies::Id))
                    .col(string(InsurancePolicies::PolicyNumber))
                    .col(string(InsurancePolicies::CompanyName))
                    .col(date(InsurancePolicies::ExpirationDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(InsurancePolicies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum InsurancePolicies { Table, Id, PolicyNumber, CompanyName, ExpirationDate }
