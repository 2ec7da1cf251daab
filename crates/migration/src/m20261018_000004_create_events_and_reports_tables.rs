use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261018_000001_create_organization_tables::{Branches, Brands, Companies, People},
    m20261018_000002_create_users_table::Users,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // related_id is a free-text reference to a document of kind `type`.
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(string_len(Events::Type, 20))
                    .col(string_len(Events::Title, 255))
                    .col(timestamp_with_time_zone(Events::Date))
                    .col(string_len(Events::RelatedId, 100))
                    .col(text_null(Events::Description))
                    .col(decimal_len_null(Events::Amount, 10, 2))
                    .col(string_len(Events::Status, 20).default("upcoming"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(pk_auto(Reports::Id))
                    .col(string_len(Reports::Name, 255))
                    .col(string_len(Reports::Type, 20))
                    .col(date(Reports::StartDate))
                    .col(date(Reports::EndDate))
                    .col(uuid(Reports::CreatedBy))
                    .col(decimal_len(Reports::TotalAmount, 10, 2))
                    .col(string_len(Reports::Status, 20).default("pending"))
                    .col(uuid_null(Reports::CompanyId))
                    .col(uuid_null(Reports::BrandId))
                    .col(uuid_null(Reports::BranchId))
                    .col(uuid_null(Reports::PersonId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_created_by")
                            .from(Reports::Table, Reports::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_company_id")
                            .from(Reports::Table, Reports::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_brand_id")
                            .from(Reports::Table, Reports::BrandId)
                            .to(Brands::Table, Brands::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_branch_id")
                            .from(Reports::Table, Reports::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_person_id")
                            .from(Reports::Table, Reports::PersonId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reports::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Type,
    Title,
    Date,
    RelatedId,
    Description,
    Amount,
    Status,
}

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
    Name,
    Type,
    StartDate,
    EndDate,
    CreatedBy,
    TotalAmount,
    Status,
    CompanyId,
    BrandId,
    BranchId,
    PersonId,
}
