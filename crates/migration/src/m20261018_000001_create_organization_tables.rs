use sea_orm_migration::{prelude::*, schema::*};

use crate::single_column_index;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(uuid(Companies::Id).primary_key())
                    .col(string_len(Companies::Title, 255))
                    .col(string_len(Companies::TaxNumber, 50))
                    .col(string_len(Companies::Email, 254))
                    .col(string_len(Companies::Iban, 34))
                    .col(text(Companies::Description))
                    .col(boolean(Companies::IsActive).default(true))
                    .col(json_null(Companies::Metadata))
                    .col(timestamp_with_time_zone(Companies::CreatedAt))
                    .col(timestamp_with_time_zone(Companies::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Brands::Table)
                    .if_not_exists()
                    .col(uuid(Brands::Id).primary_key())
                    .col(string_len(Brands::Name, 255))
                    .col(uuid(Brands::CompanyId))
                    .col(timestamp_with_time_zone(Brands::CreatedAt))
                    .col(timestamp_with_time_zone(Brands::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_brands_company_id")
                            .from(Brands::Table, Brands::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Branches::Table)
                    .if_not_exists()
                    .col(uuid(Branches::Id).primary_key())
                    .col(string_len(Branches::Name, 255))
                    .col(text(Branches::Address))
                    .col(string_len(Branches::Phone, 50))
                    .col(string_len(Branches::Email, 254))
                    .col(uuid(Branches::BrandId))
                    .col(timestamp_with_time_zone(Branches::CreatedAt))
                    .col(timestamp_with_time_zone(Branches::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branches_brand_id")
                            .from(Branches::Table, Branches::BrandId)
                            .to(Brands::Table, Brands::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(uuid(Roles::Id).primary_key())
                    .col(string_len(Roles::Name, 100))
                    .col(string_len(Roles::DisplayName, 255))
                    .col(text_null(Roles::Description))
                    .col(json(Roles::Permissions))
                    .col(timestamp_with_time_zone(Roles::CreatedAt))
                    .col(timestamp_with_time_zone(Roles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(uuid(People::Id).primary_key())
                    .col(string_len(People::FullName, 255))
                    .col(string_len(People::NationalId, 20))
                    .col(text(People::Address))
                    .col(string_len(People::Phone, 50))
                    .col(string_len(People::Email, 254))
                    .col(string_len(People::Iban, 34))
                    .col(text_null(People::Description))
                    .col(boolean(People::IsActive).default(true))
                    .col(uuid_null(People::RoleId))
                    .col(uuid(People::BranchId))
                    .col(timestamp_with_time_zone(People::CreatedAt))
                    .col(timestamp_with_time_zone(People::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_people_branch_id")
                            .from(People::Table, People::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_people_role_id")
                            .from(People::Table, People::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(single_column_index("idx_brands_company_id", Brands::Table, Brands::CompanyId))
            .await?;
        manager
            .create_index(single_column_index("idx_branches_brand_id", Branches::Table, Branches::BrandId))
            .await?;
        manager
            .create_index(single_column_index("idx_people_branch_id", People::Table, People::BranchId))
            .await?;
        manager
            .create_index(single_column_index("idx_people_role_id", People::Table, People::RoleId))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Branches::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Brands::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Companies::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Companies {
    Table,
    Id,
    Title,
    TaxNumber,
    Email,
    Iban,
    Description,
    IsActive,
    Metadata,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Brands {
    Table,
    Id,
    Name,
    CompanyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Branches {
    Table,
    Id,
    Name,
    Address,
    Phone,
    Email,
    BrandId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Roles {
    Table,
    Id,
    Name,
    DisplayName,
    Description,
    Permissions,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    FullName,
    NationalId,
    Address,
    Phone,
    Email,
    Iban,
    Description,
    IsActive,
    RoleId,
    BranchId,
    CreatedAt,
    UpdatedAt,
}
