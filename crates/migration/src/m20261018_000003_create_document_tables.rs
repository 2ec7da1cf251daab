use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261018_000001_create_organization_tables::{Branches, Brands, Companies, People},
    m20261018_000002_create_users_table::Users,
    single_column_index,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UploadedFiles::Table)
                    .if_not_exists()
                    .col(uuid(UploadedFiles::Id).primary_key())
                    .col(string_len(UploadedFiles::File, 255))
                    .col(uuid_null(UploadedFiles::UploadedBy))
                    .col(timestamp_with_time_zone(UploadedFiles::CreatedAt))
                    .col(timestamp_with_time_zone(UploadedFiles::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_uploaded_files_uploaded_by")
                            .from(UploadedFiles::Table, UploadedFiles::UploadedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // level_object_id deliberately has no foreign key: its target table depends on level.
        manager
            .create_table(
                Table::create()
                    .table(Receipts::Table)
                    .if_not_exists()
                    .col(uuid(Receipts::Id).primary_key())
                    .col(string_len(Receipts::Title, 255))
                    .col(text(Receipts::Description))
                    .col(decimal_len_null(Receipts::Amount, 14, 2))
                    .col(string_len_null(Receipts::Currency, 10))
                    .col(date(Receipts::Date))
                    .col(string_len(Receipts::Level, 10).default("branch"))
                    .col(string_len_null(Receipts::LevelObjectId, 100))
                    .col(uuid_null(Receipts::CreatedBy))
                    .col(json(Receipts::Tags))
                    .col(json(Receipts::Metadata))
                    .col(timestamp_with_time_zone(Receipts::CreatedAt))
                    .col(timestamp_with_time_zone(Receipts::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_receipts_created_by")
                            .from(Receipts::Table, Receipts::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReceiptAttachments::Table)
                    .if_not_exists()
                    .col(uuid(ReceiptAttachments::ReceiptId))
                    .col(uuid(ReceiptAttachments::UploadedFileId))
                    .primary_key(
                        Index::create()
                            .col(ReceiptAttachments::ReceiptId)
                            .col(ReceiptAttachments::UploadedFileId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_receipt_attachments_receipt_id")
                            .from(ReceiptAttachments::Table, ReceiptAttachments::ReceiptId)
                            .to(Receipts::Table, Receipts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_receipt_attachments_uploaded_file_id")
                            .from(ReceiptAttachments::Table, ReceiptAttachments::UploadedFileId)
                            .to(UploadedFiles::Table, UploadedFiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Templates::Table)
                    .if_not_exists()
                    .col(uuid(Templates::Id).primary_key())
                    .col(string_len(Templates::Title, 255))
                    .col(string_len(Templates::TemplateType, 20))
                    .col(text(Templates::ContentHtml))
                    .col(json(Templates::Placeholders))
                    .col(uuid_null(Templates::CreatedBy))
                    .col(integer(Templates::UsageCount).default(0))
                    .col(json(Templates::Versioning))
                    .col(timestamp_with_time_zone(Templates::CreatedAt))
                    .col(timestamp_with_time_zone(Templates::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_templates_created_by")
                            .from(Templates::Table, Templates::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CalendarEvents::Table)
                    .if_not_exists()
                    .col(uuid(CalendarEvents::Id).primary_key())
                    .col(string_len(CalendarEvents::Title, 255))
                    .col(text_null(CalendarEvents::Description))
                    .col(timestamp_with_time_zone(CalendarEvents::Start))
                    .col(timestamp_with_time_zone_null(CalendarEvents::End))
                    .col(string_len(CalendarEvents::Category, 20))
                    .col(string_len_null(CalendarEvents::RelatedDocumentType, 100))
                    .col(string_len_null(CalendarEvents::RelatedDocumentId, 100))
                    .col(uuid_null(CalendarEvents::RelatedCompanyId))
                    .col(uuid_null(CalendarEvents::RelatedBrandId))
                    .col(uuid_null(CalendarEvents::RelatedBranchId))
                    .col(uuid_null(CalendarEvents::RelatedPersonId))
                    .col(uuid_null(CalendarEvents::CreatedBy))
                    .col(timestamp_with_time_zone(CalendarEvents::CreatedAt))
                    .col(timestamp_with_time_zone(CalendarEvents::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_events_related_company_id")
                            .from(CalendarEvents::Table, CalendarEvents::RelatedCompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_events_related_brand_id")
                            .from(CalendarEvents::Table, CalendarEvents::RelatedBrandId)
                            .to(Brands::Table, Brands::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_events_related_branch_id")
                            .from(CalendarEvents::Table, CalendarEvents::RelatedBranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_events_related_person_id")
                            .from(CalendarEvents::Table, CalendarEvents::RelatedPersonId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_events_created_by")
                            .from(CalendarEvents::Table, CalendarEvents::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(single_column_index("idx_receipts_date", Receipts::Table, Receipts::Date))
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_receipts_level_object")
                    .table(Receipts::Table)
                    .col(Receipts::Level)
                    .col(Receipts::LevelObjectId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(single_column_index(
                "idx_calendar_events_start",
                CalendarEvents::Table,
                CalendarEvents::Start,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CalendarEvents::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Templates::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReceiptAttachments::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Receipts::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UploadedFiles::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UploadedFiles {
    Table,
    Id,
    File,
    UploadedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Receipts {
    Table,
    Id,
    Title,
    Description,
    Amount,
    Currency,
    Date,
    Level,
    LevelObjectId,
    CreatedBy,
    Tags,
    Metadata,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ReceiptAttachments {
    Table,
    ReceiptId,
    UploadedFileId,
}

#[derive(DeriveIden)]
enum Templates {
    Table,
    Id,
    Title,
    TemplateType,
    ContentHtml,
    Placeholders,
    CreatedBy,
    UsageCount,
    Versioning,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CalendarEvents {
    Table,
    Id,
    Title,
    Description,
    Start,
    End,
    Category,
    RelatedDocumentType,
    RelatedDocumentId,
    RelatedCompanyId,
    RelatedBrandId,
    RelatedBranchId,
    RelatedPersonId,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
