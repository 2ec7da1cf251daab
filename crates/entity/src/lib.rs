//! Entity definitions for Docman
//!
//! This crate contains Sea-ORM entity definitions for the database models.
//! Every table except `events` and `reports` is keyed by an application
//! generated UUID and carries `created_at`/`updated_at` timestamps that are
//! maintained in `before_save`.

/// Implements `ActiveModelBehavior` for an entity with a UUID `id` and
/// `created_at`/`updated_at` columns.
///
/// On insert a missing id and missing timestamps are filled in. Every save
/// refreshes `updated_at`.
macro_rules! uuid_timestamped_behavior {
    () => {
        #[async_trait::async_trait]
        impl sea_orm::ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                let now = chrono::Utc::now();
                if insert {
                    if self.id.is_not_set() {
                        self.id = sea_orm::ActiveValue::Set(uuid::Uuid::new_v4());
                    }
                    if self.created_at.is_not_set() {
                        self.created_at = sea_orm::ActiveValue::Set(now);
                    }
                }
                self.updated_at = sea_orm::ActiveValue::Set(now);
                Ok(self)
            }
        }
    };
}

pub mod sea_orm_active_enums;

pub mod branches;
pub use branches::Entity as Branches;
pub mod brands;
pub use brands::Entity as Brands;
pub mod calendar_events;
pub use calendar_events::Entity as CalendarEvents;
pub mod companies;
pub use companies::Entity as Companies;
pub mod events;
pub use events::Entity as Events;
pub mod people;
pub use people::Entity as People;
pub mod receipt_attachments;
pub use receipt_attachments::Entity as ReceiptAttachments;
pub mod receipts;
pub use receipts::Entity as Receipts;
pub mod reports;
pub use reports::Entity as Reports;
pub mod roles;
pub use roles::Entity as Roles;
pub mod templates;
pub use templates::Entity as Templates;
pub mod uploaded_files;
pub use uploaded_files::Entity as UploadedFiles;
pub mod users;
pub use users::Entity as Users;
