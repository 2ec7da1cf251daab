//! # Docman Migrations
//!
//! Schema migrations for every Docman table. The migrations only use portable
//! column types so the same history runs on PostgreSQL and SQLite.

pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_organization_tables;
mod m20261018_000002_create_users_table;
mod m20261018_000003_create_document_tables;
mod m20261018_000004_create_events_and_reports_tables;

/// The main migrator that coordinates all migration operations
///
/// Migrations are executed in the order they appear in [`Migrator::migrations`].
///
/// # Example
///
/// ```rust,ignore
/// use migration::{Migrator, MigratorTrait};
///
/// Migrator::up(&db, None).await?;
/// ```
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_organization_tables::Migration),
            Box::new(m20261018_000002_create_users_table::Migration),
            Box::new(m20261018_000003_create_document_tables::Migration),
            Box::new(m20261018_000004_create_events_and_reports_tables::Migration),
        ]
    }
}

/// Database connection helper for CLI usage
pub async fn connect_to_database(database_url: &str) -> Result<sea_orm::DatabaseConnection, sea_orm::DbErr> {
    sea_orm::Database::connect(database_url).await
}

/// Index over a single column.
pub(crate) fn single_column_index<T, C>(name: &str, table: T, column: C) -> IndexCreateStatement
where
    T: IntoTableRef,
    C: IntoIndexColumn,
{
    Index::create()
        .if_not_exists()
        .name(name)
        .table(table)
        .col(column)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 4);
    }
}
