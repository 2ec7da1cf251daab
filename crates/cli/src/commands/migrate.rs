//! # CLI Migration Command
//!
//! Database migration handling for the Docman CLI.

use error::Result;
use migration::{Migrator, MigratorTrait as _};
use tracing::info;

use crate::{commands::MigrateArgs, config::DatabaseConfig};

/// Runs database migrations
///
/// `--dry-run` lists pending migrations, `--rollback` reverts the most
/// recent one, and no flag applies everything pending.
pub async fn migrate(config: &DatabaseConfig, args: &MigrateArgs) -> Result<()> {
    info!(
        target: "migrate",
        dry_run = %args.dry_run,
        rollback = %args.rollback,
        "Running database migrations..."
    );

    let db = migration::connect_to_database(&config.database_url())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    if args.dry_run {
        let pending = Migrator::get_pending_migrations(&db)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get pending migrations: {}", e))?;

        info!(target: "migrate", pending_count = %pending.len(), "Pending migrations found");
        for m in &pending {
            println!("{}", m.name());
        }
        return Ok(());
    }

    if args.rollback {
        info!(target: "migrate", "Rolling back the last migration...");
        Migrator::down(&db, Some(1))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to rollback migration: {}", e))?;
        info!(target: "migrate", "Rollback completed successfully");
        return Ok(());
    }

    Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    info!(target: "migrate", "Migrations completed successfully");
    Ok(())
}
