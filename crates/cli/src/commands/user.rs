//! # CLI User Command
//!
//! Provisions rows in `users`. Bearer tokens are only accepted for active
//! users that exist here.

use auth::{create_access_token, JwtConfig};
use entity::users;
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use tracing::info;

use crate::commands::CreateUserArgs;

/// Insert a new active user.
///
/// Fails with a conflict when the username is taken and with a validation
/// error when a referenced role or scope does not exist.
pub async fn create_user<C: ConnectionTrait>(db: &C, args: &CreateUserArgs) -> Result<users::Model> {
    let username = args.username.trim();
    if username.is_empty() || username.len() > 150 {
        return Err(AppError::validation("username: must be between 1 and 150 characters"));
    }

    let taken = users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .count(db)
        .await?;
    if taken > 0 {
        return Err(AppError::conflict(format!("User '{}' already exists", username)));
    }

    let user = users::ActiveModel {
        username: Set(username.to_owned()),
        email: Set(args.email.clone()),
        first_name: Set(args.first_name.clone()),
        last_name: Set(args.last_name.clone()),
        is_staff: Set(args.staff),
        is_active: Set(true),
        role_id: Set(args.role),
        company_id: Set(args.company),
        brand_id: Set(args.brand),
        branch_id: Set(args.branch),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(target: "user", user_id = %user.id, username = %user.username, is_staff = user.is_staff, "User created");
    Ok(user)
}

/// `docman user create`
pub async fn create(db: &sea_orm::DatabaseConnection, jwt: Option<&JwtConfig>, args: &CreateUserArgs) -> Result<()> {
    let user = create_user(db, args).await?;
    println!("{}\t{}", user.id, user.username);

    if args.print_token {
        let jwt = jwt.ok_or_else(|| AppError::config("DOCMAN_JWT_SECRET is required to print a token"))?;
        println!("{}", create_access_token(jwt, user.id, &user.email)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use uuid::Uuid;

    use super::*;

    async fn test_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn args(username: &str) -> CreateUserArgs {
        CreateUserArgs {
            username:    username.to_string(),
            email:       format!("{username}@example.com"),
            first_name:  String::new(),
            last_name:   String::new(),
            staff:       true,
            role:        None,
            company:     None,
            brand:       None,
            branch:      None,
            print_token: false,
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let db = test_db().await;

        let user = create_user(&db, &args("admin")).await.unwrap();
        assert_eq!(user.username, "admin");
        assert!(user.is_staff);
        assert!(user.is_active);

        let caller = auth::load_caller(&db, user.id).await.unwrap().unwrap();
        assert!(caller.is_staff);
        assert!(caller.permissions.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let db = test_db().await;
        create_user(&db, &args("admin")).await.unwrap();

        let err = create_user(&db, &args("admin")).await.unwrap_err();
        assert_eq!(err.code(), "CONFLICT");
    }

    #[tokio::test]
    async fn test_unknown_role_is_rejected() {
        let db = test_db().await;
        let mut with_role = args("clerk");
        with_role.role = Some(Uuid::new_v4());

        let err = create_user(&db, &with_role).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_empty_username_is_rejected() {
        let db = test_db().await;
        let err = create_user(&db, &args("  ")).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
