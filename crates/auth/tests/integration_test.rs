//! Integration tests for the auth crate
//!
//! Predicate properties run without a database. Caller loading runs against a
//! migrated in-memory SQLite database.

use std::io::Write;

use auth::{
    company_admin_or_read_only,
    load_caller,
    owner_or_staff,
    resources,
    role_permission,
    staff_only_write,
    Access,
    Caller,
    Decision,
    PermissionSet,
    Policy,
    PolicyRegistry,
};
use chrono::Utc;
use entity::{companies, receipts, roles, sea_orm_active_enums::ReceiptLevel, users};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use serde_json::json;
use uuid::Uuid;

fn caller(is_staff: bool, permissions: &[&str]) -> Caller {
    Caller {
        user_id: Uuid::new_v4(),
        username: format!("user-{}", Uuid::new_v4().simple()),
        email: "user@example.com".to_string(),
        is_staff,
        role_id: None,
        permissions: PermissionSet::new(permissions.iter().copied()),
        company_id: None,
        brand_id: None,
        branch_id: None,
    }
}

fn receipt_owned_by(owner: Option<Uuid>) -> receipts::Model {
    let now = Utc::now();
    receipts::Model {
        id: Uuid::new_v4(),
        title: "Fuel".to_string(),
        description: String::new(),
        amount: None,
        currency: Some("TRY".to_string()),
        date: now.date_naive(),
        level: ReceiptLevel::Branch,
        level_object_id: None,
        created_by: owner,
        tags: json!([]),
        metadata: json!({}),
        created_at: now,
        updated_at: now,
    }
}

fn company(id: Uuid) -> companies::Model {
    let now = Utc::now();
    companies::Model {
        id,
        title: "Acme".to_string(),
        tax_number: "1234567890".to_string(),
        email: "info@acme.test".to_string(),
        iban: "TR000000000000000000000000".to_string(),
        description: String::new(),
        is_active: true,
        metadata: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_staff_only_write() {
    let clerk = caller(false, &[]);
    let staff = caller(true, &[]);

    assert!(!staff_only_write(Some(&clerk), Access::Write));
    assert!(staff_only_write(Some(&staff), Access::Write));
    assert!(staff_only_write(Some(&clerk), Access::Read));
    assert!(staff_only_write(Some(&staff), Access::Read));
}

#[test]
fn test_owner_or_staff() {
    let u1 = caller(false, &[]);
    let u2 = caller(false, &[]);
    let staff = caller(true, &[]);

    assert!(owner_or_staff(Some(&u1), Some(u1.user_id)));
    assert!(!owner_or_staff(Some(&u2), Some(u1.user_id)));
    assert!(owner_or_staff(Some(&staff), Some(u1.user_id)));
    assert!(!owner_or_staff(None, Some(u1.user_id)));
}

#[test]
fn test_role_permission() {
    let without = caller(false, &["view_receipts"]);
    let with = caller(false, &["edit_receipts"]);

    assert!(!role_permission(Some(&without), Some("edit_receipts")));
    assert!(role_permission(Some(&with), Some("edit_receipts")));
    assert!(role_permission(Some(&without), None));
    assert!(!role_permission(None, None));
}

#[test]
fn test_company_admin() {
    let company_a = Uuid::new_v4();
    let company_b = Uuid::new_v4();
    let mut admin = caller(true, &[]);
    admin.company_id = Some(company_a);

    assert!(!company_admin_or_read_only(Some(&admin), Access::Write, company_b));
    assert!(company_admin_or_read_only(Some(&admin), Access::Write, company_a));

    let mut clerk = caller(false, &[]);
    clerk.company_id = Some(company_a);
    assert!(!company_admin_or_read_only(Some(&clerk), Access::Write, company_a));
    assert!(company_admin_or_read_only(Some(&clerk), Access::Read, company_b));
}

#[test]
fn test_receipt_policy_binding() {
    let registry = PolicyRegistry::default();
    let policy = registry.policy(resources::RECEIPTS).unwrap();

    let reader = caller(false, &[]);
    assert!(policy.check_collection(Some(&reader), Access::Read).is_allowed());

    match policy.check_collection(Some(&reader), Access::Write) {
        Decision::Denied {
            policy,
            reason,
        } => {
            assert_eq!(policy, Policy::RolePermission);
            assert_eq!(reason, "Permission 'edit_receipts' is required");
        },
        other => panic!("expected denial, got {:?}", other),
    }

    let u1 = caller(false, &["edit_receipts"]);
    let u2 = caller(false, &["edit_receipts"]);
    let receipt = receipt_owned_by(Some(u1.user_id));

    assert!(policy.check_collection(Some(&u2), Access::Write).is_allowed());
    assert!(policy.check_object(Some(&u1), Access::Write, &receipt).is_allowed());
    assert!(matches!(
        policy.check_object(Some(&u2), Access::Write, &receipt),
        Decision::Denied {
            policy: Policy::OwnerOrStaff,
            ..
        }
    ));

    let orphan = receipt_owned_by(None);
    assert!(!policy.check_object(Some(&u1), Access::Write, &orphan).is_allowed());
    assert!(!policy.check_object(Some(&u1), Access::Read, &orphan).is_allowed());

    assert!(policy.check_collection(Some(&u2), Access::Read).is_allowed());
    assert!(policy.check_object(Some(&u1), Access::Read, &receipt).is_allowed());
    assert!(!policy.check_object(Some(&u2), Access::Read, &receipt).is_allowed());
    assert!(policy
        .check_object(Some(&caller(true, &[])), Access::Read, &receipt)
        .is_allowed());
}

#[test]
fn test_company_policy_binding() {
    let registry = PolicyRegistry::default();
    let policy = registry.policy(resources::COMPANIES).unwrap();
    let own = company(Uuid::new_v4());
    let other = company(Uuid::new_v4());

    let mut admin = caller(true, &[]);
    admin.company_id = Some(own.id);

    assert!(policy.check_collection(Some(&admin), Access::Write).is_allowed());
    assert!(policy.check_object(Some(&admin), Access::Write, &own).is_allowed());
    assert!(!policy.check_object(Some(&admin), Access::Write, &other).is_allowed());

    let clerk = caller(false, &[]);
    assert!(!policy.check_collection(Some(&clerk), Access::Write).is_allowed());
    assert!(policy.check_object(Some(&clerk), Access::Read, &other).is_allowed());
    assert_eq!(policy.check_collection(None, Access::Read), Decision::Unauthenticated);
}

#[test]
fn test_policy_file_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"calendar-events": {{"policies": ["role_permission", "owner_or_staff"], "read_permission": "view_calendar"}}}}"#
    )
    .unwrap();

    let registry = PolicyRegistry::from_file(file.path()).unwrap();
    let policy = registry.policy(resources::CALENDAR_EVENTS).unwrap();

    let plain = caller(false, &[]);
    let viewer = caller(false, &["view_calendar"]);
    assert!(!policy.check_collection(Some(&plain), Access::Read).is_allowed());
    assert!(policy.check_collection(Some(&viewer), Access::Read).is_allowed());
    assert!(policy.check_collection(Some(&viewer), Access::Write).is_allowed());
}

#[test]
fn test_missing_policy_file() {
    assert!(PolicyRegistry::from_file("/nonexistent/docman-policies.json").is_err());
}

async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn user(username: &str, role_id: Option<Uuid>, is_active: bool) -> users::ActiveModel {
    users::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{}@example.com", username)),
        first_name: Set("Test".to_string()),
        last_name: Set("User".to_string()),
        is_staff: Set(false),
        is_active: Set(is_active),
        role_id: Set(role_id),
        company_id: Set(None),
        brand_id: Set(None),
        branch_id: Set(None),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_load_caller_with_role() {
    let db = setup().await;

    let role = roles::ActiveModel {
        name: Set("accountant".to_string()),
        display_name: Set("Accountant".to_string()),
        description: Set(None),
        permissions: Set(json!(["edit_receipts", "edit_reports"])),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let row = user("accountant", Some(role.id), true).insert(&db).await.unwrap();

    let caller = load_caller(&db, row.id).await.unwrap().expect("caller should load");
    assert_eq!(caller.user_id, row.id);
    assert_eq!(caller.role_id, Some(role.id));
    assert!(caller.permissions.contains("edit_receipts"));
    assert!(caller.permissions.contains("edit_reports"));
    assert!(!caller.permissions.contains("edit_people"));
}

#[tokio::test]
async fn test_load_caller_missing_or_inactive() {
    let db = setup().await;

    assert!(load_caller(&db, Uuid::new_v4()).await.unwrap().is_none());

    let inactive = user("former", None, false).insert(&db).await.unwrap();
    assert!(load_caller(&db, inactive.id).await.unwrap().is_none());

    let plain = user("plain", None, true).insert(&db).await.unwrap();
    let caller = load_caller(&db, plain.id).await.unwrap().unwrap();
    assert!(caller.permissions.is_empty());
}
