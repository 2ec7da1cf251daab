//! # Authorization Service
//!
//! Caller context, permission predicates and JWT handling:
//! - [`Caller`] describes who is making a request and is passed explicitly
//! - pure predicates in [`permissions`] decide reads and writes
//! - [`PolicyRegistry`] binds resources to predicates
//! - [`jwt`] validates bearer tokens

pub mod caller;
pub mod jwt;
pub mod permissions;
pub mod registry;
pub mod targets;

pub use caller::{load_caller, Access, Caller, PermissionSet, ScopeLevel};
pub use jwt::{create_access_token, extract_bearer_token, validate_token, Claims, JwtConfig};
pub use permissions::{
    branch_admin_or_read_only,
    brand_admin_or_read_only,
    company_admin_or_read_only,
    owner_or_staff,
    role_permission,
    scoped_admin_or_read_only,
    staff_only_write,
    Decision,
    Policy,
    ResourcePolicy,
    Stage,
};
pub use registry::{resources, PolicyRegistry};
pub use targets::AccessTarget;
