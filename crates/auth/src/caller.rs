//! # Caller Context
//!
//! The identity a request acts as. Permission checks receive it explicitly;
//! nothing in this crate reads ambient request state.

use std::collections::BTreeSet;

use entity::{roles, users};
use error::Result;
use sea_orm::{ConnectionTrait, EntityTrait};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Whether a request only reads or also changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Read,
    Write,
}

impl Access {
    /// GET, HEAD and OPTIONS are reads. Every other method writes.
    pub fn from_method(method: &http::Method) -> Self {
        if method == http::Method::GET || method == http::Method::HEAD || method == http::Method::OPTIONS {
            Self::Read
        }
        else {
            Self::Write
        }
    }

    #[inline]
    pub fn is_read(self) -> bool { self == Self::Read }
}

/// Organizational level a caller can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeLevel {
    Company,
    Brand,
    Branch,
}

impl std::fmt::Display for ScopeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeLevel::Company => write!(f, "company"),
            ScopeLevel::Brand => write!(f, "brand"),
            ScopeLevel::Branch => write!(f, "branch"),
        }
    }
}

/// Open set of capability names granted by a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    /// Build a set from any list of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Read the names stored on a role row.
    pub fn from_role(role: &roles::Model) -> Self { Self(role.permission_names()) }

    #[inline]
    pub fn contains(&self, name: &str) -> bool { self.0.contains(name) }

    #[inline]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }
}

/// Authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id:     Uuid,
    pub username:    String,
    pub email:       String,
    pub is_staff:    bool,
    pub role_id:     Option<Uuid>,
    pub permissions: PermissionSet,
    pub company_id:  Option<Uuid>,
    pub brand_id:    Option<Uuid>,
    pub branch_id:   Option<Uuid>,
}

impl Caller {
    /// Build a caller from a user row and the role it points at.
    pub fn from_user(user: &users::Model, role: Option<&roles::Model>) -> Self {
        Self {
            user_id:     user.id,
            username:    user.username.clone(),
            email:       user.email.clone(),
            is_staff:    user.is_staff,
            role_id:     user.role_id,
            permissions: role.map(PermissionSet::from_role).unwrap_or_default(),
            company_id:  user.company_id,
            brand_id:    user.brand_id,
            branch_id:   user.branch_id,
        }
    }

    /// The caller's own company, brand or branch.
    pub fn scope_id(&self, scope: ScopeLevel) -> Option<Uuid> {
        match scope {
            ScopeLevel::Company => self.company_id,
            ScopeLevel::Brand => self.brand_id,
            ScopeLevel::Branch => self.branch_id,
        }
    }
}

/// Load the caller for a user id.
///
/// Returns `None` when the user does not exist or is inactive. A dangling
/// `role_id` yields an empty permission set.
pub async fn load_caller<C>(db: &C, user_id: Uuid) -> Result<Option<Caller>>
where
    C: ConnectionTrait,
{
    let Some(user) = users::Entity::find_by_id(user_id).one(db).await?
    else {
        debug!(user_id = %user_id, "Token subject has no user row");
        return Ok(None);
    };

    if !user.is_active {
        debug!(user_id = %user_id, "Token subject is inactive");
        return Ok(None);
    }

    let role = match user.role_id {
        Some(role_id) => roles::Entity::find_by_id(role_id).one(db).await?,
        None => None,
    };

    Ok(Some(Caller::from_user(&user, role.as_ref())))
}
