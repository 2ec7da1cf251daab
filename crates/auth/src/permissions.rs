//! # Permission Predicates
//!
//! Five independent predicates decide whether a caller may read or write a
//! resource. They are pure functions of the caller context, the access kind
//! and the target's attributes. [`Policy`] names a predicate so resources can
//! bind to them through [`ResourcePolicy`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    caller::{Access, Caller, ScopeLevel},
    targets::AccessTarget,
};

/// Reads need an authenticated caller; writes need a staff caller.
pub fn staff_only_write(caller: Option<&Caller>, access: Access) -> bool {
    match caller {
        Some(caller) => access.is_read() || caller.is_staff,
        None => false,
    }
}

/// Staff or the owner may read and write the object.
///
/// Applies to single objects only; collection listings are left to the
/// collection-stage policies. An object without an owner grants nothing
/// through ownership.
pub fn owner_or_staff(caller: Option<&Caller>, owner: Option<Uuid>) -> bool {
    let Some(caller) = caller
    else {
        return false;
    };

    caller.is_staff || owner == Some(caller.user_id)
}

/// The caller must be authenticated and, when a permission is required, hold
/// it through its role.
pub fn role_permission(caller: Option<&Caller>, required: Option<&str>) -> bool {
    let Some(caller) = caller
    else {
        return false;
    };

    match required {
        Some(name) => caller.permissions.contains(name),
        None => true,
    }
}

/// Reads need an authenticated caller; writes need a staff caller whose scope
/// attribute at `scope` equals the target id.
pub fn scoped_admin_or_read_only(
    caller: Option<&Caller>,
    access: Access,
    scope: ScopeLevel,
    target_id: Option<Uuid>,
) -> bool {
    let Some(caller) = caller
    else {
        return false;
    };

    if access.is_read() {
        return true;
    }

    match (caller.scope_id(scope), target_id) {
        (Some(own), Some(target)) => caller.is_staff && own == target,
        _ => false,
    }
}

#[inline]
pub fn company_admin_or_read_only(caller: Option<&Caller>, access: Access, company_id: Uuid) -> bool {
    scoped_admin_or_read_only(caller, access, ScopeLevel::Company, Some(company_id))
}

#[inline]
pub fn brand_admin_or_read_only(caller: Option<&Caller>, access: Access, brand_id: Uuid) -> bool {
    scoped_admin_or_read_only(caller, access, ScopeLevel::Brand, Some(brand_id))
}

#[inline]
pub fn branch_admin_or_read_only(caller: Option<&Caller>, access: Access, branch_id: Uuid) -> bool {
    scoped_admin_or_read_only(caller, access, ScopeLevel::Branch, Some(branch_id))
}

/// Outcome of evaluating a resource's policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    /// No caller at all
    Unauthenticated,
    /// The caller is known but a policy refused it
    Denied {
        policy: Policy,
        reason: String,
    },
}

impl Decision {
    #[inline]
    pub fn is_allowed(&self) -> bool { matches!(self, Decision::Allowed) }

    /// Map the decision onto the error taxonomy: 401 for anonymous callers,
    /// 403 for refused ones.
    pub fn into_result(self) -> error::Result<()> {
        match self {
            Decision::Allowed => Ok(()),
            Decision::Unauthenticated => Err(error::AppError::unauthorized("Authentication credentials were not provided")),
            Decision::Denied {
                reason,
                ..
            } => Err(error::AppError::forbidden(reason)),
        }
    }
}

/// When a policy is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Every request, before any row is loaded
    Collection,
    /// Requests addressing one loaded row
    Object,
}

/// Name of a predicate that can be attached to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    StaffOnlyWrite,
    OwnerOrStaff,
    RolePermission,
    CompanyAdminOrReadOnly,
    BrandAdminOrReadOnly,
    BranchAdminOrReadOnly,
}

impl Policy {
    pub fn stage(self) -> Stage {
        match self {
            Policy::StaffOnlyWrite | Policy::RolePermission => Stage::Collection,
            Policy::OwnerOrStaff |
            Policy::CompanyAdminOrReadOnly |
            Policy::BrandAdminOrReadOnly |
            Policy::BranchAdminOrReadOnly => Stage::Object,
        }
    }

    fn scope(self) -> Option<ScopeLevel> {
        match self {
            Policy::CompanyAdminOrReadOnly => Some(ScopeLevel::Company),
            Policy::BrandAdminOrReadOnly => Some(ScopeLevel::Brand),
            Policy::BranchAdminOrReadOnly => Some(ScopeLevel::Branch),
            _ => None,
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::StaffOnlyWrite => write!(f, "staff_only_write"),
            Policy::OwnerOrStaff => write!(f, "owner_or_staff"),
            Policy::RolePermission => write!(f, "role_permission"),
            Policy::CompanyAdminOrReadOnly => write!(f, "company_admin_or_read_only"),
            Policy::BrandAdminOrReadOnly => write!(f, "brand_admin_or_read_only"),
            Policy::BranchAdminOrReadOnly => write!(f, "branch_admin_or_read_only"),
        }
    }
}

/// Policies attached to one resource, evaluated in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePolicy {
    /// Resource the policy is registered under, used in denial logs
    #[serde(skip)]
    pub resource:         String,
    pub policies:         Vec<Policy>,
    /// Permission the role predicate requires for reads
    pub read_permission:  Option<String>,
    /// Permission the role predicate requires for writes
    pub write_permission: Option<String>,
}

impl ResourcePolicy {
    pub fn new(policies: impl Into<Vec<Policy>>) -> Self {
        Self {
            policies: policies.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_write_permission(mut self, name: impl Into<String>) -> Self {
        self.write_permission = Some(name.into());
        self
    }

    pub fn required_permission(&self, access: Access) -> Option<&str> {
        match access {
            Access::Read => self.read_permission.as_deref(),
            Access::Write => self.write_permission.as_deref(),
        }
    }

    /// Evaluate the collection-stage policies.
    pub fn check_collection(&self, caller: Option<&Caller>, access: Access) -> Decision {
        self.evaluate(caller, access, Stage::Collection, None)
    }

    /// Evaluate the object-stage policies against a loaded row.
    pub fn check_object(&self, caller: Option<&Caller>, access: Access, target: &dyn AccessTarget) -> Decision {
        self.evaluate(caller, access, Stage::Object, Some(target))
    }

    fn evaluate(
        &self,
        caller: Option<&Caller>,
        access: Access,
        stage: Stage,
        target: Option<&dyn AccessTarget>,
    ) -> Decision {
        let Some(who) = caller
        else {
            return Decision::Unauthenticated;
        };

        for policy in self.policies.iter().copied().filter(|p| p.stage() == stage) {
            let allowed = match policy {
                Policy::StaffOnlyWrite => staff_only_write(caller, access),
                Policy::RolePermission => role_permission(caller, self.required_permission(access)),
                Policy::OwnerOrStaff => owner_or_staff(caller, target.and_then(|t| t.owner_id())),
                Policy::CompanyAdminOrReadOnly | Policy::BrandAdminOrReadOnly | Policy::BranchAdminOrReadOnly => {
                    match policy.scope() {
                        Some(scope) => {
                            scoped_admin_or_read_only(caller, access, scope, target.and_then(|t| t.scope_id(scope)))
                        },
                        None => false,
                    }
                },
            };

            if !allowed {
                let reason = self.denial_reason(policy, access);
                logging::log_access_denied!(who.user_id, self.resource, stage_name(stage), policy, reason);
                return Decision::Denied {
                    policy,
                    reason,
                };
            }
        }

        Decision::Allowed
    }

    fn denial_reason(&self, policy: Policy, access: Access) -> String {
        match policy {
            Policy::StaffOnlyWrite => "Only staff members may modify this resource".to_string(),
            Policy::OwnerOrStaff => {
                match access {
                    Access::Read => "Only the owner or a staff member may view this object".to_string(),
                    Access::Write => "Only the owner or a staff member may modify this object".to_string(),
                }
            },
            Policy::RolePermission => {
                match self.required_permission(access) {
                    Some(name) => format!("Permission '{}' is required", name),
                    None => "Permission denied".to_string(),
                }
            },
            Policy::CompanyAdminOrReadOnly | Policy::BrandAdminOrReadOnly | Policy::BranchAdminOrReadOnly => {
                let scope = policy.scope().map(|s| s.to_string()).unwrap_or_default();
                format!("Only the {} administrator may modify this object", scope)
            },
        }
    }
}

fn stage_name(stage: Stage) -> &'static str {
    match stage {
        Stage::Collection => "collection",
        Stage::Object => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caller::PermissionSet;

    struct Owned(Uuid);

    impl AccessTarget for Owned {
        fn owner_id(&self) -> Option<Uuid> { Some(self.0) }
    }

    fn caller(is_staff: bool) -> Caller {
        Caller {
            user_id: Uuid::new_v4(),
            username: "clerk".to_string(),
            email: "clerk@example.com".to_string(),
            is_staff,
            role_id: None,
            permissions: PermissionSet::default(),
            company_id: None,
            brand_id: None,
            branch_id: None,
        }
    }

    #[test]
    fn test_anonymous_is_denied_everywhere() {
        for access in [Access::Read, Access::Write] {
            assert!(!staff_only_write(None, access));
            assert!(!scoped_admin_or_read_only(None, access, ScopeLevel::Company, None));
            assert!(!scoped_admin_or_read_only(None, access, ScopeLevel::Brand, Some(Uuid::new_v4())));
        }
        assert!(!owner_or_staff(None, Some(Uuid::new_v4())));
        assert!(!role_permission(None, None));
    }

    #[test]
    fn test_owner_without_owner_id() {
        let user = caller(false);
        assert!(!owner_or_staff(Some(&user), None));
        assert!(owner_or_staff(Some(&caller(true)), None));
    }

    #[test]
    fn test_owner_or_staff_guards_reads_of_one_object() {
        let owner = caller(false);
        let colleague = caller(false);

        assert!(owner_or_staff(Some(&owner), Some(owner.user_id)));
        assert!(!owner_or_staff(Some(&colleague), Some(owner.user_id)));

        let policy = ResourcePolicy::new([Policy::OwnerOrStaff]);
        assert!(policy.check_collection(Some(&colleague), Access::Read).is_allowed());
        match policy.check_object(Some(&colleague), Access::Read, &Owned(owner.user_id)) {
            Decision::Denied {
                policy,
                reason,
            } => {
                assert_eq!(policy, Policy::OwnerOrStaff);
                assert_eq!(reason, "Only the owner or a staff member may view this object");
            },
            other => panic!("Expected a denial, got {:?}", other),
        }
    }

    #[test]
    fn test_scoped_admin_without_scope() {
        let admin = caller(true);
        assert!(!branch_admin_or_read_only(Some(&admin), Access::Write, Uuid::new_v4()));
        assert!(branch_admin_or_read_only(Some(&admin), Access::Read, Uuid::new_v4()));
    }

    #[test]
    fn test_policy_stages() {
        assert_eq!(Policy::StaffOnlyWrite.stage(), Stage::Collection);
        assert_eq!(Policy::RolePermission.stage(), Stage::Collection);
        assert_eq!(Policy::OwnerOrStaff.stage(), Stage::Object);
        assert_eq!(Policy::BrandAdminOrReadOnly.stage(), Stage::Object);
    }

    #[test]
    fn test_policy_serde_names() {
        let policy: Policy = serde_json::from_str("\"company_admin_or_read_only\"").unwrap();
        assert_eq!(policy, Policy::CompanyAdminOrReadOnly);
        assert_eq!(policy.to_string(), "company_admin_or_read_only");
    }

    #[test]
    fn test_decision_into_result() {
        assert!(Decision::Allowed.into_result().is_ok());
        assert_eq!(
            Decision::Unauthenticated.into_result().unwrap_err().status(),
            http::StatusCode::UNAUTHORIZED
        );
        let denied = Decision::Denied {
            policy: Policy::RolePermission,
            reason: "Permission 'edit_receipts' is required".to_string(),
        };
        assert_eq!(denied.into_result().unwrap_err().status(), http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_empty_policy_needs_authentication_only() {
        let policy = ResourcePolicy::default();
        assert_eq!(policy.check_collection(None, Access::Read), Decision::Unauthenticated);
        assert!(policy.check_collection(Some(&caller(false)), Access::Write).is_allowed());
    }
}
