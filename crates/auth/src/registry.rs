//! # Policy Registry
//!
//! Maps every resource to the policies that gate it. The defaults can be
//! overridden per resource from a JSON file:
//!
//! ```json
//! {
//!     "people": { "policies": ["role_permission"], "write_permission": "manage_staff" },
//!     "events": { "policies": ["staff_only_write", "role_permission"], "read_permission": "view_events" }
//! }
//! ```

use std::{collections::BTreeMap, path::Path};

use error::{AppError, Result};
use tracing::info;

use crate::permissions::{Policy, ResourcePolicy};

/// Resource names used as registry keys and in URLs.
pub mod resources {
    pub const COMPANIES: &str = "companies";
    pub const BRANDS: &str = "brands";
    pub const BRANCHES: &str = "branches";
    pub const ROLES: &str = "roles";
    pub const PEOPLE: &str = "people";
    pub const RECEIPTS: &str = "receipts";
    pub const TEMPLATES: &str = "templates";
    pub const CALENDAR_EVENTS: &str = "calendar-events";
    pub const FILES: &str = "files";
    pub const EVENTS: &str = "events";
    pub const REPORTS: &str = "reports";

    pub const ALL: [&str; 11] = [
        COMPANIES,
        BRANDS,
        BRANCHES,
        ROLES,
        PEOPLE,
        RECEIPTS,
        TEMPLATES,
        CALENDAR_EVENTS,
        FILES,
        EVENTS,
        REPORTS,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRegistry {
    entries: BTreeMap<String, ResourcePolicy>,
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        use resources::*;
        use Policy::*;

        let entries = BTreeMap::from([
            (COMPANIES.to_string(), ResourcePolicy::new([StaffOnlyWrite, CompanyAdminOrReadOnly])),
            (BRANDS.to_string(), ResourcePolicy::new([StaffOnlyWrite, BrandAdminOrReadOnly])),
            (BRANCHES.to_string(), ResourcePolicy::new([StaffOnlyWrite, BranchAdminOrReadOnly])),
            (ROLES.to_string(), ResourcePolicy::new([StaffOnlyWrite])),
            (
                PEOPLE.to_string(),
                ResourcePolicy::new([RolePermission]).with_write_permission("edit_people"),
            ),
            (
                RECEIPTS.to_string(),
                ResourcePolicy::new([RolePermission, OwnerOrStaff]).with_write_permission("edit_receipts"),
            ),
            (
                TEMPLATES.to_string(),
                ResourcePolicy::new([RolePermission, OwnerOrStaff]).with_write_permission("edit_templates"),
            ),
            (CALENDAR_EVENTS.to_string(), ResourcePolicy::new([OwnerOrStaff])),
            (FILES.to_string(), ResourcePolicy::new([OwnerOrStaff])),
            (EVENTS.to_string(), ResourcePolicy::new([StaffOnlyWrite])),
            (
                REPORTS.to_string(),
                ResourcePolicy::new([RolePermission, OwnerOrStaff]).with_write_permission("edit_reports"),
            ),
        ]);

        let mut registry = Self {
            entries: BTreeMap::new(),
        };
        for (resource, policy) in entries {
            registry.insert(resource, policy);
        }
        registry
    }
}

impl PolicyRegistry {
    /// Policy for a resource.
    ///
    /// # Errors
    ///
    /// Unknown resources are an internal error: every route names a
    /// registered resource.
    pub fn policy(&self, resource: &str) -> Result<&ResourcePolicy> {
        self.entries
            .get(resource)
            .ok_or_else(|| AppError::internal(format!("No policy registered for resource '{}'", resource)))
    }

    /// Replace the policy of one resource.
    ///
    /// # Errors
    ///
    /// Fails for resource names the service does not expose.
    pub fn set(&mut self, resource: &str, policy: ResourcePolicy) -> Result<()> {
        if !resources::ALL.contains(&resource) {
            return Err(AppError::config(format!("Unknown resource '{}' in policy overrides", resource)));
        }
        self.insert(resource.to_string(), policy);
        Ok(())
    }

    fn insert(&mut self, resource: String, mut policy: ResourcePolicy) {
        policy.resource = resource.clone();
        self.entries.insert(resource, policy);
    }

    /// Merge overrides from a JSON document over the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: BTreeMap<String, ResourcePolicy> =
            serde_json::from_str(json).map_err(|e| AppError::config(format!("Invalid policy file: {}", e)))?;

        let mut registry = Self::default();
        for (resource, policy) in overrides {
            info!(resource = %resource, policies = ?policy.policies, "Overriding resource policy");
            registry.set(&resource, policy)?;
        }
        Ok(registry)
    }

    /// Load overrides from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("Failed to read policy file {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourcePolicy)> {
        self.entries.iter().map(|(name, policy)| (name.as_str(), policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_resource() {
        let registry = PolicyRegistry::default();
        for resource in resources::ALL {
            assert_eq!(registry.policy(resource).unwrap().resource, resource);
        }
        assert_eq!(registry.iter().count(), resources::ALL.len());
    }

    #[test]
    fn test_default_write_permissions() {
        let registry = PolicyRegistry::default();
        let receipts = registry.policy(resources::RECEIPTS).unwrap();
        assert_eq!(receipts.write_permission.as_deref(), Some("edit_receipts"));
        assert_eq!(receipts.read_permission, None);
        assert_eq!(
            registry.policy(resources::REPORTS).unwrap().write_permission.as_deref(),
            Some("edit_reports")
        );
    }

    #[test]
    fn test_unknown_resource() {
        let registry = PolicyRegistry::default();
        assert!(registry.policy("invoices").is_err());
        assert!(PolicyRegistry::from_json(r#"{"invoices": {"policies": []}}"#).is_err());
    }

    #[test]
    fn test_override_replaces_single_entry() {
        let registry = PolicyRegistry::from_json(
            r#"{"events": {"policies": ["role_permission"], "write_permission": "edit_events"}}"#,
        )
        .unwrap();

        let events = registry.policy(resources::EVENTS).unwrap();
        assert_eq!(events.resource, resources::EVENTS);
        assert_eq!(events.policies, vec![Policy::RolePermission]);
        assert_eq!(events.write_permission.as_deref(), Some("edit_events"));
        assert_eq!(
            registry.policy(resources::ROLES).unwrap(),
            PolicyRegistry::default().policy(resources::ROLES).unwrap()
        );
    }

    #[test]
    fn test_malformed_override() {
        assert!(PolicyRegistry::from_json(r#"{"events": {"policies": ["nobody"]}}"#).is_err());
        assert!(PolicyRegistry::from_json("not json").is_err());
    }
}
