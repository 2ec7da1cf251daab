//! Attributes object-stage policies read from a loaded row.

use entity::{branches, brands, calendar_events, companies, events, people, receipts, reports, roles, templates, uploaded_files};
use uuid::Uuid;

use crate::caller::ScopeLevel;

/// A row an object-stage policy can be evaluated against.
pub trait AccessTarget {
    /// User that owns the row, if the row records one.
    fn owner_id(&self) -> Option<Uuid> { None }

    /// Id the scoped-admin policies compare with the caller's scope.
    fn scope_id(&self, _scope: ScopeLevel) -> Option<Uuid> { None }
}

impl AccessTarget for companies::Model {
    fn scope_id(&self, scope: ScopeLevel) -> Option<Uuid> { (scope == ScopeLevel::Company).then_some(self.id) }
}

impl AccessTarget for brands::Model {
    fn scope_id(&self, scope: ScopeLevel) -> Option<Uuid> { (scope == ScopeLevel::Brand).then_some(self.id) }
}

impl AccessTarget for branches::Model {
    fn scope_id(&self, scope: ScopeLevel) -> Option<Uuid> { (scope == ScopeLevel::Branch).then_some(self.id) }
}

impl AccessTarget for roles::Model {}

impl AccessTarget for people::Model {
    fn scope_id(&self, scope: ScopeLevel) -> Option<Uuid> { (scope == ScopeLevel::Branch).then_some(self.branch_id) }
}

impl AccessTarget for receipts::Model {
    fn owner_id(&self) -> Option<Uuid> { self.created_by }
}

impl AccessTarget for templates::Model {
    fn owner_id(&self) -> Option<Uuid> { self.created_by }
}

impl AccessTarget for calendar_events::Model {
    fn owner_id(&self) -> Option<Uuid> { self.created_by }

    fn scope_id(&self, scope: ScopeLevel) -> Option<Uuid> {
        match scope {
            ScopeLevel::Company => self.related_company_id,
            ScopeLevel::Brand => self.related_brand_id,
            ScopeLevel::Branch => self.related_branch_id,
        }
    }
}

impl AccessTarget for uploaded_files::Model {
    fn owner_id(&self) -> Option<Uuid> { self.uploaded_by }
}

impl AccessTarget for events::Model {}

impl AccessTarget for reports::Model {
    fn owner_id(&self) -> Option<Uuid> { Some(self.created_by) }

    fn scope_id(&self, scope: ScopeLevel) -> Option<Uuid> {
        match scope {
            ScopeLevel::Company => self.company_id,
            ScopeLevel::Brand => self.brand_id,
            ScopeLevel::Branch => self.branch_id,
        }
    }
}
