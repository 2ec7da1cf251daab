//! # Organization Data Transfer Objects
//!
//! Payloads and filters for companies, brands, branches, roles and people.

use entity::{branches, brands, companies, people, roles};
use sea_orm::Set;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::{default_true, empty_list, WritePayload};

/// Company create/replace payload
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CompanyPayload {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title:       String,
    #[validate(length(min = 1, max = 50, message = "Tax number must be between 1 and 50 characters"))]
    pub tax_number:  String,
    #[validate(email(message = "Invalid email address"))]
    pub email:       String,
    #[validate(length(min = 1, max = 34, message = "IBAN must be between 1 and 34 characters"))]
    pub iban:        String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active:   bool,
    /// Free-form JSON
    #[serde(default)]
    pub metadata:    Option<serde_json::Value>,
}

impl WritePayload<companies::ActiveModel> for CompanyPayload {
    fn apply(self, active: &mut companies::ActiveModel) {
        active.title = Set(self.title);
        active.tax_number = Set(self.tax_number);
        active.email = Set(self.email);
        active.iban = Set(self.iban);
        active.description = Set(self.description);
        active.is_active = Set(self.is_active);
        active.metadata = Set(self.metadata);
    }
}

/// Brand create/replace payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct BrandPayload {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name:       String,
    pub company_id: Uuid,
}

impl WritePayload<brands::ActiveModel> for BrandPayload {
    fn apply(self, active: &mut brands::ActiveModel) {
        active.name = Set(self.name);
        active.company_id = Set(self.company_id);
    }
}

/// Brand list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BrandFilter {
    pub company: Option<Uuid>,
}

/// Branch create/replace payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct BranchPayload {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name:     String,
    pub address:  String,
    #[validate(length(max = 50, message = "Phone must not exceed 50 characters"))]
    pub phone:    String,
    #[validate(email(message = "Invalid email address"))]
    pub email:    String,
    pub brand_id: Uuid,
}

impl WritePayload<branches::ActiveModel> for BranchPayload {
    fn apply(self, active: &mut branches::ActiveModel) {
        active.name = Set(self.name);
        active.address = Set(self.address);
        active.phone = Set(self.phone);
        active.email = Set(self.email);
        active.brand_id = Set(self.brand_id);
    }
}

/// Branch list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BranchFilter {
    pub brand: Option<Uuid>,
}

/// Role create/replace payload
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct RolePayload {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name:         String,
    #[validate(length(min = 1, max = 255, message = "Display name must be between 1 and 255 characters"))]
    pub display_name: String,
    #[serde(default)]
    pub description:  Option<String>,
    /// Either a list of permission names or an object keyed by them
    #[serde(default = "empty_list")]
    pub permissions:  serde_json::Value,
}

impl WritePayload<roles::ActiveModel> for RolePayload {
    fn apply(self, active: &mut roles::ActiveModel) {
        active.name = Set(self.name);
        active.display_name = Set(self.display_name);
        active.description = Set(self.description);
        active.permissions = Set(self.permissions);
    }
}

/// Person create/replace payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct PersonPayload {
    #[validate(length(min = 1, max = 255, message = "Full name must be between 1 and 255 characters"))]
    pub full_name:   String,
    #[validate(length(min = 1, max = 20, message = "National id must be between 1 and 20 characters"))]
    pub national_id: String,
    pub address:     String,
    #[validate(length(max = 50, message = "Phone must not exceed 50 characters"))]
    pub phone:       String,
    #[validate(email(message = "Invalid email address"))]
    pub email:       String,
    #[validate(length(max = 34, message = "IBAN must not exceed 34 characters"))]
    pub iban:        String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active:   bool,
    #[serde(default)]
    pub role_id:     Option<Uuid>,
    pub branch_id:   Uuid,
}

impl WritePayload<people::ActiveModel> for PersonPayload {
    fn apply(self, active: &mut people::ActiveModel) {
        active.full_name = Set(self.full_name);
        active.national_id = Set(self.national_id);
        active.address = Set(self.address);
        active.phone = Set(self.phone);
        active.email = Set(self.email);
        active.iban = Set(self.iban);
        active.description = Set(self.description);
        active.is_active = Set(self.is_active);
        active.role_id = Set(self.role_id);
        active.branch_id = Set(self.branch_id);
    }
}

/// Person list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PersonFilter {
    pub branch: Option<Uuid>,
    pub role:   Option<Uuid>,
}
