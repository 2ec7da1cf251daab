//! # Organization Handlers
//!
//! Companies, brands, branches, roles and people.

use auth::resources;
use entity::{branches, brands, companies, people, roles};
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Select};
use uuid::Uuid;

use super::{NoFilter, Resource};
use crate::dto::organization::{
    BranchFilter,
    BranchPayload,
    BrandFilter,
    BrandPayload,
    CompanyPayload,
    PersonFilter,
    PersonPayload,
    RolePayload,
};

pub struct CompanyResource;

impl Resource for CompanyResource {
    type ActiveModel = companies::ActiveModel;
    type Entity = companies::Entity;
    type Filter = NoFilter;
    type Id = Uuid;
    type Model = companies::Model;
    type Payload = CompanyPayload;

    const LABEL: &'static str = "Company";
    const RESOURCE: &'static str = resources::COMPANIES;

    fn order(query: Select<companies::Entity>) -> Select<companies::Entity> {
        query
            .order_by_asc(companies::Column::Title)
            .order_by_asc(companies::Column::Id)
    }
}

pub struct BrandResource;

impl Resource for BrandResource {
    type ActiveModel = brands::ActiveModel;
    type Entity = brands::Entity;
    type Filter = BrandFilter;
    type Id = Uuid;
    type Model = brands::Model;
    type Payload = BrandPayload;

    const LABEL: &'static str = "Brand";
    const RESOURCE: &'static str = resources::BRANDS;

    fn filter(mut query: Select<brands::Entity>, filter: &BrandFilter) -> Select<brands::Entity> {
        if let Some(company_id) = filter.company {
            query = query.filter(brands::Column::CompanyId.eq(company_id));
        }
        query
    }

    fn order(query: Select<brands::Entity>) -> Select<brands::Entity> {
        query
            .order_by_asc(brands::Column::Name)
            .order_by_asc(brands::Column::Id)
    }
}

pub struct BranchResource;

impl Resource for BranchResource {
    type ActiveModel = branches::ActiveModel;
    type Entity = branches::Entity;
    type Filter = BranchFilter;
    type Id = Uuid;
    type Model = branches::Model;
    type Payload = BranchPayload;

    const LABEL: &'static str = "Branch";
    const RESOURCE: &'static str = resources::BRANCHES;

    fn filter(mut query: Select<branches::Entity>, filter: &BranchFilter) -> Select<branches::Entity> {
        if let Some(brand_id) = filter.brand {
            query = query.filter(branches::Column::BrandId.eq(brand_id));
        }
        query
    }

    fn order(query: Select<branches::Entity>) -> Select<branches::Entity> {
        query
            .order_by_asc(branches::Column::Name)
            .order_by_asc(branches::Column::Id)
    }
}

pub struct RoleResource;

impl Resource for RoleResource {
    type ActiveModel = roles::ActiveModel;
    type Entity = roles::Entity;
    type Filter = NoFilter;
    type Id = Uuid;
    type Model = roles::Model;
    type Payload = RolePayload;

    const LABEL: &'static str = "Role";
    const RESOURCE: &'static str = resources::ROLES;

    fn order(query: Select<roles::Entity>) -> Select<roles::Entity> {
        query
            .order_by_asc(roles::Column::Name)
            .order_by_asc(roles::Column::Id)
    }
}

pub struct PersonResource;

impl Resource for PersonResource {
    type ActiveModel = people::ActiveModel;
    type Entity = people::Entity;
    type Filter = PersonFilter;
    type Id = Uuid;
    type Model = people::Model;
    type Payload = PersonPayload;

    const LABEL: &'static str = "Person";
    const RESOURCE: &'static str = resources::PEOPLE;

    fn filter(mut query: Select<people::Entity>, filter: &PersonFilter) -> Select<people::Entity> {
        if let Some(branch_id) = filter.branch {
            query = query.filter(people::Column::BranchId.eq(branch_id));
        }
        if let Some(role_id) = filter.role {
            query = query.filter(people::Column::RoleId.eq(role_id));
        }
        query
    }

    fn order(query: Select<people::Entity>) -> Select<people::Entity> {
        query
            .order_by_asc(people::Column::FullName)
            .order_by_asc(people::Column::Id)
    }
}
