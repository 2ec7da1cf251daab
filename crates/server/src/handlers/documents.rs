//! # Template and Calendar Event Handlers

use auth::{resources, Caller};
use entity::{calendar_events, templates};
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Select, Set};
use uuid::Uuid;

use super::Resource;
use crate::dto::documents::{CalendarEventFilter, CalendarEventPayload, TemplateFilter, TemplatePayload};

pub struct TemplateResource;

impl Resource for TemplateResource {
    type ActiveModel = templates::ActiveModel;
    type Entity = templates::Entity;
    type Filter = TemplateFilter;
    type Id = Uuid;
    type Model = templates::Model;
    type Payload = TemplatePayload;

    const LABEL: &'static str = "Template";
    const RESOURCE: &'static str = resources::TEMPLATES;

    fn filter(mut query: Select<templates::Entity>, filter: &TemplateFilter) -> Select<templates::Entity> {
        if let Some(template_type) = filter.template_type {
            query = query.filter(templates::Column::TemplateType.eq(template_type));
        }
        query
    }

    fn order(query: Select<templates::Entity>) -> Select<templates::Entity> {
        query
            .order_by_desc(templates::Column::CreatedAt)
            .order_by_asc(templates::Column::Id)
    }

    fn set_owner(active: &mut templates::ActiveModel, caller: &Caller) { active.created_by = Set(Some(caller.user_id)); }
}

pub struct CalendarEventResource;

impl Resource for CalendarEventResource {
    type ActiveModel = calendar_events::ActiveModel;
    type Entity = calendar_events::Entity;
    type Filter = CalendarEventFilter;
    type Id = Uuid;
    type Model = calendar_events::Model;
    type Payload = CalendarEventPayload;

    const LABEL: &'static str = "Calendar event";
    const RESOURCE: &'static str = resources::CALENDAR_EVENTS;

    fn filter(
        mut query: Select<calendar_events::Entity>,
        filter: &CalendarEventFilter,
    ) -> Select<calendar_events::Entity> {
        if let Some(category) = filter.category {
            query = query.filter(calendar_events::Column::Category.eq(category));
        }
        query
    }

    fn order(query: Select<calendar_events::Entity>) -> Select<calendar_events::Entity> {
        query
            .order_by_asc(calendar_events::Column::Start)
            .order_by_asc(calendar_events::Column::Id)
    }

    fn set_owner(active: &mut calendar_events::ActiveModel, caller: &Caller) {
        active.created_by = Set(Some(caller.user_id));
    }
}
