//! # Event and Report Handlers

use auth::{resources, Caller};
use entity::{events, reports};
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Select, Set};

use super::Resource;
use crate::dto::records::{EventFilter, EventPayload, ReportFilter, ReportPayload};

pub struct EventResource;

impl Resource for EventResource {
    type ActiveModel = events::ActiveModel;
    type Entity = events::Entity;
    type Filter = EventFilter;
    type Id = i32;
    type Model = events::Model;
    type Payload = EventPayload;

    const LABEL: &'static str = "Event";
    const RESOURCE: &'static str = resources::EVENTS;

    fn filter(mut query: Select<events::Entity>, filter: &EventFilter) -> Select<events::Entity> {
        if let Some(event_type) = filter.event_type {
            query = query.filter(events::Column::EventType.eq(event_type));
        }
        if let Some(status) = filter.status {
            query = query.filter(events::Column::Status.eq(status));
        }
        query
    }

    fn order(query: Select<events::Entity>) -> Select<events::Entity> { query.order_by_asc(events::Column::Id) }
}

pub struct ReportResource;

impl Resource for ReportResource {
    type ActiveModel = reports::ActiveModel;
    type Entity = reports::Entity;
    type Filter = ReportFilter;
    type Id = i32;
    type Model = reports::Model;
    type Payload = ReportPayload;

    const LABEL: &'static str = "Report";
    const RESOURCE: &'static str = resources::REPORTS;

    fn filter(mut query: Select<reports::Entity>, filter: &ReportFilter) -> Select<reports::Entity> {
        if let Some(report_type) = filter.report_type {
            query = query.filter(reports::Column::ReportType.eq(report_type));
        }
        if let Some(status) = filter.status {
            query = query.filter(reports::Column::Status.eq(status));
        }
        query
    }

    fn order(query: Select<reports::Entity>) -> Select<reports::Entity> { query.order_by_asc(reports::Column::Id) }

    fn set_owner(active: &mut reports::ActiveModel, caller: &Caller) { active.created_by = Set(caller.user_id); }
}
