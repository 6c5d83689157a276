use super::{is_zero_f64, is_zero_i64};
use crate::{
    models::{self, AdminState, OperatingState},
    validation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    #[garde(skip)]
    pub created: i64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    #[garde(skip)]
    pub modified: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(custom(validation::empty_or_uuid))]
    pub id: String,
    #[serde(default)]
    #[garde(custom(validation::no_reserved_name))]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub parent: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub admin_state: AdminState,
    #[garde(skip)]
    pub operating_state: OperatingState,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[garde(skip)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    #[garde(skip)]
    pub location: serde_json::Value,
    #[serde(default)]
    #[garde(custom(validation::unreserved_name))]
    pub service_name: String,
    #[serde(default)]
    #[garde(custom(validation::unreserved_name))]
    pub profile_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[garde(dive)]
    pub auto_events: Vec<AutoEvent>,
    #[serde(default)]
    #[garde(skip)]
    pub protocols: HashMap<String, HashMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub tags: HashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub properties: HashMap<String, serde_json::Value>,
}

/// Partial update of a device, identified by id or name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDevice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_uuid))]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_no_reserved_name))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub admin_state: Option<AdminState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub operating_state: Option<OperatingState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_unreserved_name))]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_unreserved_name))]
    pub profile_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub location: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(dive)]
    pub auto_events: Option<Vec<AutoEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub protocols: Option<HashMap<String, HashMap<String, serde_json::Value>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub tags: Option<HashMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Schedules readings of one device resource or command
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct AutoEvent {
    #[serde(default)]
    #[garde(custom(validation::duration))]
    pub interval: String,
    #[serde(default)]
    #[garde(skip)]
    pub on_change: bool,
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    #[garde(skip)]
    pub on_change_threshold: f64,
    #[serde(default)]
    #[garde(custom(validation::non_empty))]
    pub source_name: String,
}

pub fn to_auto_event_model(dto: AutoEvent) -> models::AutoEvent {
    models::AutoEvent {
        interval: dto.interval,
        on_change: dto.on_change,
        on_change_threshold: dto.on_change_threshold,
        source_name: dto.source_name,
    }
}

pub fn to_auto_event_models(dtos: Vec<AutoEvent>) -> Vec<models::AutoEvent> {
    dtos.into_iter().map(to_auto_event_model).collect()
}

pub fn from_auto_event_model_to_dto(model: models::AutoEvent) -> AutoEvent {
    AutoEvent {
        interval: model.interval,
        on_change: model.on_change,
        on_change_threshold: model.on_change_threshold,
        source_name: model.source_name,
    }
}

pub fn from_auto_event_models_to_dtos(models: Vec<models::AutoEvent>) -> Vec<AutoEvent> {
    models.into_iter().map(from_auto_event_model_to_dto).collect()
}

/// Transform the Device DTO to the Device model
pub fn to_device_model(dto: Device) -> models::Device {
    models::Device {
        id: dto.id,
        name: dto.name,
        parent: dto.parent,
        description: dto.description,
        admin_state: dto.admin_state,
        operating_state: dto.operating_state,
        labels: dto.labels,
        location: dto.location,
        service_name: dto.service_name,
        profile_name: dto.profile_name,
        auto_events: to_auto_event_models(dto.auto_events),
        protocols: dto.protocols,
        tags: dto.tags,
        properties: dto.properties,
        created: dto.created,
        modified: dto.modified,
    }
}

pub fn to_device_models(dtos: Vec<Device>) -> Vec<models::Device> {
    dtos.into_iter().map(to_device_model).collect()
}

/// Transform the Device model to the Device DTO
pub fn from_device_model_to_dto(model: models::Device) -> Device {
    Device {
        created: model.created,
        modified: model.modified,
        id: model.id,
        name: model.name,
        parent: model.parent,
        description: model.description,
        admin_state: model.admin_state,
        operating_state: model.operating_state,
        labels: model.labels,
        location: model.location,
        service_name: model.service_name,
        profile_name: model.profile_name,
        auto_events: from_auto_event_models_to_dtos(model.auto_events),
        protocols: model.protocols,
        tags: model.tags,
        properties: model.properties,
    }
}

pub fn from_device_models_to_dtos(models: Vec<models::Device>) -> Vec<Device> {
    models.into_iter().map(from_device_model_to_dto).collect()
}

/// Overwrite the fields of `device` that are present in `patch`.
///
/// `id` and `name` identify the device being updated and are not copied.
pub fn replace_device_model_fields_with_dto(device: &mut models::Device, patch: &UpdateDevice) {
    if let Some(parent) = &patch.parent {
        device.parent = parent.clone();
    }
    if let Some(description) = &patch.description {
        device.description = description.clone();
    }
    if let Some(admin_state) = patch.admin_state {
        device.admin_state = admin_state;
    }
    if let Some(operating_state) = patch.operating_state {
        device.operating_state = operating_state;
    }
    if let Some(service_name) = &patch.service_name {
        device.service_name = service_name.clone();
    }
    if let Some(profile_name) = &patch.profile_name {
        device.profile_name = profile_name.clone();
    }
    if let Some(labels) = &patch.labels {
        device.labels = labels.clone();
    }
    if let Some(location) = &patch.location {
        device.location = location.clone();
    }
    if let Some(auto_events) = &patch.auto_events {
        device.auto_events = to_auto_event_models(auto_events.clone());
    }
    if let Some(protocols) = &patch.protocols {
        device.protocols = protocols.clone();
    }
    if let Some(tags) = &patch.tags {
        device.tags = tags.clone();
    }
    if let Some(properties) = &patch.properties {
        device.properties = properties.clone();
    }
}
