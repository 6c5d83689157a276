use super::{
    device::{from_auto_event_models_to_dtos, to_auto_event_models, AutoEvent},
    is_zero_i64,
};
use crate::{
    models::{self, AdminState},
    validation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionWatcher {
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
    #[garde(custom(validation::unreserved_name))]
    pub name: String,
    #[serde(default)]
    #[garde(custom(validation::unreserved_name))]
    pub service_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[garde(skip)]
    pub labels: Vec<String>,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub identifiers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub blocking_identifiers: HashMap<String, Vec<String>>,
    #[garde(skip)]
    pub admin_state: AdminState,
    #[garde(dive)]
    pub discovered_device: DiscoveredDevice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredDevice {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(custom(validation::empty_or_unreserved))]
    pub profile_name: String,
    #[garde(skip)]
    pub admin_state: AdminState,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[garde(dive)]
    pub auto_events: Vec<AutoEvent>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub properties: HashMap<String, serde_json::Value>,
}

/// Partial update of a provision watcher, identified by id or name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProvisionWatcher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_uuid))]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_unreserved_name))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_unreserved_name))]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub identifiers: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub blocking_identifiers: Option<HashMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub admin_state: Option<AdminState>,
    #[serde(default)]
    #[garde(dive)]
    pub discovered_device: UpdateDiscoveredDevice,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDiscoveredDevice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_unreserved_name))]
    pub profile_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub admin_state: Option<AdminState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(dive)]
    pub auto_events: Option<Vec<AutoEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

pub fn to_discovered_device_model(dto: DiscoveredDevice) -> models::DiscoveredDevice {
    models::DiscoveredDevice {
        profile_name: dto.profile_name,
        admin_state: dto.admin_state,
        auto_events: to_auto_event_models(dto.auto_events),
        properties: dto.properties,
    }
}

pub fn from_discovered_device_model_to_dto(model: models::DiscoveredDevice) -> DiscoveredDevice {
    DiscoveredDevice {
        profile_name: model.profile_name,
        admin_state: model.admin_state,
        auto_events: from_auto_event_models_to_dtos(model.auto_events),
        properties: model.properties,
    }
}

/// Transform the ProvisionWatcher DTO to the ProvisionWatcher model
pub fn to_provision_watcher_model(dto: ProvisionWatcher) -> models::ProvisionWatcher {
    models::ProvisionWatcher {
        id: dto.id,
        name: dto.name,
        service_name: dto.service_name,
        labels: dto.labels,
        identifiers: dto.identifiers,
        blocking_identifiers: dto.blocking_identifiers,
        admin_state: dto.admin_state,
        discovered_device: to_discovered_device_model(dto.discovered_device),
        created: dto.created,
        modified: dto.modified,
    }
}

/// Transform the ProvisionWatcher model to the ProvisionWatcher DTO
pub fn from_provision_watcher_model_to_dto(model: models::ProvisionWatcher) -> ProvisionWatcher {
    ProvisionWatcher {
        created: model.created,
        modified: model.modified,
        id: model.id,
        name: model.name,
        service_name: model.service_name,
        labels: model.labels,
        identifiers: model.identifiers,
        blocking_identifiers: model.blocking_identifiers,
        admin_state: model.admin_state,
        discovered_device: from_discovered_device_model_to_dto(model.discovered_device),
    }
}

pub fn replace_provision_watcher_model_fields_with_dto(
    watcher: &mut models::ProvisionWatcher,
    patch: &UpdateProvisionWatcher,
) {
    if let Some(service_name) = &patch.service_name {
        watcher.service_name = service_name.clone();
    }
    if let Some(labels) = &patch.labels {
        watcher.labels = labels.clone();
    }
    if let Some(identifiers) = &patch.identifiers {
        watcher.identifiers = identifiers.clone();
    }
    if let Some(blocking_identifiers) = &patch.blocking_identifiers {
        watcher.blocking_identifiers = blocking_identifiers.clone();
    }
    if let Some(admin_state) = patch.admin_state {
        watcher.admin_state = admin_state;
    }

    let device = &patch.discovered_device;
    if let Some(profile_name) = &device.profile_name {
        watcher.discovered_device.profile_name = profile_name.clone();
    }
    if let Some(admin_state) = device.admin_state {
        watcher.discovered_device.admin_state = admin_state;
    }
    if let Some(auto_events) = &device.auto_events {
        watcher.discovered_device.auto_events = to_auto_event_models(auto_events.clone());
    }
    if let Some(properties) = &device.properties {
        watcher.discovered_device.properties = properties.clone();
    }
}
