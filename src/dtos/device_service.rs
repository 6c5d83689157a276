use super::is_zero_i64;
use crate::{
    models::{self, AdminState},
    validation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeviceService {
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
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    #[garde(skip)]
    pub last_connected: i64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    #[garde(skip)]
    pub last_reported: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[garde(skip)]
    pub labels: Vec<String>,
    #[serde(default)]
    #[garde(custom(validation::uri))]
    pub base_address: String,
    #[garde(skip)]
    pub admin_state: AdminState,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub properties: HashMap<String, serde_json::Value>,
}

/// Partial update of a device service, identified by id or name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_uuid))]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_unreserved_name))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_uri))]
    pub base_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub admin_state: Option<AdminState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Transform the DeviceService DTO to the DeviceService model
pub fn to_device_service_model(dto: DeviceService) -> models::DeviceService {
    models::DeviceService {
        id: dto.id,
        name: dto.name,
        description: dto.description,
        last_connected: dto.last_connected,
        last_reported: dto.last_reported,
        labels: dto.labels,
        base_address: dto.base_address,
        admin_state: dto.admin_state,
        properties: dto.properties,
        created: dto.created,
        modified: dto.modified,
    }
}

/// Transform the DeviceService model to the DeviceService DTO
pub fn from_device_service_model_to_dto(model: models::DeviceService) -> DeviceService {
    DeviceService {
        created: model.created,
        modified: model.modified,
        id: model.id,
        name: model.name,
        description: model.description,
        last_connected: model.last_connected,
        last_reported: model.last_reported,
        labels: model.labels,
        base_address: model.base_address,
        admin_state: model.admin_state,
        properties: model.properties,
    }
}

pub fn replace_device_service_model_fields_with_dto(
    service: &mut models::DeviceService,
    patch: &UpdateDeviceService,
) {
    if let Some(description) = &patch.description {
        service.description = description.clone();
    }
    if let Some(base_address) = &patch.base_address {
        service.base_address = base_address.clone();
    }
    if let Some(labels) = &patch.labels {
        service.labels = labels.clone();
    }
    if let Some(admin_state) = patch.admin_state {
        service.admin_state = admin_state;
    }
    if let Some(properties) = &patch.properties {
        service.properties = properties.clone();
    }
}
