use super::resource_operation::{
    from_resource_operation_models_to_dtos, to_resource_operation_models, ResourceOperation,
};
use crate::{
    models::{self, ReadWrite},
    validation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// A named group of resource operations exposed by a device profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCommand {
    #[serde(default)]
    #[garde(custom(validation::unreserved_name))]
    pub name: String,
    #[serde(default)]
    #[garde(skip)]
    pub is_hidden: bool,
    #[garde(skip)]
    pub read_write: ReadWrite,
    #[serde(default)]
    #[garde(length(min = 1), dive)]
    pub resource_operations: Vec<ResourceOperation>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub tags: HashMap<String, serde_json::Value>,
}

/// Partial update of a device command, identified by its name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(required, custom(validation::opt_unreserved_name))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub is_hidden: Option<bool>,
}

/// Transform the DeviceCommand DTO to the DeviceCommand model
pub fn to_device_command_model(dto: DeviceCommand) -> models::DeviceCommand {
    models::DeviceCommand {
        name: dto.name,
        is_hidden: dto.is_hidden,
        read_write: dto.read_write,
        resource_operations: to_resource_operation_models(dto.resource_operations),
        tags: dto.tags,
    }
}

/// Transform the DeviceCommand DTOs to the DeviceCommand models
pub fn to_device_command_models(dtos: Vec<DeviceCommand>) -> Vec<models::DeviceCommand> {
    dtos.into_iter().map(to_device_command_model).collect()
}

/// Transform the DeviceCommand model to the DeviceCommand DTO
pub fn from_device_command_model_to_dto(model: models::DeviceCommand) -> DeviceCommand {
    DeviceCommand {
        name: model.name,
        is_hidden: model.is_hidden,
        read_write: model.read_write,
        resource_operations: from_resource_operation_models_to_dtos(model.resource_operations),
        tags: model.tags,
    }
}

/// Transform the DeviceCommand models to the DeviceCommand DTOs
pub fn from_device_command_models_to_dtos(models: Vec<models::DeviceCommand>) -> Vec<DeviceCommand> {
    models.into_iter().map(from_device_command_model_to_dto).collect()
}
