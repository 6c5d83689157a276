use crate::{models, validation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// One step of a device command, referencing a device resource
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOperation {
    #[serde(default)]
    #[garde(custom(validation::non_empty))]
    pub device_resource: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub default_value: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub mappings: HashMap<String, String>,
}

/// Transform the ResourceOperation DTO to the ResourceOperation model
pub fn to_resource_operation_model(dto: ResourceOperation) -> models::ResourceOperation {
    models::ResourceOperation {
        device_resource: dto.device_resource,
        default_value: dto.default_value,
        mappings: dto.mappings,
    }
}

pub fn to_resource_operation_models(dtos: Vec<ResourceOperation>) -> Vec<models::ResourceOperation> {
    dtos.into_iter().map(to_resource_operation_model).collect()
}

/// Transform the ResourceOperation model to the ResourceOperation DTO
pub fn from_resource_operation_model_to_dto(model: models::ResourceOperation) -> ResourceOperation {
    ResourceOperation {
        device_resource: model.device_resource,
        default_value: model.default_value,
        mappings: model.mappings,
    }
}

pub fn from_resource_operation_models_to_dtos(
    models: Vec<models::ResourceOperation>,
) -> Vec<ResourceOperation> {
    models.into_iter().map(from_resource_operation_model_to_dto).collect()
}
