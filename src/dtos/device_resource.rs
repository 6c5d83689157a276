use crate::{
    models::{self, ReadWrite},
    validation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResource {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub description: String,
    #[serde(default)]
    #[garde(custom(validation::no_reserved_name))]
    pub name: String,
    #[serde(default)]
    #[garde(skip)]
    pub is_hidden: bool,
    #[garde(dive)]
    pub properties: ResourceProperties,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub attributes: HashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub tags: HashMap<String, serde_json::Value>,
}

/// Value type, access mode and transformations of a device resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResourceProperties {
    #[serde(default)]
    #[garde(custom(validation::value_type))]
    pub value_type: String,
    #[garde(skip)]
    pub read_write: ReadWrite,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub units: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub default_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub mask: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub shift: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub base: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub assertion: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub media_type: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub optional: HashMap<String, serde_json::Value>,
}

pub fn to_resource_properties_model(dto: ResourceProperties) -> models::ResourceProperties {
    models::ResourceProperties {
        value_type: dto.value_type,
        read_write: dto.read_write,
        units: dto.units,
        minimum: dto.minimum,
        maximum: dto.maximum,
        default_value: dto.default_value,
        mask: dto.mask,
        shift: dto.shift,
        scale: dto.scale,
        offset: dto.offset,
        base: dto.base,
        assertion: dto.assertion,
        media_type: dto.media_type,
        optional: dto.optional,
    }
}

pub fn from_resource_properties_model_to_dto(model: models::ResourceProperties) -> ResourceProperties {
    ResourceProperties {
        value_type: model.value_type,
        read_write: model.read_write,
        units: model.units,
        minimum: model.minimum,
        maximum: model.maximum,
        default_value: model.default_value,
        mask: model.mask,
        shift: model.shift,
        scale: model.scale,
        offset: model.offset,
        base: model.base,
        assertion: model.assertion,
        media_type: model.media_type,
        optional: model.optional,
    }
}

/// Transform the DeviceResource DTO to the DeviceResource model
pub fn to_device_resource_model(dto: DeviceResource) -> models::DeviceResource {
    models::DeviceResource {
        description: dto.description,
        name: dto.name,
        is_hidden: dto.is_hidden,
        properties: to_resource_properties_model(dto.properties),
        attributes: dto.attributes,
        tags: dto.tags,
    }
}

pub fn to_device_resource_models(dtos: Vec<DeviceResource>) -> Vec<models::DeviceResource> {
    dtos.into_iter().map(to_device_resource_model).collect()
}

/// Transform the DeviceResource model to the DeviceResource DTO
pub fn from_device_resource_model_to_dto(model: models::DeviceResource) -> DeviceResource {
    DeviceResource {
        description: model.description,
        name: model.name,
        is_hidden: model.is_hidden,
        properties: from_resource_properties_model_to_dto(model.properties),
        attributes: model.attributes,
        tags: model.tags,
    }
}

pub fn from_device_resource_models_to_dtos(models: Vec<models::DeviceResource>) -> Vec<DeviceResource> {
    models.into_iter().map(from_device_resource_model_to_dto).collect()
}
