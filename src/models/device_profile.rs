use super::{ReadWrite, Tags};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub manufacturer: String,
    pub model: String,
    pub labels: Vec<String>,
    pub device_resources: Vec<DeviceResource>,
    pub device_commands: Vec<DeviceCommand>,
    pub created: i64,
    pub modified: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceResource {
    pub description: String,
    pub name: String,
    pub is_hidden: bool,
    pub properties: ResourceProperties,
    pub attributes: HashMap<String, serde_json::Value>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceProperties {
    pub value_type: String,
    pub read_write: ReadWrite,
    pub units: String,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub default_value: String,
    pub mask: Option<u64>,
    pub shift: Option<i64>,
    pub scale: Option<f64>,
    pub offset: Option<f64>,
    pub base: Option<f64>,
    pub assertion: String,
    pub media_type: String,
    pub optional: HashMap<String, serde_json::Value>,
}

/// A named group of resource operations executed together
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceCommand {
    pub name: String,
    pub is_hidden: bool,
    pub read_write: ReadWrite,
    pub resource_operations: Vec<ResourceOperation>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceOperation {
    pub device_resource: String,
    pub default_value: String,
    pub mappings: HashMap<String, String>,
}
