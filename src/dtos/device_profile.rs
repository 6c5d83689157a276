use super::{
    device_command::{from_device_command_models_to_dtos, to_device_command_models, DeviceCommand},
    device_resource::{
        from_device_resource_models_to_dtos, to_device_resource_models, DeviceResource,
    },
    is_zero_i64,
};
use crate::{models, validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Describes a type of device: its resources and the commands built on them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    #[garde(skip)]
    pub created: i64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    #[garde(skip)]
    pub modified: i64,
    #[serde(flatten)]
    #[garde(dive)]
    pub basic_info: DeviceProfileBasicInfo,
    #[serde(default)]
    #[garde(dive)]
    pub device_resources: Vec<DeviceResource>,
    #[serde(default)]
    #[garde(dive)]
    pub device_commands: Vec<DeviceCommand>,
}

/// Descriptive fields of a device profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfileBasicInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(custom(validation::empty_or_uuid))]
    pub id: String,
    #[serde(default)]
    #[garde(custom(validation::no_reserved_name))]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub manufacturer: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[garde(skip)]
    pub labels: Vec<String>,
}

/// Partial update of a device profile's descriptive fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceProfileBasicInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_uuid))]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_no_reserved_name))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub labels: Option<Vec<String>>,
}

/// Transform the DeviceProfile DTO to the DeviceProfile model
pub fn to_device_profile_model(dto: DeviceProfile) -> models::DeviceProfile {
    let info = dto.basic_info;
    models::DeviceProfile {
        id: info.id,
        name: info.name,
        description: info.description,
        manufacturer: info.manufacturer,
        model: info.model,
        labels: info.labels,
        device_resources: to_device_resource_models(dto.device_resources),
        device_commands: to_device_command_models(dto.device_commands),
        created: dto.created,
        modified: dto.modified,
    }
}

/// Transform the DeviceProfile model to the DeviceProfile DTO
pub fn from_device_profile_model_to_dto(model: models::DeviceProfile) -> DeviceProfile {
    DeviceProfile {
        created: model.created,
        modified: model.modified,
        basic_info: DeviceProfileBasicInfo {
            id: model.id,
            name: model.name,
            manufacturer: model.manufacturer,
            description: model.description,
            model: model.model,
            labels: model.labels,
        },
        device_resources: from_device_resource_models_to_dtos(model.device_resources),
        device_commands: from_device_command_models_to_dtos(model.device_commands),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::{ResourceOperation, ResourceProperties};
    use crate::models::ReadWrite;
    use crate::validation::validate_struct;
    use serde_json::json;
    use std::collections::HashMap;

    fn profile() -> DeviceProfile {
        DeviceProfile {
            created: 1_700_000_000_000,
            modified: 1_700_000_000_500,
            basic_info: DeviceProfileBasicInfo {
                id: "7a1707f0-166f-4c4b-bc9d-1d54c74e0137".to_string(),
                name: "Random-Integer-Device".to_string(),
                manufacturer: "IOTech".to_string(),
                description: "Example of Device-Virtual".to_string(),
                model: "Device-Virtual-01".to_string(),
                labels: vec!["device-virtual-example".to_string()],
            },
            device_resources: vec![DeviceResource {
                description: "Generate random int8 value".to_string(),
                name: "Int8".to_string(),
                is_hidden: false,
                properties: ResourceProperties {
                    value_type: "Int8".to_string(),
                    read_write: ReadWrite::ReadWrite,
                    units: String::new(),
                    minimum: Some(-100.0),
                    maximum: Some(100.0),
                    default_value: "0".to_string(),
                    mask: None,
                    shift: None,
                    scale: Some(1.0),
                    offset: None,
                    base: None,
                    assertion: String::new(),
                    media_type: String::new(),
                    optional: HashMap::new(),
                },
                attributes: HashMap::from([("register".to_string(), json!(40001))]),
                tags: HashMap::new(),
            }],
            device_commands: vec![DeviceCommand {
                name: "Int8Command".to_string(),
                is_hidden: true,
                read_write: ReadWrite::Read,
                resource_operations: vec![ResourceOperation {
                    device_resource: "Int8".to_string(),
                    ..Default::default()
                }],
                tags: HashMap::new(),
            }],
        }
    }

    #[test]
    fn test_device_profile_round_trip() {
        let dto = profile();
        let model = to_device_profile_model(dto.clone());
        assert_eq!(model.name, "Random-Integer-Device");
        assert_eq!(model.device_resources[0].properties.minimum, Some(-100.0));
        assert_eq!(model.device_commands[0].name, "Int8Command");
        assert_eq!(from_device_profile_model_to_dto(model), dto);
    }

    #[test]
    fn test_basic_info_is_inlined_on_the_wire() {
        let value = serde_json::to_value(profile()).unwrap();
        assert_eq!(value["name"], "Random-Integer-Device");
        assert_eq!(value["manufacturer"], "IOTech");
        assert!(value.get("basicInfo").is_none());

        let back: DeviceProfile = serde_json::from_value(value).unwrap();
        assert_eq!(back, profile());
    }

    #[test]
    fn test_device_profile_validation_dives_into_resources() {
        assert!(validate_struct(&profile()).is_ok());

        let mut bad = profile();
        bad.device_resources[0].properties.value_type = "Decimal".to_string();
        assert!(validate_struct(&bad).is_err());

        let mut bad = profile();
        bad.basic_info.name = String::new();
        assert!(validate_struct(&bad).is_err());
    }

    #[test]
    fn test_update_basic_info_accepts_empty_patch() {
        assert!(validate_struct(&UpdateDeviceProfileBasicInfo::default()).is_ok());

        let bad_id = UpdateDeviceProfileBasicInfo {
            id: Some("123".to_string()),
            ..Default::default()
        };
        assert!(validate_struct(&bad_id).is_err());
    }
}
