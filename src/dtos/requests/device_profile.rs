use crate::{
    dtos::{
        common::BaseRequest,
        device_command::UpdateDeviceCommand,
        device_profile::{DeviceProfile, UpdateDeviceProfileBasicInfo},
    },
    error::EdgexResult,
    models,
    validation::{self, Validator},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body carrying a complete device profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
pub struct DeviceProfileRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[garde(dive)]
    pub profile: DeviceProfile,
}

impl DeviceProfileRequest {
    pub fn new(profile: DeviceProfile) -> Self {
        Self {
            base: BaseRequest::new(),
            profile,
        }
    }
}

impl Validator for DeviceProfileRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)
    }
}

/// Request body of the PATCH device profile basic info endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, garde::Validate)]
pub struct DeviceProfileBasicInfoRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[serde(rename = "basicinfo", alias = "basicInfo", alias = "BasicInfo")]
    #[garde(dive)]
    pub basic_info: UpdateDeviceProfileBasicInfo,
}

impl DeviceProfileBasicInfoRequest {
    pub fn new(basic_info: UpdateDeviceProfileBasicInfo) -> Self {
        Self {
            base: BaseRequest::new(),
            basic_info,
        }
    }
}

impl Validator for DeviceProfileBasicInfoRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)?;
        validation::require_id_or_name(&self.basic_info.id, &self.basic_info.name)
    }
}

/// Replace the basic info fields of an existing device profile with the
/// fields present in `patch`
pub fn replace_device_profile_model_basic_info_fields_with_dto(
    profile: &mut models::DeviceProfile,
    patch: &UpdateDeviceProfileBasicInfo,
) {
    if let Some(description) = &patch.description {
        profile.description = description.clone();
    }
    if let Some(manufacturer) = &patch.manufacturer {
        profile.manufacturer = manufacturer.clone();
    }
    if let Some(model) = &patch.model {
        profile.model = model.clone();
    }
    if let Some(labels) = &patch.labels {
        profile.labels = labels.clone();
    }
}

/// Request body of the PATCH device profile device command endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceCommandRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[serde(default)]
    #[garde(custom(validation::no_reserved_name))]
    pub profile_name: String,
    #[garde(dive)]
    pub device_command: UpdateDeviceCommand,
}

impl UpdateDeviceCommandRequest {
    pub fn new(profile_name: impl Into<String>, device_command: UpdateDeviceCommand) -> Self {
        Self {
            base: BaseRequest::new(),
            profile_name: profile_name.into(),
            device_command,
        }
    }
}

impl Validator for UpdateDeviceCommandRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)
    }
}

/// Replace the fields of an existing device command with the fields present
/// in `patch`. The name identifies the command and is not copied.
pub fn replace_device_command_model_fields_with_dto(
    command: &mut models::DeviceCommand,
    patch: &UpdateDeviceCommand,
) {
    if let Some(is_hidden) = patch.is_hidden {
        command.is_hidden = is_hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{DeviceCommand, ReadWrite, ResourceOperation};
    use crate::validation::from_json;

    fn profile_model() -> models::DeviceProfile {
        models::DeviceProfile {
            name: "Thermostat".to_string(),
            description: "Wall thermostat".to_string(),
            manufacturer: "Acme".to_string(),
            model: "T-1000".to_string(),
            labels: vec!["hvac".to_string(), "thermostat".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_info_request_from_json() {
        let body = br#"{
            "apiVersion": "v3",
            "requestId": "82eb2e26-0f24-48aa-ae4c-de9dac3fb9bc",
            "basicinfo": {"name": "Thermostat", "manufacturer": "Globex"}
        }"#;
        let req: DeviceProfileBasicInfoRequest = from_json(body).unwrap();
        assert_eq!(req.basic_info.name.as_deref(), Some("Thermostat"));
        assert_eq!(req.basic_info.manufacturer.as_deref(), Some("Globex"));
        assert!(req.basic_info.labels.is_none());
    }

    #[test]
    fn test_basic_info_request_invalid_json_is_contract_invalid() {
        let err = from_json::<DeviceProfileBasicInfoRequest>(b"{\"basicinfo\": 7}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ContractInvalid);
    }

    #[test]
    fn test_basic_info_request_invalid_name_is_contract_invalid() {
        let body = br#"{"apiVersion": "v3", "basicinfo": {"name": "a/b"}}"#;
        let err = from_json::<DeviceProfileBasicInfoRequest>(body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ContractInvalid);

        let body = br#"{"apiVersion": "v3", "basicinfo": {"model": "T-2000"}}"#;
        assert!(from_json::<DeviceProfileBasicInfoRequest>(body).is_err());
    }

    #[test]
    fn test_replace_basic_info_changes_only_present_fields() {
        let original = profile_model();
        let mut patched = original.clone();
        let patch = UpdateDeviceProfileBasicInfo {
            name: Some("Thermostat".to_string()),
            manufacturer: Some("Globex".to_string()),
            ..Default::default()
        };
        replace_device_profile_model_basic_info_fields_with_dto(&mut patched, &patch);

        let mut expected = original;
        expected.manufacturer = "Globex".to_string();
        assert_eq!(patched, expected);
    }

    #[test]
    fn test_replace_basic_info_each_field_in_isolation() {
        let original = profile_model();
        let patches = [
            UpdateDeviceProfileBasicInfo {
                description: Some(String::new()),
                ..Default::default()
            },
            UpdateDeviceProfileBasicInfo {
                model: Some("T-2000".to_string()),
                ..Default::default()
            },
            UpdateDeviceProfileBasicInfo {
                labels: Some(vec!["new".to_string()]),
                ..Default::default()
            },
        ];
        for patch in patches {
            let mut patched = original.clone();
            replace_device_profile_model_basic_info_fields_with_dto(&mut patched, &patch);
            assert_eq!(patched.name, original.name);
            assert_eq!(patched.manufacturer, original.manufacturer);
            assert_eq!(patched.description, patch.description.clone().unwrap_or(original.description.clone()));
            assert_eq!(patched.model, patch.model.clone().unwrap_or(original.model.clone()));
            assert_eq!(patched.labels, patch.labels.clone().unwrap_or(original.labels.clone()));
        }
    }

    #[test]
    fn test_replace_basic_info_empty_labels_clear_the_list() {
        let mut profile = profile_model();
        let absent = UpdateDeviceProfileBasicInfo::default();
        replace_device_profile_model_basic_info_fields_with_dto(&mut profile, &absent);
        assert_eq!(profile.labels.len(), 2);

        let empty = UpdateDeviceProfileBasicInfo {
            labels: Some(vec![]),
            ..Default::default()
        };
        replace_device_profile_model_basic_info_fields_with_dto(&mut profile, &empty);
        assert!(profile.labels.is_empty());
    }

    #[test]
    fn test_replace_device_command_fields() {
        let original = DeviceCommand {
            name: "Switch".to_string(),
            is_hidden: false,
            read_write: ReadWrite::ReadWrite,
            resource_operations: vec![ResourceOperation {
                device_resource: "SwitchA".to_string(),
                ..Default::default()
            }],
            tags: Default::default(),
        };

        let mut command = original.clone();
        replace_device_command_model_fields_with_dto(
            &mut command,
            &UpdateDeviceCommand {
                name: Some("Switch".to_string()),
                is_hidden: None,
            },
        );
        assert_eq!(command, original);

        replace_device_command_model_fields_with_dto(
            &mut command,
            &UpdateDeviceCommand {
                name: Some("Switch".to_string()),
                is_hidden: Some(true),
            },
        );
        assert!(command.is_hidden);
        assert_eq!(command.resource_operations, original.resource_operations);
    }

    #[test]
    fn test_update_device_command_request_validation() {
        let req = UpdateDeviceCommandRequest::new(
            "Thermostat",
            UpdateDeviceCommand {
                name: Some("Switch".to_string()),
                is_hidden: Some(false),
            },
        );
        assert!(req.validate().is_ok());

        let req = UpdateDeviceCommandRequest::new("", req.device_command.clone());
        assert!(req.validate().is_err());
    }
}
