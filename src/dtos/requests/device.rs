use crate::{
    dtos::{
        common::BaseRequest,
        device::{to_device_model, Device, UpdateDevice},
    },
    error::EdgexResult,
    models,
    validation::{self, Validator},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body of the add device and device callback endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
pub struct AddDeviceRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[garde(dive)]
    pub device: Device,
}

impl AddDeviceRequest {
    pub fn new(device: Device) -> Self {
        Self {
            base: BaseRequest::new(),
            device,
        }
    }
}

impl Validator for AddDeviceRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)
    }
}

/// Transform add device requests to Device models
pub fn add_device_req_to_device_models(reqs: Vec<AddDeviceRequest>) -> Vec<models::Device> {
    reqs.into_iter().map(|req| to_device_model(req.device)).collect()
}

/// Request body of the update device endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
pub struct UpdateDeviceRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[garde(dive)]
    pub device: UpdateDevice,
}

impl UpdateDeviceRequest {
    pub fn new(device: UpdateDevice) -> Self {
        Self {
            base: BaseRequest::new(),
            device,
        }
    }
}

impl Validator for UpdateDeviceRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)?;
        validation::require_id_or_name(&self.device.id, &self.device.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{AdminState, OperatingState};
    use crate::validation::from_json;
    use serde_json::json;

    fn add_body() -> serde_json::Value {
        json!({
            "apiVersion": "v3",
            "requestId": "82eb2e26-0f24-48aa-ae4c-de9dac3fb9bc",
            "device": {
                "name": "TestDevice",
                "adminState": "UNLOCKED",
                "operatingState": "UP",
                "serviceName": "TestDeviceService",
                "profileName": "TestDeviceProfile",
                "protocols": {"modbus-ip": {"Address": "localhost", "Port": "502"}}
            }
        })
    }

    #[test]
    fn test_add_device_request_from_json() {
        let body = serde_json::to_vec(&add_body()).unwrap();
        let req: AddDeviceRequest = from_json(&body).unwrap();
        assert_eq!(req.base.api_version, "v3");
        assert_eq!(req.device.name, "TestDevice");
        assert_eq!(req.device.admin_state, AdminState::Unlocked);
        assert_eq!(req.device.operating_state, OperatingState::Up);

        let models = add_device_req_to_device_models(vec![req]);
        assert_eq!(models[0].protocols["modbus-ip"]["Port"], "502");
    }

    #[test]
    fn test_add_device_request_missing_name_is_contract_invalid() {
        let mut body = add_body();
        body["device"]["name"] = json!("");
        let err = from_json::<AddDeviceRequest>(&serde_json::to_vec(&body).unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ContractInvalid);
    }

    #[test]
    fn test_add_device_request_malformed_is_contract_invalid() {
        let err = from_json::<AddDeviceRequest>(br#"{"device": ["not", "an", "object"]}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ContractInvalid);

        let mut body = add_body();
        body["device"]["adminState"] = json!("SLEEPING");
        let err = from_json::<AddDeviceRequest>(&serde_json::to_vec(&body).unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ContractInvalid);
    }

    #[test]
    fn test_update_device_request_requires_id_or_name() {
        let req = UpdateDeviceRequest::new(UpdateDevice {
            description: Some("no identifier".to_string()),
            ..Default::default()
        });
        assert_eq!(req.validate().unwrap_err().kind(), ErrorKind::ContractInvalid);

        let req = UpdateDeviceRequest::new(UpdateDevice {
            name: Some("TestDevice".to_string()),
            ..Default::default()
        });
        assert!(req.validate().is_ok());
    }
}
