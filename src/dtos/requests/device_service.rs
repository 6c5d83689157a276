use crate::{
    dtos::{common::BaseRequest, device_service::UpdateDeviceService},
    error::EdgexResult,
    validation::{self, Validator},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body sent to a device service when its own definition changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
pub struct UpdateDeviceServiceRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[garde(dive)]
    pub service: UpdateDeviceService,
}

impl UpdateDeviceServiceRequest {
    pub fn new(service: UpdateDeviceService) -> Self {
        Self {
            base: BaseRequest::new(),
            service,
        }
    }
}

impl Validator for UpdateDeviceServiceRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)?;
        validation::require_id_or_name(&self.service.id, &self.service.name)
    }
}
