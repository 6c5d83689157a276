use crate::{
    dtos::{
        common::BaseRequest,
        provision_watcher::{to_provision_watcher_model, ProvisionWatcher, UpdateProvisionWatcher},
    },
    error::EdgexResult,
    models,
    validation::{self, Validator},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddProvisionWatcherRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[garde(dive)]
    pub provision_watcher: ProvisionWatcher,
}

impl AddProvisionWatcherRequest {
    pub fn new(provision_watcher: ProvisionWatcher) -> Self {
        Self {
            base: BaseRequest::new(),
            provision_watcher,
        }
    }
}

impl Validator for AddProvisionWatcherRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)
    }
}

/// Transform add provision watcher requests to ProvisionWatcher models
pub fn add_provision_watcher_req_to_provision_watcher_models(
    reqs: Vec<AddProvisionWatcherRequest>,
) -> Vec<models::ProvisionWatcher> {
    reqs.into_iter()
        .map(|req| to_provision_watcher_model(req.provision_watcher))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProvisionWatcherRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[garde(dive)]
    pub provision_watcher: UpdateProvisionWatcher,
}

impl UpdateProvisionWatcherRequest {
    pub fn new(provision_watcher: UpdateProvisionWatcher) -> Self {
        Self {
            base: BaseRequest::new(),
            provision_watcher,
        }
    }
}

impl Validator for UpdateProvisionWatcherRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)?;
        validation::require_id_or_name(&self.provision_watcher.id, &self.provision_watcher.name)
    }
}
