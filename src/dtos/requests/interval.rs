use crate::{
    dtos::{
        common::BaseRequest,
        interval::{to_interval_model, Interval, UpdateInterval},
    },
    error::EdgexResult,
    models,
    validation::{self, Validator},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, garde::Validate)]
pub struct AddIntervalRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[garde(dive)]
    pub interval: Interval,
}

impl AddIntervalRequest {
    pub fn new(interval: Interval) -> Self {
        Self {
            base: BaseRequest::new(),
            interval,
        }
    }
}

impl Validator for AddIntervalRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)
    }
}

/// Transform add interval requests to Interval models
pub fn add_interval_req_to_interval_models(reqs: Vec<AddIntervalRequest>) -> Vec<models::Interval> {
    reqs.into_iter().map(|req| to_interval_model(req.interval)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, garde::Validate)]
pub struct UpdateIntervalRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[garde(dive)]
    pub interval: UpdateInterval,
}

impl UpdateIntervalRequest {
    pub fn new(interval: UpdateInterval) -> Self {
        Self {
            base: BaseRequest::new(),
            interval,
        }
    }
}

impl Validator for UpdateIntervalRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)?;
        validation::require_id_or_name(&self.interval.id, &self.interval.name)
    }
}
