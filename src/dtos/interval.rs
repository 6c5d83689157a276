use super::is_zero_i64;
use crate::{models, validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    #[garde(skip)]
    pub created: i64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    #[garde(skip)]
    pub modified: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(custom(validation::empty_or_uuid))]
    pub id: String,
    #[serde(default)]
    #[garde(custom(validation::unreserved_name))]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(custom(validation::empty_or_interval_datetime))]
    pub start: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(custom(validation::empty_or_interval_datetime))]
    pub end: String,
    #[serde(default)]
    #[garde(custom(validation::duration))]
    pub interval: String,
}

/// Partial update of an interval, identified by id or name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_uuid))]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_unreserved_name))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_interval_datetime))]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_interval_datetime))]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(custom(validation::opt_duration))]
    pub interval: Option<String>,
}

/// Transform the Interval DTO to the Interval model
pub fn to_interval_model(dto: Interval) -> models::Interval {
    models::Interval {
        id: dto.id,
        name: dto.name,
        start: dto.start,
        end: dto.end,
        interval: dto.interval,
        created: dto.created,
        modified: dto.modified,
    }
}

/// Transform the Interval model to the Interval DTO
pub fn from_interval_model_to_dto(model: models::Interval) -> Interval {
    Interval {
        created: model.created,
        modified: model.modified,
        id: model.id,
        name: model.name,
        start: model.start,
        end: model.end,
        interval: model.interval,
    }
}

pub fn from_interval_models_to_dtos(models: Vec<models::Interval>) -> Vec<Interval> {
    models.into_iter().map(from_interval_model_to_dto).collect()
}

/// Overwrite the schedule fields of `interval` that are present in `patch`
pub fn replace_interval_model_fields_with_dto(interval: &mut models::Interval, patch: &UpdateInterval) {
    if let Some(start) = &patch.start {
        interval.start = start.clone();
    }
    if let Some(end) = &patch.end {
        interval.end = end.clone();
    }
    if let Some(value) = &patch.interval {
        interval.interval = value.clone();
    }
}
