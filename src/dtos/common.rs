use crate::{
    error::EdgexResult,
    routes::API_VERSION,
    validation::{self, Validator},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metadata carried by every request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct BaseRequest {
    #[serde(default)]
    #[garde(skip)]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(custom(validation::empty_or_uuid))]
    pub request_id: String,
}

impl BaseRequest {
    /// Request metadata for the current API version with a fresh request id
    pub fn new() -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

impl Default for BaseRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Generic status envelope returned by write and delete operations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse {
    #[serde(default)]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub message: serde_json::Value,
    #[serde(default)]
    pub status_code: u16,
}

impl BaseResponse {
    pub fn new(request_id: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            request_id: request_id.into(),
            message: serde_json::Value::String(message.into()),
            status_code,
        }
    }

    /// Message rendered as text; `None` when the server sent no message
    pub fn message_text(&self) -> Option<String> {
        match &self.message {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Whether the reported status code is a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Per-item outcome of a batch add, carrying the id of the created entity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct BaseWithIdResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// Base response of list endpoints, carrying the total number of matches
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaseWithTotalCountResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    #[serde(rename = "Count", default)]
    pub count: u32,
}

/// Service configuration as reported by the config endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(default)]
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub service_name: String,
}

/// Request to store a secret in the service's secret store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct SecretRequest {
    #[serde(flatten)]
    #[garde(dive)]
    pub base: BaseRequest,
    #[serde(default)]
    #[garde(custom(validation::non_empty))]
    pub secret_name: String,
    #[garde(length(min = 1), dive)]
    pub secret_data: Vec<SecretDataKeyValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, garde::Validate)]
pub struct SecretDataKeyValue {
    #[serde(default)]
    #[garde(custom(validation::non_empty))]
    pub key: String,
    #[serde(default)]
    #[garde(skip)]
    pub value: String,
}

impl SecretRequest {
    pub fn new(secret_name: impl Into<String>, secret_data: Vec<SecretDataKeyValue>) -> Self {
        Self {
            base: BaseRequest::new(),
            secret_name: secret_name.into(),
            secret_data,
        }
    }
}

impl Validator for SecretRequest {
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)
    }
}
