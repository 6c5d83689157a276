//! Response envelopes of the read endpoints

use super::{
    common::{BaseResponse, BaseWithTotalCountResponse},
    device::Device,
    interval::Interval,
    reading::BaseReading,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeviceResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub device: Device,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct MultiDevicesResponse {
    #[serde(flatten)]
    pub base: BaseWithTotalCountResponse,
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct IntervalResponse {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub interval: Interval,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct MultiIntervalsResponse {
    #[serde(flatten)]
    pub base: BaseWithTotalCountResponse,
    #[serde(default)]
    pub intervals: Vec<Interval>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct MultiReadingsResponse {
    #[serde(flatten)]
    pub base: BaseWithTotalCountResponse,
    #[serde(default)]
    pub readings: Vec<BaseReading>,
}
