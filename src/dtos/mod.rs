//! Data transfer objects mirroring the JSON contract of the REST APIs,
//! together with their mapping to and from the domain models

pub mod common;
pub mod device;
pub mod device_command;
pub mod device_profile;
pub mod device_resource;
pub mod device_service;
pub mod interval;
pub mod provision_watcher;
pub mod reading;
pub mod requests;
pub mod resource_operation;
pub mod responses;

pub use device::*;
pub use device_command::*;
pub use device_profile::*;
pub use device_resource::*;
pub use device_service::*;
pub use interval::*;
pub use provision_watcher::*;
pub use reading::*;
pub use resource_operation::*;

pub(crate) fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

pub(crate) fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}
