//! Request envelopes: request metadata plus one DTO payload

mod device;
mod device_profile;
mod device_service;
mod interval;
mod provision_watcher;

pub use device::*;
pub use device_profile::*;
pub use device_service::*;
pub use interval::*;
pub use provision_watcher::*;
