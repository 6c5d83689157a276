//! Domain models: the internal representation data is mapped into once it
//! leaves the wire format

mod common;
mod device;
mod device_profile;
mod device_service;
mod interval;
mod provision_watcher;
mod reading;

pub use common::*;
pub use device::*;
pub use device_profile::*;
pub use device_service::*;
pub use interval::*;
pub use provision_watcher::*;
pub use reading::*;
