pub mod common;
pub mod device;
pub mod device_service_callback;
pub mod general;
pub mod interval;
pub mod reading;

// Re-export all APIs
pub use common::CommonClient;
pub use device::DeviceClient;
pub use device_service_callback::DeviceServiceCallbackClient;
pub use general::GeneralClient;
pub use interval::IntervalClient;
pub use reading::ReadingClient;
