//! Business logic use cases

pub mod find_device;
pub mod list_devices;
pub mod register_device;
pub mod remove_device;

pub use find_device::FindDevice;
pub use list_devices::ListDevices;
pub use register_device::RegisterDevice;
pub use remove_device::RemoveDevice;
