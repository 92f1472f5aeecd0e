//! Device domain models.

pub mod device;
pub mod value_objects;

pub use device::Device;
pub use value_objects::{DeviceModel, Imei};
